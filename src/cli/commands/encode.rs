use crate::codec;
use crate::errors::AppResult;
use clap::Args;
use tracing::info;

/// Encode text as standard padded Base64
#[derive(Args)]
pub struct EncodeCommand {
    /// Text to encode; use '-' to read from stdin
    pub input: String,
}

impl EncodeCommand {
    pub fn run(&self) -> AppResult<()> {
        let input = super::read_input(&self.input)?;
        let encoded = codec::encode(&input)?;
        info!("Encoded {} byte(s)", input.len());
        println!("{}", encoded);
        Ok(())
    }
}
