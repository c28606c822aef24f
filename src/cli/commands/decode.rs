use crate::codec;
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::render;
use clap::Args;
use tracing::info;

/// Decode a Base64 payload and classify the result (text, binary, JSON)
#[derive(Args)]
pub struct DecodeCommand {
    /// Base64 text to decode; use '-' to read from stdin
    pub input: String,

    /// Use the compact overlay preview sizing instead of the panel sizing
    #[arg(long)]
    pub overlay: bool,

    /// Print the untruncated copy text instead of the rendered preview
    #[arg(long)]
    pub copy: bool,
}

impl DecodeCommand {
    pub fn run(&self) -> AppResult<()> {
        let input = super::read_input(&self.input)?;
        info!("Decoding {} character(s) of input", input.len());

        let config = AppConfig::load()
            .map_err(|e| AppError::Config(format!("Failed to load configuration: {}", e)))?;
        let limit = if self.overlay {
            config.display.overlay_preview_bytes
        } else {
            config.display.panel_preview_bytes
        };

        match codec::decode(&input) {
            Ok(decoded) => {
                info!(
                    "Decoded {} byte(s) (text: {}, JSON: {})",
                    decoded.len(),
                    decoded.is_text(),
                    decoded.is_json()
                );
                if self.copy {
                    println!("{}", render::copy_text(&decoded));
                } else {
                    let rendered = render::render_decode(&decoded, limit);
                    println!("{}", rendered.header);
                    println!("{}", rendered.body);
                }
                Ok(())
            }
            Err(e) => {
                // Render the failure the way the overlay would, then let the
                // binary exit non-zero
                let rendered = render::render_error(&e);
                println!("{}", rendered.header);
                println!("{}", rendered.body);
                Err(e.into())
            }
        }
    }
}
