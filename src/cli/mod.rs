use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Base64 inspection helper
#[derive(Parser)]
#[command(name = "base64-inspector")]
#[command(about = "Decode and encode Base64 with content classification and per-site activation")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Decode a Base64 payload and classify the result (text, binary, JSON)
    Decode(commands::decode::DecodeCommand),
    /// Encode text as standard padded Base64
    Encode(commands::encode::EncodeCommand),
    /// Manage the allowed-sites list and check helper activation
    Sites(commands::sites::SitesCommand),
}

pub fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode(command) => command.run(),
        Commands::Encode(command) => command.run(),
        Commands::Sites(command) => command.run(),
    }
}
