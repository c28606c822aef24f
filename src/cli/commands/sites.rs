use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::sites::{normalize_hostname, normalize_pattern, store, wildcard_suggestion};
use clap::{Args, Subcommand};
use std::path::PathBuf;
use tracing::info;

/// Manage the allowed-sites list and check helper activation
#[derive(Args)]
pub struct SitesCommand {
    /// Sites file to operate on (overrides config.toml)
    #[arg(long)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub action: SitesAction,
}

/// Operations on the allowed-sites list
#[derive(Subcommand)]
pub enum SitesAction {
    /// Add a hostname or wildcard pattern to the list
    Add {
        /// Pattern such as example.com or *.example.com
        pattern: String,
    },
    /// Remove a pattern from the list
    Remove {
        /// Pattern exactly as shown by `sites list`
        pattern: String,
    },
    /// Show the configured patterns in insertion order
    List,
    /// Report whether the helper is active for a page URL
    Check {
        /// Page URL, e.g. https://sub.example.com/path
        url: String,
    },
}

impl SitesCommand {
    pub fn run(&self) -> AppResult<()> {
        let config = AppConfig::load()
            .map_err(|e| AppError::Config(format!("Failed to load configuration: {}", e)))?;
        let path = self.file.clone().unwrap_or(config.sites.file);
        info!("Using sites file {}", path.display());

        let mut sites = store::load(&path)?;

        match &self.action {
            SitesAction::Add { pattern } => {
                let normalised = normalize_pattern(pattern);
                if sites.add(pattern) {
                    store::save(&path, &sites)?;
                    println!("Website added: {}", normalised);
                } else if normalised.is_empty() {
                    println!("Nothing to add");
                } else {
                    println!("Website already in list: {}", normalised);
                }
            }
            SitesAction::Remove { pattern } => {
                let normalised = normalize_pattern(pattern);
                sites.remove(&normalised);
                store::save(&path, &sites)?;
                println!("Website removed: {}", normalised);
            }
            SitesAction::List => {
                if sites.is_empty() {
                    println!("No websites configured. Helper will appear on all websites.");
                } else {
                    for pattern in sites.patterns() {
                        println!("{}", pattern);
                    }
                }
            }
            SitesAction::Check { url } => match normalize_hostname(url) {
                Ok(hostname) => {
                    let active = sites.helper_active(&hostname);
                    println!(
                        "{}: helper {}",
                        hostname,
                        if active { "active" } else { "inactive" }
                    );
                    if sites.is_empty() {
                        println!(
                            "(no restriction configured - restrict with a pattern, {})",
                            wildcard_suggestion(&hostname)
                        );
                    }
                }
                Err(e) => {
                    // "No current hostname" is an answer, not a failure
                    println!("Could not detect website from {}: {}", url, e);
                }
            },
        }

        Ok(())
    }
}
