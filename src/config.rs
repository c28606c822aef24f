use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::render;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub sites: SitesConfig,
    pub display: DisplayConfig,
}

/// Where the allowed-sites list lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitesConfig {
    pub file: PathBuf,
}

/// Binary preview sizing for rendered results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub overlay_preview_bytes: usize,
    pub panel_preview_bytes: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            overlay_preview_bytes: render::OVERLAY_PREVIEW_BYTES,
            panel_preview_bytes: render::PANEL_PREVIEW_BYTES,
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let display = DisplayConfig::default();
        let config = Config::builder()
            // Start with default values
            .set_default("sites.file", "./sites.toml")?
            .set_default(
                "display.overlay_preview_bytes",
                display.overlay_preview_bytes as i64,
            )?
            .set_default(
                "display.panel_preview_bytes",
                display.panel_preview_bytes as i64,
            )?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            // B64_* env variables can override settings
            .add_source(config::Environment::with_prefix("B64"))
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // Check for specific environment variables with custom names
        if let Ok(sites_file) = env::var("B64_SITES_FILE") {
            app_config.sites.file = PathBuf::from(sites_file);
        }

        Ok(app_config)
    }
}
