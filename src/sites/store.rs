//! Sites file persistence
//!
//! The allow-list is stored as a small TOML document:
//!
//! ```toml
//! allowed = ["example.com", "*.corp.example.org"]
//! ```
//!
//! The matcher itself never touches disk - this module is the boundary the
//! caller uses to supply and persist the list.

use super::SiteList;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Result type for sites store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Sites store error types
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sites file parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Sites file serialise error: {0}")]
    Serialise(#[from] toml::ser::Error),
}

/// On-disk document shape
#[derive(Debug, Default, Serialize, Deserialize)]
struct SitesDocument {
    #[serde(default)]
    allowed: Vec<String>,
}

/// Load the pattern list; a missing file is an empty list (first run)
///
/// Entries are re-normalised on load so hand-edited files still satisfy the
/// matcher's pre-normalised precondition.
pub fn load(path: &Path) -> StoreResult<SiteList> {
    if !path.exists() {
        debug!(
            "Sites file {} not found, starting with an empty list",
            path.display()
        );
        return Ok(SiteList::new());
    }

    let raw = std::fs::read_to_string(path)?;
    let doc: SitesDocument = toml::from_str(&raw)?;
    Ok(SiteList::from_patterns(doc.allowed))
}

/// Persist the pattern list, creating parent directories as needed
pub fn save(path: &Path, sites: &SiteList) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let doc = SitesDocument {
        allowed: sites.patterns().to_vec(),
    };
    std::fs::write(path, toml::to_string_pretty(&doc)?)?;
    debug!("Saved {} pattern(s) to {}", sites.len(), path.display());
    Ok(())
}
