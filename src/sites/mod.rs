//! Per-site activation matching
//!
//! Decides where the in-page helper appears. Patterns are normalised
//! hostnames (`example.com`) or wildcards (`*.example.com`); the list is
//! owned by the caller (settings surface) and the matcher only reads it.

use serde::{Deserialize, Serialize};

pub mod hostname;
pub mod store;

pub use hostname::{normalize_hostname, normalize_pattern, wildcard_suggestion};

/// Result type for site matcher operations
pub type SiteResult<T> = Result<T, SiteError>;

/// Site matcher error types
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// True when at least one pattern matches the hostname
///
/// An empty pattern set always returns `false` here. "No patterns
/// configured means the helper appears everywhere" is deliberately NOT this
/// function's decision - that policy inversion lives one layer up in
/// [`SiteList::helper_active`], so membership and policy cannot be
/// conflated.
pub fn is_allowed(hostname: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|p| pattern_matches(p, hostname))
}

/// Exact or wildcard match against a single normalised pattern
///
/// `*.example.com` matches `example.com` itself and any of its subdomains;
/// it never matches `notexample.com`.
fn pattern_matches(pattern: &str, hostname: &str) -> bool {
    if let Some(domain) = pattern.strip_prefix("*.") {
        hostname == domain || hostname.ends_with(&format!(".{}", domain))
    } else {
        pattern == hostname
    }
}

/// Ordered, deduplicated collection of allow-patterns
///
/// Insertion order is preserved for display; matching ignores it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteList {
    patterns: Vec<String>,
}

impl SiteList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from raw pattern strings, normalising each and dropping
    /// entries that normalise to nothing or duplicate an earlier entry
    pub fn from_patterns<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for pattern in raw {
            list.add(pattern.as_ref());
        }
        list
    }

    /// Add a pattern, normalising it first
    ///
    /// Returns `false` when the input normalises to nothing or is already
    /// present - the caller surfaces the latter as "already in list" rather
    /// than a silent success.
    pub fn add(&mut self, raw: &str) -> bool {
        let normalised = normalize_pattern(raw);
        if normalised.is_empty() || self.patterns.contains(&normalised) {
            return false;
        }
        self.patterns.push(normalised);
        true
    }

    /// Remove every entry exactly equal to `pattern`; no-op when absent
    pub fn remove(&mut self, pattern: &str) {
        self.patterns.retain(|p| p != pattern);
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Patterns in insertion order
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Membership check for an already-normalised hostname
    pub fn is_allowed(&self, hostname: &str) -> bool {
        is_allowed(hostname, &self.patterns)
    }

    /// Whether the helper UI should appear on `hostname`
    ///
    /// An empty list means "no restriction configured" and the helper shows
    /// everywhere; a non-empty list restricts activation to matching sites.
    /// This is the caller-side policy layered over [`is_allowed`].
    pub fn helper_active(&self, hostname: &str) -> bool {
        self.patterns.is_empty() || self.is_allowed(hostname)
    }
}
