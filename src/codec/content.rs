//! Decoded-content classification
//!
//! This module provides the classification shared by all decode entry
//! points: printable text, embedded JSON (re-serialised for display), or
//! binary. It is a pure helper with no I/O dependencies.

/// Classification of a decoded payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentKind {
    /// Printable text that parses as JSON; `pretty` holds the 2-space
    /// indented re-serialisation
    Json { pretty: String },
    /// Printable text (ASCII 0x20-0x7E plus newline, carriage return, tab)
    Text,
    /// Anything else
    Binary,
}

/// Check whether every byte is displayable as-is
///
/// Printable ASCII plus newline, carriage return and tab. Empty payloads
/// count as text.
pub fn is_printable_text(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .all(|&b| matches!(b, 0x20..=0x7E | b'\n' | b'\r' | b'\t'))
}

/// Classify decoded bytes for presentation
///
/// JSON detection only runs on printable text, and a parse failure is not
/// surfaced - the payload simply stays classified as plain text.
pub fn classify(bytes: &[u8]) -> ContentKind {
    if !is_printable_text(bytes) {
        return ContentKind::Binary;
    }

    let text = String::from_utf8_lossy(bytes);
    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(parsed) => match serde_json::to_string_pretty(&parsed) {
            Ok(pretty) => ContentKind::Json { pretty },
            Err(_) => ContentKind::Text,
        },
        Err(_) => ContentKind::Text,
    }
}
