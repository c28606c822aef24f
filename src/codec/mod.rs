//! Base64 codec with input cleaning and content classification
//!
//! This is the single decode routine shared by every entry point (selection
//! overlay, panel paste, pending text). Cleaning handles the
//! `data:...;base64,` prefix form before decoding; classification decides
//! how the renderer presents the result (JSON, plain text, binary preview).

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub mod content;

pub use content::{classify, ContentKind};

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Codec-specific error types
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Empty input")]
    EmptyInput,

    #[error("Invalid Base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// A successfully decoded payload with its content classification
///
/// The classification invariants (JSON implies text, pretty form present
/// exactly for JSON) are carried by [`ContentKind`] rather than independent
/// flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    bytes: Vec<u8>,
    content: ContentKind,
}

impl Decoded {
    /// Full decoded octets, never truncated
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn content(&self) -> &ContentKind {
        &self.content
    }

    /// True for printable payloads (plain text and JSON alike)
    pub fn is_text(&self) -> bool {
        matches!(self.content, ContentKind::Text | ContentKind::Json { .. })
    }

    pub fn is_json(&self) -> bool {
        matches!(self.content, ContentKind::Json { .. })
    }

    /// 2-space-indented re-serialisation, present exactly for JSON payloads
    pub fn pretty_json(&self) -> Option<&str> {
        match &self.content {
            ContentKind::Json { pretty } => Some(pretty),
            _ => None,
        }
    }

    /// Decoded payload as text; `None` for binary payloads
    pub fn text(&self) -> Option<&str> {
        if self.is_text() {
            // Printable ASCII subset, always valid UTF-8
            std::str::from_utf8(&self.bytes).ok()
        } else {
            None
        }
    }
}

/// Clean raw input ready for decoding
///
/// Trims, discards everything up to and including the first comma (data URI
/// form `data:image/png;base64,<payload>`), then strips all remaining
/// whitespace. The comma rule fires on the first comma anywhere in the
/// input, not only after a recognised data URI prefix - a known quirk that
/// is kept for compatibility with existing inputs.
fn clean_input(input: &str) -> String {
    let trimmed = input.trim();
    let payload = match trimmed.split_once(',') {
        Some((_, rest)) => rest,
        None => trimmed,
    };
    payload.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Decode a Base64 payload and classify the result
///
/// Accepts any string. Fails with [`CodecError::EmptyInput`] when nothing
/// remains after cleaning, and with [`CodecError::InvalidBase64`] on
/// characters outside the standard alphabet or bad padding/length. JSON
/// parse failure is not a decode failure - the payload degrades to plain
/// text classification.
pub fn decode(input: &str) -> CodecResult<Decoded> {
    let cleaned = clean_input(input);
    if cleaned.is_empty() {
        return Err(CodecError::EmptyInput);
    }

    // Standard alphabet, padding required - no URL-safe variant
    let bytes = STANDARD.decode(cleaned.as_bytes())?;
    let content = content::classify(&bytes);

    Ok(Decoded { bytes, content })
}

/// Encode text as standard padded Base64
///
/// Fails with [`CodecError::EmptyInput`] when the input is empty or
/// all-whitespace; otherwise encodes the UTF-8 bytes of the input as given.
pub fn encode(input: &str) -> CodecResult<String> {
    if input.trim().is_empty() {
        return Err(CodecError::EmptyInput);
    }
    Ok(STANDARD.encode(input.as_bytes()))
}
