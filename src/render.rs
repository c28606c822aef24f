//! Presentation decisions for decode results
//!
//! The codec returns full decoded data; this module owns how it is shown:
//! preview truncation for binary payloads, header/body selection, the
//! untruncated copy text, and the single transient overlay a page is
//! allowed to keep.

use crate::codec::{CodecError, Decoded};

/// Binary preview limit for the in-page selection overlay
pub const OVERLAY_PREVIEW_BYTES: usize = 200;

/// Binary preview limit for the panel
pub const PANEL_PREVIEW_BYTES: usize = 500;

/// Preview sizing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    /// Compact in-page overlay next to the selection
    Overlay,
    /// The larger paste panel
    Panel,
}

impl Preview {
    pub fn limit(self) -> usize {
        match self {
            Preview::Overlay => OVERLAY_PREVIEW_BYTES,
            Preview::Panel => PANEL_PREVIEW_BYTES,
        }
    }
}

/// A rendered result, ready for the host surface to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub header: String,
    pub body: String,
    /// Untruncated text for the copy action; absent on error results
    pub copy_text: Option<String>,
}

/// Render a successful decode with an explicit binary preview limit
pub fn render_decode(decoded: &Decoded, limit: usize) -> Rendered {
    let header = if decoded.is_json() {
        "✓ Decoded JSON"
    } else {
        "✓ Decoded"
    };

    let body = if let Some(pretty) = decoded.pretty_json() {
        pretty.to_string()
    } else if let Some(text) = decoded.text() {
        text.to_string()
    } else {
        binary_preview(decoded.bytes(), limit)
    };

    Rendered {
        header: header.to_string(),
        body,
        copy_text: Some(copy_text(decoded)),
    }
}

/// Render a successful decode for a standard context
pub fn render_decode_in(decoded: &Decoded, preview: Preview) -> Rendered {
    render_decode(decoded, preview.limit())
}

/// Render a codec failure
///
/// No copy text - the copy action is only offered for successful decodes.
pub fn render_error(error: &CodecError) -> Rendered {
    Rendered {
        header: "✗ Error".to_string(),
        body: error.to_string(),
        copy_text: None,
    }
}

/// Binary body: total byte count plus a bounded lossy preview
fn binary_preview(bytes: &[u8], limit: usize) -> String {
    let shown = &bytes[..bytes.len().min(limit)];
    let marker = if bytes.len() > limit { "..." } else { "" };
    format!(
        "[Binary data - {} bytes]\n{}{}",
        bytes.len(),
        String::from_utf8_lossy(shown),
        marker
    )
}

/// Untruncated copy payload: pretty JSON when available, else the full
/// decoded text (lossy UTF-8 for binary payloads)
pub fn copy_text(decoded: &Decoded) -> String {
    match decoded.pretty_json() {
        Some(pretty) => pretty.to_string(),
        None => String::from_utf8_lossy(decoded.bytes()).into_owned(),
    }
}

/// The single transient overlay a page may show
///
/// Showing a new overlay replaces the live one, so at most one exists at a
/// time. The slot is passed around explicitly by the host; there is no
/// module-level instance.
#[derive(Debug, Default)]
pub struct OverlaySlot {
    current: Option<Rendered>,
}

impl OverlaySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `rendered`, returning the overlay it replaced (if any) so the
    /// host can tear the old one down
    pub fn show(&mut self, rendered: Rendered) -> Option<Rendered> {
        self.current.replace(rendered)
    }

    /// Dismiss the live overlay, if any
    pub fn dismiss(&mut self) -> Option<Rendered> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&Rendered> {
        self.current.as_ref()
    }
}
