//! Codec Pipeline Tests
//!
//! This test suite validates the full decode/encode pipeline through the
//! public API, including:
//! - Round-trip behaviour for printable text
//! - Input cleaning (data URI prefixes, whitespace, the first-comma rule)
//! - Content classification (text, binary, embedded JSON)
//! - Rendering decisions layered on top of decode results

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use base64_inspector::codec::{self, CodecError};
use base64_inspector::render::{self, Preview};

#[test]
fn decode_encode_round_trip_preserves_printable_text() {
    let samples = [
        "Hello world",
        "line one\nline two\r\n\ttabbed",
        "symbols !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
        "a",
        "  leading and trailing spaces  ",
    ];

    for sample in samples {
        let encoded = codec::encode(sample).unwrap();
        let decoded = codec::decode(&encoded).unwrap();
        assert_eq!(decoded.bytes(), sample.as_bytes(), "sample: {:?}", sample);
        assert!(decoded.is_text(), "sample: {:?}", sample);
    }
}

#[test]
fn decode_rejects_empty_and_whitespace_input() {
    assert!(matches!(codec::decode(""), Err(CodecError::EmptyInput)));
    assert!(matches!(codec::decode("   "), Err(CodecError::EmptyInput)));
    assert!(matches!(codec::decode("\n\t "), Err(CodecError::EmptyInput)));
}

#[test]
fn encode_rejects_empty_and_whitespace_input() {
    assert!(matches!(codec::encode(""), Err(CodecError::EmptyInput)));
    assert!(matches!(codec::encode("  \n"), Err(CodecError::EmptyInput)));
}

#[test]
fn decode_strips_data_uri_prefix() {
    let decoded = codec::decode("data:text/plain;base64,SGVsbG8=").unwrap();
    assert_eq!(decoded.text(), Some("Hello"));
}

#[test]
fn decode_strips_at_first_comma_anywhere() {
    // The comma rule is not limited to data URI prefixes: everything up to
    // and including the first comma is discarded. Pinned as a known quirk.
    let decoded = codec::decode("see the attached payload, SGVsbG8=").unwrap();
    assert_eq!(decoded.text(), Some("Hello"));

    // A comma inside what the user meant as payload mis-truncates
    let decoded = codec::decode("SGVs,bG8=").unwrap();
    assert_eq!(decoded.text(), Some("lo"));

    // Only the first comma is consumed; later commas stay in the payload
    // and fail alphabet validation
    assert!(matches!(
        codec::decode("a,SGVsbG8=,b"),
        Err(CodecError::InvalidBase64(_))
    ));
}

#[test]
fn decode_tolerates_interspersed_whitespace() {
    let decoded = codec::decode("SGVs\nbG8g\nd29y\nbGQ=").unwrap();
    assert_eq!(decoded.text(), Some("Hello world"));
}

#[test]
fn decode_rejects_invalid_alphabet() {
    assert!(matches!(
        codec::decode("not@@valid!!"),
        Err(CodecError::InvalidBase64(_))
    ));
}

#[test]
fn decode_rejects_missing_padding() {
    assert!(matches!(
        codec::decode("SGVsbG8"),
        Err(CodecError::InvalidBase64(_))
    ));
}

#[test]
fn decode_classifies_embedded_json() {
    let encoded = codec::encode(r#"{"a":1}"#).unwrap();
    let decoded = codec::decode(&encoded).unwrap();

    assert!(decoded.is_json());
    assert!(decoded.is_text(), "JSON classification implies text");
    assert_eq!(decoded.pretty_json(), Some("{\n  \"a\": 1\n}"));
}

#[test]
fn decode_classifies_null_bytes_as_binary() {
    // "AAECAAM=" decodes to bytes containing 0x00
    let decoded = codec::decode("AAECAAM=").unwrap();
    assert!(!decoded.is_text());
    assert!(!decoded.is_json());
    assert_eq!(decoded.pretty_json(), None);
}

#[test]
fn malformed_json_is_not_a_decode_failure() {
    let encoded = codec::encode(r#"{"unterminated": "#).unwrap();
    let decoded = codec::decode(&encoded).unwrap();
    assert!(decoded.is_text());
    assert!(!decoded.is_json());
}

#[test]
fn rendered_binary_preview_truncates_but_copy_text_does_not() {
    // 600 bytes of NULs - beyond both preview limits
    let payload = vec![0u8; 600];
    let decoded = codec::decode(&STANDARD.encode(&payload)).unwrap();

    let overlay = render::render_decode_in(&decoded, Preview::Overlay);
    let panel = render::render_decode_in(&decoded, Preview::Panel);

    assert!(overlay.body.starts_with("[Binary data - 600 bytes]"));
    assert!(overlay.body.ends_with("..."));
    assert!(panel.body.starts_with("[Binary data - 600 bytes]"));
    assert!(panel.body.ends_with("..."));
    // Overlay previews are shorter than panel previews
    assert!(overlay.body.len() < panel.body.len());

    // The copy action always gets the full payload
    assert_eq!(overlay.copy_text.unwrap().chars().count(), 600);
}

#[test]
fn rendered_json_copy_text_is_the_pretty_form() {
    let decoded = codec::decode(&codec::encode(r#"{"op":"mint","tick":"TEST"}"#).unwrap()).unwrap();
    let rendered = render::render_decode_in(&decoded, Preview::Panel);
    assert_eq!(rendered.header, "✓ Decoded JSON");
    assert_eq!(rendered.copy_text.as_deref(), decoded.pretty_json());
}
