//! Edge case integration tests for the armor decoder.
//!
//! Every fixture here is rejected by exactly one pipeline stage, and the
//! error must come from that stage:
//!
//! - **Envelope**: too few lines for the fixed envelope, or (scan mode) no
//!   separators at all.
//! - **Transport**: a body that is not base64.
//! - **Inflate**: base64 that is not a zlib stream, or one that inflates
//!   beyond the configured limit.
//! - **Sections**: a header block or payload that runs to end of input.
//!
//! No partial [`Message`](armor_types::Message) is ever produced for these
//! inputs.

use std::path::Path;

use armor_decoder::{ArmorDecoder, DecodeError, DecoderConfig, ParseError};
use armor_wire::{EnvelopeMode, WireError};

fn golden(fixture: &str) -> String {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let path = manifest_dir
        .join("tests/golden")
        .join(fixture)
        .join("document.armor");
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden fixture {}: {e}", path.display()))
}

// ── Envelope ──────────────────────────────────────────────────────────────────

#[test]
fn short_envelope_rejected() {
    let result = ArmorDecoder::decode_str(&golden("edge_cases/short_envelope"));
    assert!(
        matches!(
            result,
            Err(DecodeError::Wire(WireError::EnvelopeTooShort { lines: 5, min: 6 }))
        ),
        "got {result:?}"
    );
}

#[test]
fn short_envelope_rejected_as_raw_lines() {
    let document = golden("edge_cases/short_envelope");
    let lines: Vec<&str> = document.lines().collect();
    assert!(matches!(
        ArmorDecoder::decode(&lines),
        Err(DecodeError::Wire(WireError::EnvelopeTooShort { .. }))
    ));
}

#[test]
fn empty_document_rejected() {
    let empty: [&str; 0] = [];
    assert!(matches!(
        ArmorDecoder::decode(&empty),
        Err(DecodeError::Wire(WireError::EnvelopeTooShort { lines: 0, .. }))
    ));
}

#[test]
fn scan_mode_requires_separators() {
    let config = DecoderConfig {
        envelope: EnvelopeMode::Scan,
        ..DecoderConfig::default()
    };
    let result = ArmorDecoder::decode_with_config(&["just", "some", "text"], &config);
    assert!(matches!(
        result,
        Err(DecodeError::Wire(WireError::MissingBoundary { boundary: "BEGIN" }))
    ));
}

#[test]
fn scan_envelope_breaks_fixed_mode() {
    // One metadata line shifts the fixed offsets into the base64 body.
    let result = ArmorDecoder::decode_str(&golden("edge_cases/scan_envelope"));
    assert!(result.is_err());
}

// ── Transport ─────────────────────────────────────────────────────────────────

#[test]
fn bad_base64_rejected() {
    let result = ArmorDecoder::decode_str(&golden("edge_cases/bad_base64"));
    assert!(
        matches!(result, Err(DecodeError::Wire(WireError::InvalidBase64(_)))),
        "got {result:?}"
    );
}

// ── Inflate ───────────────────────────────────────────────────────────────────

#[test]
fn uncompressed_body_rejected() {
    let result = ArmorDecoder::decode_str(&golden("edge_cases/not_zlib"));
    assert!(
        matches!(result, Err(DecodeError::DecompressFailed(_))),
        "got {result:?}"
    );
}

#[test]
fn inflation_limit_applies_to_fixtures() {
    let config = DecoderConfig {
        max_decompressed_size: 16,
        ..DecoderConfig::default()
    };
    let result = ArmorDecoder::decode_str_with_config(&golden("signed_contract"), &config);
    assert!(matches!(
        result,
        Err(DecodeError::DecompressionBomb { limit: 16 })
    ));
}

// ── Sections ──────────────────────────────────────────────────────────────────

#[test]
fn unterminated_headers_rejected() {
    let result = ArmorDecoder::decode_str(&golden("edge_cases/unterminated_headers"));
    assert!(
        matches!(
            result,
            Err(DecodeError::Parse(ParseError::InvalidTransactionHeader { start: 2 }))
        ),
        "got {result:?}"
    );
}

#[test]
fn unterminated_payload_rejected() {
    let result = ArmorDecoder::decode_str(&golden("edge_cases/unterminated_payload"));
    assert!(
        matches!(
            result,
            Err(DecodeError::Parse(ParseError::MalformedPayload { line: 4, .. }))
        ),
        "got {result:?}"
    );
}

#[test]
fn errors_display_without_panicking() {
    for fixture in [
        "edge_cases/short_envelope",
        "edge_cases/bad_base64",
        "edge_cases/not_zlib",
        "edge_cases/unterminated_headers",
        "edge_cases/unterminated_payload",
    ] {
        let err = ArmorDecoder::decode_str(&golden(fixture)).unwrap_err();
        assert!(!err.to_string().is_empty(), "fixture {fixture}");
    }
}
