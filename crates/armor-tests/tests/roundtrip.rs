//! Roundtrip integration tests for the encode → decode pipeline.
//!
//! Each test builds a document with [`ArmorEncoder`], decodes it with
//! [`ArmorDecoder`], and checks the decoded fields against what went in.
//! Payloads are compared after trimming each line of spaces and tabs,
//! which is what the section grammar does on read.

use armor_decoder::{ArmorDecoder, DecoderConfig};
use armor_encoder::{ArmorEncoder, EncodeError};
use armor_types::Message;

fn roundtrip(encoder: &ArmorEncoder) -> Message {
    let document = encoder.encode().expect("encode");
    ArmorDecoder::decode_str(&document).expect("decode")
}

fn trimmed_lines(text: &str) -> String {
    text.split('\n')
        .map(|l| l.trim_matches([' ', '\t']))
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Field preservation ────────────────────────────────────────────────────────

#[test]
fn roundtrip_contract() {
    let mut encoder = ArmorEncoder::new("SIGNED CONTRACT");
    encoder
        .header("Version", "1")
        .payload("something sane")
        .add_signature("SIGNATURE", "something sane");
    let message = roundtrip(&encoder);
    assert_eq!(message.message_type(), "SIGNED CONTRACT");
    assert_eq!(message.payload(), "something sane");
    assert_eq!(message.signatures(), ["something sane"]);
}

#[test]
fn roundtrip_account_type() {
    let mut encoder = ArmorEncoder::new("SIGNED ACCOUNT");
    encoder.payload("balance 10").add_signature("SIGNATURE", "c2ln");
    assert_eq!(roundtrip(&encoder).message_type(), "SIGNED ACCOUNT");
}

#[test]
fn roundtrip_many_signatures_keeps_order() {
    let mut encoder = ArmorEncoder::new("SIGNED LEDGER");
    encoder.payload("ledger");
    let bodies: Vec<String> = (0..5).map(|i| format!("c2lnbmF0dXJl{i}")).collect();
    for body in &bodies {
        encoder.add_signature("SIGNATURE", body.clone());
    }
    let message = roundtrip(&encoder);
    assert_eq!(message.signatures(), bodies.as_slice());
    assert!(message.is_signed());
}

#[test]
fn roundtrip_long_wrapped_signature() {
    let body = "QUJD".repeat(200);
    let mut encoder = ArmorEncoder::new("NOTICE");
    encoder
        .payload("x")
        .add_signature_with_headers("SIGNATURE", &[("Version", "1"), ("Hash", "SHA256")], body.clone());
    assert_eq!(roundtrip(&encoder).signatures(), [body.as_str()]);
}

#[test]
fn roundtrip_multiline_payload_is_trimmed_per_line() {
    let payload = "  indented line\n\ttabbed\t\n\nlast";
    let mut encoder = ArmorEncoder::new("NOTICE");
    encoder.payload(payload);
    let message = roundtrip(&encoder);
    assert_eq!(message.payload(), trimmed_lines(payload));
    assert_eq!(message.payload(), "indented line\ntabbed\n\nlast");
}

#[test]
fn roundtrip_empty_payload_unsigned() {
    let message = roundtrip(&ArmorEncoder::new("NOTICE"));
    assert_eq!(message.payload(), "");
    assert!(message.signatures().is_empty());
    assert!(!message.is_signed());
}

#[test]
fn roundtrip_unicode_payload() {
    let mut encoder = ArmorEncoder::new("NOTICE");
    encoder.payload("grüße aus Zürich\n日本語");
    assert_eq!(roundtrip(&encoder).payload(), "grüße aus Zürich\n日本語");
}

#[test]
fn roundtrip_large_payload() {
    let payload = (0..2000)
        .map(|i| format!("{}entry {i}", "z".repeat(i % 50)))
        .collect::<Vec<_>>()
        .join("\n");
    let mut encoder = ArmorEncoder::new("SIGNED LEDGER");
    encoder.payload(payload.clone()).add_signature("SIGNATURE", "c2ln");
    assert_eq!(roundtrip(&encoder).payload(), payload);
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[test]
fn encoding_is_deterministic() {
    let mut encoder = ArmorEncoder::new("SIGNED CONTRACT");
    encoder.header("Version", "1").payload("a\nb").add_signature("SIGNATURE", "c2ln");
    assert_eq!(encoder.encode().unwrap(), encoder.encode().unwrap());
}

#[test]
fn decoded_messages_compare_equal() {
    let mut encoder = ArmorEncoder::new("SIGNED CONTRACT");
    encoder.payload("same").add_signature("SIGNATURE", "c2ln");
    assert_eq!(roundtrip(&encoder), roundtrip(&encoder));
}

// ── Envelope options ──────────────────────────────────────────────────────────

#[test]
fn custom_envelope_roundtrips_in_scan_mode() {
    let mut encoder = ArmorEncoder::new("SIGNED CONTRACT");
    encoder
        .armor_label("OT ARMORED CONTRACT")
        .armor_headers(&[("Version", "1"), ("Comment", "c"), ("Charset", "UTF-8")])
        .payload("body")
        .add_signature("SIGNATURE", "c2ln");
    let document = encoder.encode().unwrap();
    let message =
        ArmorDecoder::decode_str_with_config(&document, &DecoderConfig::scanning()).unwrap();
    assert_eq!(message.payload(), "body");
    assert_eq!(message.signatures(), ["c2ln"]);
}

// ── Inputs the encoder refuses ────────────────────────────────────────────────

#[test]
fn unrepresentable_inputs_are_refused() {
    let mut separator_payload = ArmorEncoder::new("NOTICE");
    separator_payload.payload("-----BEGIN SIGNATURE-----");
    assert!(matches!(
        separator_payload.encode(),
        Err(EncodeError::SeparatorInPayload { line: 1 })
    ));

    let mut bad_label = ArmorEncoder::new("NOTICE");
    bad_label.add_signature(" PADDED", "c2ln");
    assert!(matches!(
        bad_label.encode(),
        Err(EncodeError::InvalidLabel { .. })
    ));

    let mut multiline_signature = ArmorEncoder::new("NOTICE");
    multiline_signature.add_signature("SIGNATURE", "abc\ndef");
    assert!(matches!(
        multiline_signature.encode(),
        Err(EncodeError::InvalidSignature { index: 0, .. })
    ));
}
