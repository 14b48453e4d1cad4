//! Golden fixture generator for the armor conformance suite.
//!
//! Rewrites every fixture under `tests/golden/`. Each fixture directory holds
//! `document.armor` (the input the tests decode) and, where one exists,
//! `plaintext.txt` (the inflated section text, for reading diffs).
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_golden -p armor-tests
//! ```
//!
//! # Generated fixtures
//!
//! | Directory                         | Contents                                      |
//! |-----------------------------------|-----------------------------------------------|
//! | signed_contract                   | One header, one-line payload, one signature   |
//! | signed_account                    | Two headers, signature with a header line     |
//! | two_signatures                    | Two signatures, first wrapped over two lines  |
//! | unsigned_notice                   | No headers, padded payload with a blank line  |
//! | edge_cases/unterminated_headers   | Header block runs to end of input             |
//! | edge_cases/unterminated_payload   | Payload runs to end of input                  |
//! | edge_cases/short_envelope         | Five-line document, below the fixed minimum   |
//! | edge_cases/bad_base64             | Body is not base64                            |
//! | edge_cases/not_zlib               | Body is base64 of uncompressed plaintext      |
//! | edge_cases/scan_envelope          | One metadata line, custom armor label         |
//! | edge_cases/crlf_line_endings      | signed_contract with `\r\n` line endings      |
//! | edge_cases/trailing_content       | Text after the closing END separator          |
//!
//! Compressed bytes depend on the zlib implementation, so regenerated
//! documents may differ byte-wise from the committed ones while decoding to
//! the same messages.

#![allow(clippy::pedantic)]

use std::path::{Path, PathBuf};

use armor_encoder::{ArmorEncoder, wrap_plaintext};
use armor_wire::transport;

fn main() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let golden_dir = manifest_dir.join("tests/golden");

    generate_signed_contract(&golden_dir);
    generate_signed_account(&golden_dir);
    generate_two_signatures(&golden_dir);
    generate_unsigned_notice(&golden_dir);
    generate_edge_cases(&golden_dir);

    println!("All golden fixtures written to {}", golden_dir.display());
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn write_file(path: &Path, data: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create_dir_all");
    }
    std::fs::write(path, data).expect("write_file");
    println!("  wrote {}", path.display());
}

fn write_fixture(dir: &Path, document: &str, plaintext: Option<&str>) {
    write_file(&dir.join("document.armor"), document);
    if let Some(plaintext) = plaintext {
        write_file(&dir.join("plaintext.txt"), plaintext);
    }
}

fn write_encoded(dir: &Path, encoder: &ArmorEncoder) {
    let plaintext = encoder.plaintext().expect("render plaintext");
    let document = encoder.encode().expect("encode document");
    write_fixture(dir, &document, Some(&plaintext));
}

fn signed_contract() -> ArmorEncoder {
    let mut encoder = ArmorEncoder::new("SIGNED CONTRACT");
    encoder
        .header("Version", "1")
        .payload("something sane")
        .add_signature("SIGNATURE", "something sane");
    encoder
}

/// Armor a body by hand, bypassing compression.
fn raw_document(body_lines: &[&str]) -> String {
    let mut lines = vec![
        "-----BEGIN ARMORED MESSAGE-----",
        "Version: armor-encoder 0.1.0",
        "Comment: produced by armor-encoder",
        "",
    ];
    lines.extend_from_slice(body_lines);
    lines.extend_from_slice(&["", "-----END ARMORED MESSAGE-----"]);
    let mut document = lines.join("\n");
    document.push('\n');
    document
}

// ── Fixture generators ────────────────────────────────────────────────────────

fn generate_signed_contract(golden: &Path) {
    write_encoded(&golden.join("signed_contract"), &signed_contract());
}

fn generate_signed_account(golden: &Path) {
    let mut encoder = ArmorEncoder::new("SIGNED ACCOUNT");
    encoder
        .header("Version", "1")
        .header("Hash", "SHA256")
        .payload("<account name=\"savings\" balance=\"1200\"/>\n<owner id=\"n1\" />")
        .add_signature_with_headers(
            "SIGNATURE",
            &[("Version", "armor-encoder 0.1.0")],
            "YWNjb3VudCBzaWduYXR1cmU=",
        );
    write_encoded(&golden.join("signed_account"), &encoder);
}

fn generate_two_signatures(golden: &Path) {
    let mut encoder = ArmorEncoder::new("SIGNED LEDGER");
    encoder
        .header("Hash", "SHA256")
        .payload("ledger entry 1\nledger entry 2")
        .add_signature_with_headers(
            "LEDGER SIGNATURE",
            &[("Version", "0.9"), ("Comment", "first signer")],
            "Zmlyc3Qgc2lnbmF0dXJlIG92ZXIgdGhlIGxlZGdlciBib2R5LCB3cmFwcGVkIGFjcm9zcyBzZXZlcmFsIGxpbmVzIGF0IDY0IGNvbHVtbnM=",
        )
        .add_signature("LEDGER SIGNATURE", "c2Vjb25kIHNpZ25hdHVyZQ==");
    write_encoded(&golden.join("two_signatures"), &encoder);
}

fn generate_unsigned_notice(golden: &Path) {
    let mut encoder = ArmorEncoder::new("NOTICE");
    encoder.payload("  The market closes early on Friday.\t\n\nTrading resumes Monday.");
    write_encoded(&golden.join("unsigned_notice"), &encoder);
}

fn generate_edge_cases(golden: &Path) {
    let edge = golden.join("edge_cases");

    // Grammar violations are armored as raw plaintext; the encoder refuses them.
    let headers = "-----BEGIN SIGNED CONTRACT-----\nVersion: 1\nHash: SHA256";
    write_fixture(
        &edge.join("unterminated_headers"),
        &wrap_plaintext(headers).expect("wrap unterminated_headers"),
        Some(headers),
    );

    let payload = "-----BEGIN SIGNED CONTRACT-----\nVersion: 1\n\nsomething sane";
    write_fixture(
        &edge.join("unterminated_payload"),
        &wrap_plaintext(payload).expect("wrap unterminated_payload"),
        Some(payload),
    );

    write_fixture(
        &edge.join("short_envelope"),
        "-----BEGIN ARMORED MESSAGE-----\nVersion: 1\n\neJwrSS0uAQAEXQHB\n-----END ARMORED MESSAGE-----\n",
        None,
    );

    write_fixture(
        &edge.join("bad_base64"),
        &raw_document(&["%%%% not base64 %%%%"]),
        None,
    );

    let contract = signed_contract().plaintext().expect("render signed_contract");
    let uncompressed = transport::encode_body(contract.as_bytes());
    let uncompressed: Vec<&str> = uncompressed.iter().map(String::as_str).collect();
    write_fixture(&edge.join("not_zlib"), &raw_document(&uncompressed), None);

    let mut scan = signed_contract();
    scan.armor_label("OT ARMORED CONTRACT")
        .armor_headers(&[("Version", "Open Transactions v0.93")]);
    write_encoded(&edge.join("scan_envelope"), &scan);

    let crlf = signed_contract()
        .encode()
        .expect("encode crlf_line_endings")
        .replace('\n', "\r\n");
    write_fixture(&edge.join("crlf_line_endings"), &crlf, Some(&contract));

    let trailing = format!("{contract}\nleftover after the end\n");
    write_fixture(
        &edge.join("trailing_content"),
        &wrap_plaintext(&trailing).expect("wrap trailing_content"),
        Some(&trailing),
    );
}
