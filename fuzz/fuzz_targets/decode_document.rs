#![no_main]

use armor_decoder::{ArmorDecoder, DecoderConfig};
use libfuzzer_sys::fuzz_target;

// Fuzz target: full decoder entry point, both envelope modes.
//
// Catches bugs in:
// - Envelope offsets on short or separator-less documents
// - Base64 joining across lines
// - Truncated or oversized zlib streams
// - Section grammar on arbitrary inflated text
fuzz_target!(|data: &[u8]| {
    let Ok(document) = std::str::from_utf8(data) else {
        return;
    };
    let config = DecoderConfig {
        max_decompressed_size: 1 << 20,
        ..DecoderConfig::default()
    };
    let _ = ArmorDecoder::decode_str_with_config(document, &config);
    let _ = ArmorDecoder::decode_str_with_config(
        document,
        &DecoderConfig {
            max_decompressed_size: 1 << 20,
            ..DecoderConfig::scanning()
        },
    );
});
