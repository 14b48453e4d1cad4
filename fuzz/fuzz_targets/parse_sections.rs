#![no_main]

use armor_decoder::SectionParser;
use libfuzzer_sys::fuzz_target;

// Fuzz target: section grammar on plaintext, skipping the envelope and
// inflate stages so the fuzzer reaches the parser directly.
//
// Asserts the invariants every accepted message holds:
// - the type label is non-empty
// - the payload never contains a separator line
fuzz_target!(|data: &[u8]| {
    let Ok(plaintext) = std::str::from_utf8(data) else {
        return;
    };
    let lines: Vec<&str> = plaintext.split('\n').collect();
    if let Ok(message) = SectionParser::parse(&lines) {
        assert!(!message.message_type().is_empty());
        for line in message.payload().split('\n') {
            assert!(armor_wire::SectionSeparator::parse(line).is_none());
        }
    }
});
