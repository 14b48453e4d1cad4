#![no_main]

use armor_wire::envelope::{self, EnvelopeMode};
use libfuzzer_sys::fuzz_target;

// Fuzz target: envelope stripping in both modes.
//
// The body is always a sub-slice of the input, so it can never be longer
// than the document.
fuzz_target!(|data: &[u8]| {
    let Ok(document) = std::str::from_utf8(data) else {
        return;
    };
    let lines: Vec<&str> = document.lines().collect();
    for mode in [EnvelopeMode::Fixed, EnvelopeMode::Scan] {
        if let Ok(body) = envelope::strip(&lines, mode) {
            assert!(body.len() <= lines.len());
        }
    }
});
