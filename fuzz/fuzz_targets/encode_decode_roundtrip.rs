#![no_main]

use arbitrary::Arbitrary;
use armor_decoder::{ArmorDecoder, DecoderConfig};
use armor_encoder::ArmorEncoder;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzSignature {
    label: String,
    headers: Vec<(String, String)>,
    body: String,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    message_type: String,
    headers: Vec<(String, String)>,
    payload: String,
    signatures: Vec<FuzzSignature>,
    armor_headers: Option<Vec<(String, String)>>,
}

// Fuzz target: anything the encoder accepts must decode to the same type
// and signatures. Payload is compared after per-line trimming.
fuzz_target!(|input: FuzzInput| {
    let mut encoder = ArmorEncoder::new(input.message_type.clone());
    for (key, value) in &input.headers {
        encoder.header(key.clone(), value.clone());
    }
    encoder.payload(input.payload.clone());
    for signature in &input.signatures {
        let headers: Vec<(&str, &str)> = signature
            .headers
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        encoder.add_signature_with_headers(signature.label.clone(), &headers, signature.body.clone());
    }
    if let Some(armor_headers) = &input.armor_headers {
        let headers: Vec<(&str, &str)> = armor_headers
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        encoder.armor_headers(&headers);
    }

    let Ok(document) = encoder.encode() else {
        return;
    };

    let message = ArmorDecoder::decode_str_with_config(&document, &DecoderConfig::scanning())
        .expect("encoder output must decode");

    assert_eq!(message.message_type(), input.message_type);
    let bodies: Vec<&str> = input.signatures.iter().map(|s| s.body.as_str()).collect();
    assert_eq!(message.signatures(), bodies.as_slice());

    let expected: Vec<&str> = if input.payload.is_empty() {
        Vec::new()
    } else {
        input
            .payload
            .split('\n')
            .map(|l| l.trim_matches(|c| c == ' ' || c == '\t'))
            .collect()
    };
    assert_eq!(message.payload(), expected.join("\n"));
});
