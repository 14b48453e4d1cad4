/// Implementation of `armor inspect`.
///
/// Decodes the document and prints a short summary to stdout.
///
/// # Output format
///
/// ```text
/// Type:       SIGNED CONTRACT
/// Payload:    14 bytes, 1 line
/// Signatures: 1
///   Signature 0: 12 chars
/// ```
use anyhow::{Context, Result};
use armor_decoder::{ArmorDecoder, DecoderConfig};
use armor_types::Message;

use crate::InspectArgs;

const BODY_PREVIEW_CHARS: usize = 80;
const SIGNATURE_PREVIEW_CHARS: usize = 64;

/// Run the `armor inspect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not decode.
pub fn run(args: &InspectArgs, config: &DecoderConfig) -> Result<()> {
    let document = crate::read_document(&args.file)?;
    let message = ArmorDecoder::decode_str_with_config(&document, config)
        .with_context(|| format!("failed to decode {}", args.file.display()))?;

    print!("{}", render_summary(&message, args.show_body, args.show_sigs));
    Ok(())
}

fn render_summary(message: &Message, show_body: bool, show_sigs: bool) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    let payload = message.payload();
    let line_count = if payload.is_empty() {
        0
    } else {
        payload.split('\n').count()
    };

    let _ = writeln!(out, "Type:       {}", message.message_type());
    let _ = writeln!(
        out,
        "Payload:    {} bytes, {line_count} line{}",
        payload.len(),
        plural(line_count)
    );
    if show_body {
        let _ = writeln!(out, "            {:?}", preview(payload, BODY_PREVIEW_CHARS));
    }

    let _ = writeln!(out, "Signatures: {}", message.signatures().len());
    for (idx, signature) in message.signatures().iter().enumerate() {
        let _ = writeln!(
            out,
            "  Signature {idx}: {} chars",
            signature.chars().count()
        );
        if show_sigs {
            let _ = writeln!(out, "    {}", preview(signature, SIGNATURE_PREVIEW_CHARS));
        }
    }
    out
}

fn preview(text: &str, max_chars: usize) -> String {
    let truncated: String = text.chars().take(max_chars).collect();
    if text.chars().count() > max_chars {
        format!("{truncated}…")
    } else {
        truncated
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
