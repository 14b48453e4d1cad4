/// Implementation of `armor validate`.
///
/// Runs one full decode and reports either a series of checkmarks or a
/// single diagnostic naming the stage that failed.
///
/// # Success output
///
/// ```text
/// ✓ Envelope: armor boundaries found
/// ✓ Transport: base64 body decoded
/// ✓ Compression: zlib stream inflated to UTF-8 text
/// ✓ Sections: SIGNED CONTRACT with 1 signature
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: sections: header block starting at line 2 has no terminating blank line
/// ```
use anyhow::{Result, anyhow};
use armor_decoder::{ArmorDecoder, DecodeError, DecoderConfig};
use armor_wire::WireError;

use crate::ValidateArgs;

/// Run the `armor validate` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails to decode.
pub fn run(args: &ValidateArgs, config: &DecoderConfig) -> Result<()> {
    let document = crate::read_document(&args.file)?;

    match ArmorDecoder::decode_str_with_config(&document, config) {
        Ok(message) => {
            let count = message.signatures().len();
            println!("✓ Envelope: armor boundaries found");
            println!("✓ Transport: base64 body decoded");
            println!("✓ Compression: zlib stream inflated to UTF-8 text");
            println!(
                "✓ Sections: {} with {count} signature{}",
                message.message_type(),
                if count == 1 { "" } else { "s" }
            );
            Ok(())
        }
        Err(e) => {
            println!("✗ Error: {}", decode_error_diagnostic(&e));
            Err(anyhow!("validation failed"))
        }
    }
}

// ── Error formatting ──────────────────────────────────────────────────────────

/// Prefix a decode error with the pipeline stage it came from.
///
/// ```text
/// ┌────────────────────────────────┬──────────────┐
/// │ DecodeError variant            │ Stage prefix │
/// ├────────────────────────────────┼──────────────┤
/// │ Wire(EnvelopeTooShort/Missing) │ envelope     │
/// │ Wire(InvalidBase64)            │ transport    │
/// │ DecompressFailed / Bomb / Utf8 │ compression  │
/// │ Parse                          │ sections     │
/// └────────────────────────────────┴──────────────┘
/// ```
fn decode_error_diagnostic(e: &DecodeError) -> String {
    let stage = match e {
        DecodeError::Wire(WireError::InvalidBase64(_)) => "transport",
        DecodeError::Wire(_) => "envelope",
        DecodeError::DecompressFailed(_)
        | DecodeError::DecompressionBomb { .. }
        | DecodeError::InvalidUtf8(_) => "compression",
        DecodeError::Parse(_) => "sections",
    };
    format!("{stage}: {e}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use armor_decoder::ParseError;

    #[test]
    fn diagnostics_name_the_stage() {
        let short = DecodeError::Wire(WireError::EnvelopeTooShort { lines: 3, min: 6 });
        assert!(decode_error_diagnostic(&short).starts_with("envelope: "));

        let bomb = DecodeError::DecompressionBomb { limit: 10 };
        assert!(decode_error_diagnostic(&bomb).starts_with("compression: "));

        let parse = DecodeError::Parse(ParseError::InvalidTransactionHeader { start: 2 });
        assert_eq!(
            decode_error_diagnostic(&parse),
            "sections: header block starting at line 2 has no terminating blank line"
        );
    }
}
