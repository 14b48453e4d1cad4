/// Implementation of `armor decode`.
///
/// Decodes the document and writes the payload to stdout, or to `-o
/// <file>`. With `--json` the whole message is written instead:
///
/// ```json
/// {
///   "type": "SIGNED CONTRACT",
///   "payload": "something sane",
///   "signatures": ["c2lnbmF0dXJl"]
/// }
/// ```
use std::fs;
use std::io::{self, Write as _};

use anyhow::{Context, Result};
use armor_decoder::{ArmorDecoder, DecoderConfig};
use armor_types::Message;

use crate::DecodeArgs;

/// Run the `armor decode` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read, does not decode, or the
/// output cannot be written.
pub fn run(args: &DecodeArgs, config: &DecoderConfig) -> Result<()> {
    let document = crate::read_document(&args.file)?;
    let message = ArmorDecoder::decode_str_with_config(&document, config)
        .with_context(|| format!("failed to decode {}", args.file.display()))?;

    let rendered = render(&message, args.json)?;

    if let Some(path) = &args.output {
        fs::write(path, rendered.as_bytes())
            .with_context(|| format!("cannot write {}", path.display()))?;
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(rendered.as_bytes())
            .context("cannot write to stdout")?;
        if !rendered.ends_with('\n') {
            handle.write_all(b"\n").context("cannot write to stdout")?;
        }
    }

    Ok(())
}

fn render(message: &Message, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(message).context("cannot serialize message")
    } else {
        Ok(message.payload().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> Message {
        Message::new(
            "SIGNED CONTRACT".to_string(),
            "something sane".to_string(),
            vec!["c2lnbmF0dXJl".to_string()],
        )
    }

    #[test]
    fn plain_output_is_payload() {
        assert_eq!(render(&message(), false).unwrap(), "something sane");
    }

    #[test]
    fn json_output_uses_type_key() {
        let value: serde_json::Value =
            serde_json::from_str(&render(&message(), true).unwrap()).unwrap();
        assert_eq!(value["type"], "SIGNED CONTRACT");
        assert_eq!(value["signatures"][0], "c2lnbmF0dXJl");
    }
}
