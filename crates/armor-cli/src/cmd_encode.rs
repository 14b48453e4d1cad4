/// Implementation of `armor encode`.
///
/// Parses a JSON manifest describing one message and writes the armored
/// document to stdout, or to `-o <file>`.
///
/// # Manifest format
///
/// ```json
/// {
///   "type": "SIGNED CONTRACT",
///   "headers": [["Version", "1"], ["Hash", "SHA256"]],
///   "payload": "something sane",
///   "signatures": [
///     { "label": "SIGNATURE", "headers": [["Version", "2"]], "body": "c2lnbmF0dXJl" }
///   ],
///   "armor": { "label": "ARMORED MESSAGE", "headers": [["Version", "1"], ["Comment", "x"]] }
/// }
/// ```
///
/// ```text
/// ┌──────────────┬──────────────────────────────────────────────────────┐
/// │ Key          │ Meaning                                              │
/// ├──────────────┼──────────────────────────────────────────────────────┤
/// │ type         │ Required. Label of the opening BEGIN separator       │
/// │ headers      │ Ordered `[key, value]` pairs                         │
/// │ payload      │ Inline payload text                                  │
/// │ payload_file │ Read the payload from this path (relative to the     │
/// │              │ manifest). Mutually exclusive with `payload`         │
/// │ signatures   │ `label` defaults to `SIGNATURE`, `headers` optional  │
/// │ armor        │ Envelope label and metadata lines                    │
/// └──────────────┴──────────────────────────────────────────────────────┘
/// ```
///
/// Envelope metadata other than two lines needs `--envelope scan` to read
/// back.
use std::fs;
use std::io::{self, Write as _};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use armor_encoder::ArmorEncoder;

use crate::EncodeArgs;

const DEFAULT_SIGNATURE_LABEL: &str = "SIGNATURE";

// ── Manifest serde types ──────────────────────────────────────────────────────

#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
    #[serde(rename = "type")]
    message_type: String,
    #[serde(default)]
    headers: Vec<(String, String)>,
    payload: Option<String>,
    payload_file: Option<String>,
    #[serde(default)]
    signatures: Vec<ManifestSignature>,
    armor: Option<ManifestArmor>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestSignature {
    label: Option<String>,
    #[serde(default)]
    headers: Vec<(String, String)>,
    body: String,
}

#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestArmor {
    label: Option<String>,
    headers: Option<Vec<(String, String)>>,
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Run the `armor encode` command.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read or parsed, if
/// `payload_file` cannot be read, or if the encoder rejects the message.
pub fn run(args: &EncodeArgs) -> Result<()> {
    let manifest_src = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;

    let manifest: Manifest = serde_json::from_str(&manifest_src)
        .with_context(|| format!("failed to parse manifest {}", args.input.display()))?;

    let manifest_dir = args.input.parent().unwrap_or_else(|| Path::new("."));
    let document = encode_manifest(&manifest, manifest_dir)?;

    if let Some(path) = &args.output {
        fs::write(path, document.as_bytes())
            .with_context(|| format!("cannot write {}", path.display()))?;
        eprintln!("Wrote {} bytes to {}", document.len(), path.display());
    } else {
        io::stdout()
            .lock()
            .write_all(document.as_bytes())
            .context("cannot write to stdout")?;
    }
    Ok(())
}

fn encode_manifest(manifest: &Manifest, manifest_dir: &Path) -> Result<String> {
    let mut encoder = ArmorEncoder::new(manifest.message_type.clone());

    for (key, value) in &manifest.headers {
        encoder.header(key.clone(), value.clone());
    }

    encoder.payload(resolve_payload(manifest, manifest_dir)?);

    for (idx, signature) in manifest.signatures.iter().enumerate() {
        let label = signature
            .label
            .clone()
            .unwrap_or_else(|| DEFAULT_SIGNATURE_LABEL.to_string());
        let headers = borrowed_pairs(&signature.headers);
        encoder.add_signature_with_headers(label, &headers, signature.body.clone());
        tracing::debug!(signature = idx, "queued signature");
    }

    if let Some(armor) = &manifest.armor {
        if let Some(label) = &armor.label {
            encoder.armor_label(label.clone());
        }
        if let Some(headers) = &armor.headers {
            encoder.armor_headers(&borrowed_pairs(headers));
        }
    }

    encoder.encode().context("ArmorEncoder::encode failed")
}

fn resolve_payload(manifest: &Manifest, manifest_dir: &Path) -> Result<String> {
    match (&manifest.payload, &manifest.payload_file) {
        (Some(_), Some(_)) => Err(anyhow!("`payload` and `payload_file` are mutually exclusive")),
        (Some(text), None) => Ok(text.clone()),
        (None, Some(file)) => {
            let path = manifest_dir.join(file);
            fs::read_to_string(&path).with_context(|| format!("cannot read {}", path.display()))
        }
        (None, None) => Ok(String::new()),
    }
}

fn borrowed_pairs(pairs: &[(String, String)]) -> Vec<(&str, &str)> {
    pairs
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}
