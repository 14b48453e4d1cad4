use armor_wire::separator::{BEGIN_PREFIX, END_PREFIX, HEADER_SPLITTER, SectionSeparator, trim};
use armor_wire::transport::LINE_WIDTH;

use crate::envelope::{ArmorEnvelope, check_header, check_label, push_headers, push_separator};
use crate::error::EncodeError;

/// One signature section queued on the encoder.
#[derive(Clone, Debug)]
struct SignatureSection {
    label: String,
    headers: Vec<(String, String)>,
    body: String,
}

/// Armored message encoder.
///
/// Builds the plaintext section grammar, compresses it with zlib, encodes
/// it as base64 and wraps it in an [`ArmorEnvelope`]. Methods take and
/// return `&mut Self` so calls chain:
///
/// ```rust
/// use armor_encoder::ArmorEncoder;
///
/// let document = ArmorEncoder::new("SIGNED CONTRACT")
///     .header("Version", "1")
///     .payload("something sane")
///     .add_signature("SIGNATURE", "c2lnbmF0dXJl")
///     .encode()
///     .unwrap();
///
/// assert!(document.starts_with("-----BEGIN ARMORED MESSAGE-----\n"));
/// ```
///
/// The plaintext produced for that call is:
///
/// ```text
/// -----BEGIN SIGNED CONTRACT-----
/// Version: 1
///
/// something sane
/// -----BEGIN SIGNATURE-----
/// c2lnbmF0dXJl
/// -----END SIGNATURE-----
/// -----END SIGNED CONTRACT-----
/// ```
///
/// Signature bodies are wrapped at 64 columns. The decoder trims and
/// concatenates the wrapped lines, so a body reads back unchanged as long
/// as it has no `:`, no line breaks, and no space or tab at either end of
/// a wrapped line. Payload lines are trimmed of spaces and tabs on decode.
#[derive(Clone, Debug)]
pub struct ArmorEncoder {
    message_type: String,
    headers: Vec<(String, String)>,
    payload: String,
    signatures: Vec<SignatureSection>,
    envelope: ArmorEnvelope,
}

impl ArmorEncoder {
    /// Start a message whose opening section is `-----BEGIN <message_type>-----`.
    pub fn new(message_type: impl Into<String>) -> Self {
        Self {
            message_type: message_type.into(),
            headers: Vec::new(),
            payload: String::new(),
            signatures: Vec::new(),
            envelope: ArmorEnvelope::default(),
        }
    }

    /// Append a `key: value` line to the message header block.
    pub fn header(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Set the payload text. Replaces any earlier payload.
    pub fn payload(&mut self, text: impl Into<String>) -> &mut Self {
        self.payload = text.into();
        self
    }

    /// Append a signature section with no signature headers.
    pub fn add_signature(&mut self, label: impl Into<String>, body: impl Into<String>) -> &mut Self {
        self.add_signature_with_headers(label, &[], body)
    }

    /// Append a signature section whose body is preceded by `key: value`
    /// lines. The decoder skips those lines.
    pub fn add_signature_with_headers(
        &mut self,
        label: impl Into<String>,
        headers: &[(&str, &str)],
        body: impl Into<String>,
    ) -> &mut Self {
        self.signatures.push(SignatureSection {
            label: label.into(),
            headers: owned_pairs(headers),
            body: body.into(),
        });
        self
    }

    /// Set the label of the outer envelope.
    pub fn armor_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.envelope.label = label.into();
        self
    }

    /// Replace the envelope metadata lines. The default is a `Version` and
    /// a `Comment` line.
    pub fn armor_headers(&mut self, headers: &[(&str, &str)]) -> &mut Self {
        self.envelope.headers = owned_pairs(headers);
        self
    }

    /// Render the section grammar without compressing or armoring it.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::InvalidLabel`] for an empty or padded label.
    /// - [`EncodeError::InvalidHeader`] for a header that would not read
    ///   back as one `key: value` pair.
    /// - [`EncodeError::SeparatorInPayload`] if a payload line is a
    ///   separator once trimmed.
    /// - [`EncodeError::InvalidSignature`] if a signature body line
    ///   contains `:`, is a separator or has edge whitespace, or a
    ///   signature header line is a separator.
    pub fn plaintext(&self) -> Result<String, EncodeError> {
        check_label(&self.message_type)?;
        for (key, value) in &self.headers {
            check_header(key, value)?;
        }

        let mut out = String::new();
        push_separator(&mut out, BEGIN_PREFIX, &self.message_type);
        push_headers(&mut out, &self.headers);
        out.push('\n');

        if !self.payload.is_empty() {
            for (idx, line) in self.payload.split('\n').enumerate() {
                if SectionSeparator::parse(trim(line)).is_some() {
                    return Err(EncodeError::SeparatorInPayload { line: idx + 1 });
                }
                out.push_str(line);
                out.push('\n');
            }
        }

        for (index, signature) in self.signatures.iter().enumerate() {
            push_signature(&mut out, index, signature)?;
        }

        push_separator(&mut out, END_PREFIX, &self.message_type);
        Ok(out)
    }

    /// Produce the complete armored document, ending in a newline.
    ///
    /// # Errors
    ///
    /// All errors from [`plaintext`](Self::plaintext), plus envelope
    /// validation and [`EncodeError::Io`] from compression.
    pub fn encode(&self) -> Result<String, EncodeError> {
        let plaintext = self.plaintext()?;
        self.envelope.wrap(&plaintext)
    }
}

fn push_signature(
    out: &mut String,
    index: usize,
    signature: &SignatureSection,
) -> Result<(), EncodeError> {
    check_label(&signature.label)?;
    for (key, value) in &signature.headers {
        check_header(key, value)?;
    }
    if signature.body.contains(':') {
        return Err(EncodeError::InvalidSignature {
            index,
            reason: "body contains ':' and would be read as a signature header",
        });
    }
    if signature.body.contains('\n') || signature.body.contains('\r') {
        return Err(EncodeError::InvalidSignature {
            index,
            reason: "body contains a line break",
        });
    }

    for (key, value) in &signature.headers {
        let line = format!("{key}{HEADER_SPLITTER}{value}");
        if SectionSeparator::parse(&line).is_some() {
            return Err(EncodeError::InvalidSignature {
                index,
                reason: "header line looks like a section separator",
            });
        }
    }

    push_separator(out, BEGIN_PREFIX, &signature.label);
    push_headers(out, &signature.headers);
    let chars: Vec<char> = signature.body.chars().collect();
    for chunk in chars.chunks(LINE_WIDTH) {
        let line: String = chunk.iter().collect();
        let trimmed = trim(&line);
        if trimmed != line {
            return Err(EncodeError::InvalidSignature {
                index,
                reason: "body line starts or ends with whitespace",
            });
        }
        if SectionSeparator::parse(trimmed).is_some() {
            return Err(EncodeError::InvalidSignature {
                index,
                reason: "body line looks like a section separator",
            });
        }
        out.push_str(&line);
        out.push('\n');
    }
    push_separator(out, END_PREFIX, &signature.label);
    Ok(())
}

fn owned_pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}
