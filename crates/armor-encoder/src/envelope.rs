use std::fmt::Write as _;

use armor_wire::separator::{BEGIN_PREFIX, END_PREFIX, HEADER_SPLITTER, SEPARATOR_SUFFIX, trim};
use armor_wire::transport;

use crate::compression;
use crate::error::EncodeError;

/// Label used on the outer envelope when none is set.
pub const DEFAULT_ARMOR_LABEL: &str = "ARMORED MESSAGE";

/// Comment line written into the envelope metadata by default.
pub const DEFAULT_COMMENT: &str = "produced by armor-encoder";

/// The outer armor around a compressed, base64-encoded body.
///
/// ```text
/// -----BEGIN ARMORED MESSAGE-----      ┐
/// Version: armor-encoder 0.1.0         │ header: separator, metadata,
/// Comment: produced by armor-encoder   │ blank line
///                                      ┘
/// eJxtjkEKwjAQRfeeYm7Q...              ← base64, 64 columns
///                                      ┐
/// -----END ARMORED MESSAGE-----        ┘ footer: blank line, separator
/// ```
///
/// The default metadata has exactly two lines, which is what the
/// fixed-offset decoder expects. Any other count needs the scanning
/// envelope mode on the decoding side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArmorEnvelope {
    pub label: String,
    pub headers: Vec<(String, String)>,
}

impl Default for ArmorEnvelope {
    fn default() -> Self {
        Self {
            label: DEFAULT_ARMOR_LABEL.to_string(),
            headers: vec![
                (
                    "Version".to_string(),
                    concat!("armor-encoder ", env!("CARGO_PKG_VERSION")).to_string(),
                ),
                ("Comment".to_string(), DEFAULT_COMMENT.to_string()),
            ],
        }
    }
}

impl ArmorEnvelope {
    /// Compress `plaintext`, encode it and wrap it in this envelope.
    ///
    /// The plaintext is taken as-is: it is not checked against the section
    /// grammar, so this can build documents the decoder will reject.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::InvalidLabel`] / [`EncodeError::InvalidHeader`] if
    ///   the envelope label or metadata cannot be written.
    /// - [`EncodeError::Io`] if compression fails.
    pub fn wrap(&self, plaintext: &str) -> Result<String, EncodeError> {
        check_label(&self.label)?;
        for (key, value) in &self.headers {
            check_header(key, value)?;
        }

        let compressed = compression::compress(plaintext.as_bytes())?;

        let mut out = String::new();
        push_separator(&mut out, BEGIN_PREFIX, &self.label);
        push_headers(&mut out, &self.headers);
        out.push('\n');
        for line in transport::encode_body(&compressed) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
        push_separator(&mut out, END_PREFIX, &self.label);
        Ok(out)
    }
}

/// Wrap arbitrary plaintext in the default envelope.
///
/// # Errors
///
/// Returns [`EncodeError::Io`] if compression fails.
pub fn wrap_plaintext(plaintext: &str) -> Result<String, EncodeError> {
    ArmorEnvelope::default().wrap(plaintext)
}

pub(crate) fn push_separator(out: &mut String, prefix: &str, label: &str) {
    let _ = writeln!(out, "{prefix} {label}{SEPARATOR_SUFFIX}");
}

pub(crate) fn push_headers(out: &mut String, headers: &[(String, String)]) {
    for (key, value) in headers {
        let _ = writeln!(out, "{key}{HEADER_SPLITTER}{value}");
    }
}

/// A label must survive trimming and fit on one line.
pub(crate) fn check_label(label: &str) -> Result<(), EncodeError> {
    if label.is_empty() || trim(label) != label || label.contains(['\n', '\r']) {
        return Err(EncodeError::InvalidLabel {
            label: label.to_string(),
        });
    }
    Ok(())
}

/// A header must read back as exactly one `key: value` split.
pub(crate) fn check_header(key: &str, value: &str) -> Result<(), EncodeError> {
    let representable = [key, value].iter().all(|part| {
        !part.is_empty()
            && trim(part) == *part
            && !part.contains(HEADER_SPLITTER)
            && !part.contains(['\n', '\r'])
    });

    if representable {
        Ok(())
    } else {
        Err(EncodeError::InvalidHeader {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}
