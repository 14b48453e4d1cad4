use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::error::WireError;

/// Column width used when wrapping base64 bodies.
pub const LINE_WIDTH: usize = 64;

/// Join body lines with no separator and decode them as padded base64.
///
/// # Errors
///
/// Returns [`WireError::InvalidBase64`] on any invalid character, bad
/// padding, or trailing bits. No partial output is returned.
pub fn decode_body<S: AsRef<str>>(body: &[S]) -> Result<Vec<u8>, WireError> {
    let joined: String = body.iter().map(AsRef::<str>::as_ref).collect();
    let bytes = BASE64.decode(joined.as_bytes())?;
    tracing::debug!(
        encoded_len = joined.len(),
        decoded_len = bytes.len(),
        "decoded transport body"
    );
    Ok(bytes)
}

/// Encode bytes as padded base64 wrapped at [`LINE_WIDTH`] columns.
///
/// Inverse of [`decode_body`]. An empty input yields no lines.
pub fn encode_body(bytes: &[u8]) -> Vec<String> {
    let encoded = BASE64.encode(bytes);
    // Base64 output is pure ASCII, so byte offsets are char boundaries.
    encoded
        .as_bytes()
        .chunks(LINE_WIDTH)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_joined_lines() {
        let bytes = decode_body(&["aGVsbG8g", "d29ybGQ="]).unwrap();
        assert_eq!(bytes, b"hello world");
    }

    #[test]
    fn empty_body_decodes_to_nothing() {
        let empty: [&str; 0] = [];
        assert!(decode_body(&empty).unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_characters() {
        let result = decode_body(&["not base64!"]);
        assert!(matches!(result, Err(WireError::InvalidBase64(_))));
    }

    #[test]
    fn rejects_missing_padding() {
        let result = decode_body(&["aGVsbG8gd29ybGQ"]);
        assert!(matches!(result, Err(WireError::InvalidBase64(_))));
    }

    #[test]
    fn rejects_metadata_line_in_body() {
        let result = decode_body(&["Comment: x", "aGVsbG8="]);
        assert!(matches!(result, Err(WireError::InvalidBase64(_))));
    }

    #[test]
    fn encode_wraps_at_line_width() {
        let lines = encode_body(&[0xAB; 100]);
        assert!(lines.len() > 1);
        assert!(lines[..lines.len() - 1].iter().all(|l| l.len() == LINE_WIDTH));
        assert_eq!(decode_body(&lines).unwrap(), vec![0xAB; 100]);
    }
}
