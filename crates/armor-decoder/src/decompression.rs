use flate2::{Decompress, FlushDecompress, Status};

use crate::error::DecodeError;

/// Output buffer growth step.
const CHUNK_SIZE: usize = 32 * 1024;

/// Inflate a zlib stream, producing at most `max_size` bytes.
///
/// Drives `flate2::Decompress` directly instead of the `Read` adapter so a
/// stream that stops before its end marker is reported as an error rather
/// than as a short read. Bytes after the end marker are ignored.
///
/// # Errors
///
/// - [`DecodeError::DecompressFailed`] on a bad zlib header, corrupt
///   deflate data, an Adler-32 mismatch, or a truncated stream.
/// - [`DecodeError::DecompressionBomb`] if the output exceeds `max_size`.
#[allow(clippy::cast_possible_truncation)]
pub fn inflate(data: &[u8], max_size: usize) -> Result<Vec<u8>, DecodeError> {
    let mut inflater = Decompress::new(true);
    let mut out = Vec::new();
    let mut consumed = 0usize;

    loop {
        if out.len() > max_size {
            return Err(DecodeError::DecompressionBomb { limit: max_size });
        }
        if out.len() == out.capacity() {
            let room = (max_size.saturating_add(1) - out.len()).min(CHUNK_SIZE);
            out.reserve(room);
        }

        let in_before = inflater.total_in();
        let out_before = out.len();
        let status = inflater
            .decompress_vec(&data[consumed..], &mut out, FlushDecompress::Finish)
            .map_err(|e| DecodeError::DecompressFailed(e.to_string()))?;
        consumed += (inflater.total_in() - in_before) as usize;

        if status == Status::StreamEnd {
            break;
        }
        if consumed == data.len() && out.len() == out_before && out.len() < out.capacity() {
            return Err(DecodeError::DecompressFailed(
                "truncated zlib stream".to_string(),
            ));
        }
    }

    if out.len() > max_size {
        return Err(DecodeError::DecompressionBomb { limit: max_size });
    }

    tracing::debug!(
        compressed_len = data.len(),
        inflated_len = out.len(),
        "inflated body"
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::Compression;
    use flate2::write::ZlibEncoder;

    use super::*;

    fn zlib(data: &[u8]) -> Vec<u8> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn inflates_valid_stream() {
        let text = "-----BEGIN NOTICE-----\n\nhello\n-----END NOTICE-----\n";
        let out = inflate(&zlib(text.as_bytes()), 1024).unwrap();
        assert_eq!(out, text.as_bytes());
    }

    #[test]
    fn inflates_across_several_chunks() {
        let text = "a line of payload text that repeats\n".repeat(4000);
        let out = inflate(&zlib(text.as_bytes()), 1024 * 1024).unwrap();
        assert_eq!(out, text.as_bytes());
    }

    #[test]
    fn accepts_output_exactly_at_limit() {
        let data = vec![b'x'; 512];
        let out = inflate(&zlib(&data), 512).unwrap();
        assert_eq!(out.len(), 512);
    }

    #[test]
    fn rejects_bomb() {
        let data = vec![b'x'; 10_000];
        let result = inflate(&zlib(&data), 100);
        assert!(matches!(
            result,
            Err(DecodeError::DecompressionBomb { limit: 100 })
        ));
    }

    #[test]
    fn rejects_invalid_header() {
        let result = inflate(b"this is not zlib data", 1024);
        assert!(matches!(result, Err(DecodeError::DecompressFailed(_))));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            inflate(&[], 1024),
            Err(DecodeError::DecompressFailed(_))
        ));
    }

    #[test]
    fn rejects_truncated_stream() {
        let compressed = zlib(&"some plaintext line\n".repeat(20).into_bytes());
        let truncated = &compressed[..compressed.len() / 2];
        let result = inflate(truncated, 1024 * 1024);
        assert!(matches!(result, Err(DecodeError::DecompressFailed(_))));
    }

    #[test]
    fn rejects_raw_deflate_without_zlib_framing() {
        let mut raw = flate2::write::DeflateEncoder::new(Vec::new(), Compression::default());
        raw.write_all(b"hello").unwrap();
        let raw = raw.finish().unwrap();
        assert!(inflate(&raw, 1024).is_err());
    }
}
