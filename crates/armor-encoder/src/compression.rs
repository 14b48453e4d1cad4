use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;

use crate::error::EncodeError;

/// Compress plaintext into a zlib stream at the default level.
pub fn compress(data: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}
