use armor_wire::EnvelopeMode;

/// Default inflation limit: 16 MiB.
pub const DEFAULT_MAX_DECOMPRESSED_SIZE: usize = 16 * 1024 * 1024;

/// Configuration for [`ArmorDecoder`](crate::ArmorDecoder).
///
/// ```text
/// ┌───────────────────────┬────────────────────────────────────────────┐
/// │ Field                 │ Purpose                                    │
/// ├───────────────────────┼────────────────────────────────────────────┤
/// │ envelope              │ Fixed-offset or scanning envelope stripper │
/// │ max_decompressed_size │ Upper bound on inflated plaintext bytes    │
/// └───────────────────────┴────────────────────────────────────────────┘
/// ```
///
/// The default matches documents from existing producers: fixed 4-line
/// header and 2-line footer, 16 MiB inflation limit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    /// How the armor envelope is located around the base64 body.
    pub envelope: EnvelopeMode,

    /// Maximum inflated size in bytes. Larger bodies fail with
    /// [`DecodeError::DecompressionBomb`](crate::DecodeError::DecompressionBomb).
    pub max_decompressed_size: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            envelope: EnvelopeMode::Fixed,
            max_decompressed_size: DEFAULT_MAX_DECOMPRESSED_SIZE,
        }
    }
}

impl DecoderConfig {
    /// Default configuration with the scanning envelope stripper.
    pub fn scanning() -> Self {
        Self {
            envelope: EnvelopeMode::Scan,
            ..Self::default()
        }
    }
}
