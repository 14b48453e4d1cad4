use armor_types::Message;
use armor_wire::{envelope, transport};

use crate::config::DecoderConfig;
use crate::decompression;
use crate::error::DecodeError;
use crate::parser::SectionParser;

/// Synchronous armored-message decoder.
///
/// Decoding is a strict four-stage pipeline; each stage only sees the
/// previous stage's output and the first failure aborts the whole call:
///
///   1. **Envelope**: drop the armor separator, metadata and blank lines
///      around the base64 body (see [`EnvelopeMode`](armor_wire::EnvelopeMode)).
///   2. **Transport**: join the body lines and decode standard base64.
///   3. **Inflate**: zlib-decompress the bytes, check they are UTF-8, and
///      split the text on `\n`.
///   4. **Sections**: run the [`SectionParser`] grammar to produce the
///      [`Message`].
///
/// The decoder holds no state. Calls are independent and may run on any
/// number of threads at once.
///
/// # Example
///
/// ```rust
/// use armor_decoder::ArmorDecoder;
/// use armor_encoder::ArmorEncoder;
///
/// let document = ArmorEncoder::new("SIGNED CONTRACT")
///     .header("Version", "1")
///     .payload("something sane")
///     .add_signature("SIGNATURE", "c2lnbmF0dXJl")
///     .encode()
///     .unwrap();
///
/// let message = ArmorDecoder::decode_str(&document).unwrap();
/// assert_eq!(message.message_type(), "SIGNED CONTRACT");
/// assert_eq!(message.payload(), "something sane");
/// assert_eq!(message.signatures(), ["c2lnbmF0dXJl"]);
/// ```
pub struct ArmorDecoder;

impl ArmorDecoder {
    /// Decode a document given as lines, with the default configuration.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Wire`] if the document is shorter than the fixed
    ///   envelope or the body is not valid base64.
    /// - [`DecodeError::DecompressFailed`] if the body is not a complete
    ///   zlib stream.
    /// - [`DecodeError::DecompressionBomb`] if inflation exceeds the
    ///   configured limit.
    /// - [`DecodeError::InvalidUtf8`] if the plaintext is not UTF-8.
    /// - [`DecodeError::Parse`] if the plaintext violates the section
    ///   grammar.
    pub fn decode<S: AsRef<str>>(lines: &[S]) -> Result<Message, DecodeError> {
        Self::decode_with_config(lines, &DecoderConfig::default())
    }

    /// Decode a document given as lines.
    ///
    /// # Errors
    ///
    /// Same as [`decode`](Self::decode).
    pub fn decode_with_config<S: AsRef<str>>(
        lines: &[S],
        config: &DecoderConfig,
    ) -> Result<Message, DecodeError> {
        // 1. Envelope.
        let body = envelope::strip(lines, config.envelope)?;

        // 2. Transport.
        let compressed = transport::decode_body(body)?;

        // 3. Inflate.
        let inflated = decompression::inflate(&compressed, config.max_decompressed_size)?;
        let plaintext = String::from_utf8(inflated)?;
        let plain_lines: Vec<&str> = plaintext.split('\n').collect();

        // 4. Sections.
        let message = SectionParser::parse(&plain_lines)?;
        tracing::debug!(
            message_type = message.message_type(),
            signatures = message.signatures().len(),
            "decoded armored message"
        );
        Ok(message)
    }

    /// Decode a document held in a single string, with the default
    /// configuration. Lines end in `\n` or `\r\n`.
    ///
    /// # Errors
    ///
    /// Same as [`decode`](Self::decode).
    pub fn decode_str(document: &str) -> Result<Message, DecodeError> {
        Self::decode_str_with_config(document, &DecoderConfig::default())
    }

    /// Decode a document held in a single string.
    ///
    /// # Errors
    ///
    /// Same as [`decode`](Self::decode).
    pub fn decode_str_with_config(
        document: &str,
        config: &DecoderConfig,
    ) -> Result<Message, DecodeError> {
        let lines: Vec<&str> = document.lines().collect();
        Self::decode_with_config(&lines, config)
    }
}
