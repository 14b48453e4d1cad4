use armor_wire::WireError;

/// Errors from the section grammar.
///
/// Line numbers are 1-based positions in the inflated plaintext, so they
/// point at the offending line when the plaintext is dumped.
///
/// ```text
///   ParseError
///   ├── MalformedHeader           ← opening BEGIN separator missing or bad
///   ├── InvalidHeader             ← header line not of the form `key: value`
///   ├── InvalidTransactionHeader  ← header block never hit a blank line
///   ├── MalformedPayload          ← payload too short or never terminated
///   └── ExpectedSignatureList     ← content after payload is not a signature
/// ```
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    /// The type section could not be read.
    ///
    /// `line` is `None` when the document ran out (fewer than two non-blank
    /// leading lines), otherwise the 1-based line that should have been
    /// the opening separator.
    #[error("malformed header{}: {reason}", fmt_line(.line))]
    MalformedHeader {
        line: Option<usize>,
        reason: String,
    },

    /// A line in the header block is neither blank nor `key: value`.
    #[error("invalid header line {line}: {content:?}")]
    InvalidHeader { line: usize, content: String },

    /// Input ended inside the header block.
    #[error("header block starting at line {start} has no terminating blank line")]
    InvalidTransactionHeader { start: usize },

    /// The payload block is too short or has no closing separator.
    #[error("malformed payload at line {line}: {reason}")]
    MalformedPayload { line: usize, reason: &'static str },

    /// The line after the payload does not open a signature section.
    #[error("expected a signature list at line {line}, found {content:?}")]
    ExpectedSignatureList { line: usize, content: String },
}

fn fmt_line(line: &Option<usize>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

/// Errors that can occur while decoding an armored document.
///
/// Every stage aborts the pipeline on failure; no partially filled
/// [`Message`](armor_types::Message) is ever returned.
///
/// ```text
///   DecodeError
///   ├── Wire(WireError)     ← envelope too short / missing, bad base64
///   ├── DecompressFailed    ← zlib header invalid, stream truncated or corrupt
///   ├── DecompressionBomb   ← inflated size exceeds the configured limit
///   ├── InvalidUtf8         ← inflated bytes are not text
///   └── Parse(ParseError)   ← section grammar violation
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Envelope stripping or base64 transport decoding failed.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// The body is not a valid zlib stream.
    #[error("zlib decompression failed: {0}")]
    DecompressFailed(String),

    /// Inflating would exceed `limit` bytes.
    #[error("decompressed size exceeds limit {limit}")]
    DecompressionBomb { limit: usize },

    /// The inflated plaintext is not valid UTF-8.
    #[error("decompressed body is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// The plaintext does not follow the section grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
