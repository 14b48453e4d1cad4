/// Errors raised while peeling the armor off a document.
///
/// These cover the two outermost pipeline stages: envelope stripping and
/// base64 transport decoding. Anything past that point (inflation, the
/// section grammar) lives in `armor-decoder`.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The document has fewer lines than the fixed envelope requires.
    #[error("envelope too short: {lines} lines, need at least {min}")]
    EnvelopeTooShort { lines: usize, min: usize },

    /// Scan mode could not find one of the envelope separators.
    #[error("envelope has no {boundary} separator")]
    MissingBoundary { boundary: &'static str },

    /// The joined body is not valid standard base64.
    #[error("invalid base64 body: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}
