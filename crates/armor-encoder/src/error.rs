/// Errors that can occur while building an armored document.
///
/// The encoder refuses any input the decoder would read back differently,
/// so a document it produces always decodes to the same fields.
///
/// ```text
///   EncodeError
///   ├── InvalidLabel        ← empty, padded or multi-line section label
///   ├── InvalidHeader       ← key/value not representable as `key: value`
///   ├── SeparatorInPayload  ← payload line would be read as a separator
///   ├── InvalidSignature    ← signature line would be skipped or split
///   └── Io(std::io::Error)  ← from the zlib writer
/// ```
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("invalid section label {label:?}")]
    InvalidLabel { label: String },

    #[error("header {key:?}: {value:?} cannot be written as a single `key: value` line")]
    InvalidHeader { key: String, value: String },

    #[error("payload line {line} looks like a section separator")]
    SeparatorInPayload { line: usize },

    #[error("signature {index}: {reason}")]
    InvalidSignature { index: usize, reason: &'static str },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
