use crate::error::WireError;
use crate::separator::{is_begin, is_end, split_header, trim};

/// Lines removed from the top of a fixed envelope: begin separator, two
/// metadata lines, one blank line.
pub const FIXED_HEADER_LINES: usize = 4;

/// Lines removed from the bottom of a fixed envelope: one blank line and
/// the end separator.
pub const FIXED_FOOTER_LINES: usize = 2;

/// Shortest document the fixed stripper accepts.
pub const MIN_ENVELOPE_LINES: usize = FIXED_HEADER_LINES + FIXED_FOOTER_LINES;

/// How the envelope around the base64 body is located.
///
/// ```text
/// ┌───────┬──────────────────────────────────────────────────────────┐
/// │ Mode  │ Behaviour                                                │
/// ├───────┼──────────────────────────────────────────────────────────┤
/// │ Fixed │ Drop 4 lines from the top and 2 from the bottom. Exact   │
/// │       │ match for producers that always emit Version + Comment.  │
/// │ Scan  │ Find the outermost BEGIN/END separators, skip metadata   │
/// │       │ lines and one blank line on each side.                   │
/// └───────┴──────────────────────────────────────────────────────────┘
/// ```
///
/// `Fixed` does not look at content at all. A producer that omits the
/// `Comment:` line gets one metadata line handed to the base64 decoder,
/// which then fails. Use `Scan` for such producers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnvelopeMode {
    #[default]
    Fixed,
    Scan,
}

/// Strip the armor envelope and return the body lines, in order.
///
/// The returned slice borrows from `lines`; nothing is copied.
///
/// # Errors
///
/// - [`WireError::EnvelopeTooShort`] in `Fixed` mode when the document has
///   fewer than [`MIN_ENVELOPE_LINES`] lines.
/// - [`WireError::MissingBoundary`] in `Scan` mode when no BEGIN separator,
///   or no END separator after it, exists.
pub fn strip<S: AsRef<str>>(lines: &[S], mode: EnvelopeMode) -> Result<&[S], WireError> {
    let body = match mode {
        EnvelopeMode::Fixed => strip_fixed(lines)?,
        EnvelopeMode::Scan => strip_scan(lines)?,
    };
    tracing::debug!(
        ?mode,
        document_lines = lines.len(),
        body_lines = body.len(),
        "stripped envelope"
    );
    Ok(body)
}

fn strip_fixed<S: AsRef<str>>(lines: &[S]) -> Result<&[S], WireError> {
    if lines.len() < MIN_ENVELOPE_LINES {
        return Err(WireError::EnvelopeTooShort {
            lines: lines.len(),
            min: MIN_ENVELOPE_LINES,
        });
    }
    Ok(&lines[FIXED_HEADER_LINES..lines.len() - FIXED_FOOTER_LINES])
}

fn strip_scan<S: AsRef<str>>(lines: &[S]) -> Result<&[S], WireError> {
    let text = |idx: usize| trim(lines[idx].as_ref());

    let begin = lines
        .iter()
        .position(|l| is_begin(trim(l.as_ref())))
        .ok_or(WireError::MissingBoundary { boundary: "BEGIN" })?;
    let end = lines
        .iter()
        .rposition(|l| is_end(trim(l.as_ref())))
        .filter(|&end| end > begin)
        .ok_or(WireError::MissingBoundary { boundary: "END" })?;

    // Armor metadata (`Version: ...`, `Comment: ...`) sits directly under
    // the BEGIN line. Base64 never contains ": ", so this cannot eat body.
    let mut start = begin + 1;
    while start < end && split_header(text(start)).is_some() {
        start += 1;
    }
    if start < end && text(start).is_empty() {
        start += 1;
    }

    let mut stop = end;
    if stop > start && text(stop - 1).is_empty() {
        stop -= 1;
    }

    Ok(&lines[start..stop])
}
