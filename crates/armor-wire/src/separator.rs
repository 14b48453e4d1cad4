/// Prefix of every opening section separator.
pub const BEGIN_PREFIX: &str = "-----BEGIN";

/// Prefix of every closing section separator.
pub const END_PREFIX: &str = "-----END";

/// Suffix shared by both separator kinds.
pub const SEPARATOR_SUFFIX: &str = "-----";

/// Splitter between a header key and its value.
pub const HEADER_SPLITTER: &str = ": ";

/// Whether a separator opens or closes a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeparatorKind {
    Begin,
    End,
}

/// A `-----BEGIN <label>-----` or `-----END <label>-----` line.
///
/// ```text
/// -----BEGIN SIGNED CONTRACT-----
/// └────┬───┘└──────┬──────┘└─┬─┘
///   prefix       label    suffix
/// ```
///
/// The label borrows from the source line and is trimmed of spaces and
/// tabs. An empty label is still a well-formed separator; callers that need
/// a non-empty label (the opening type section) check it themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionSeparator<'a> {
    pub kind: SeparatorKind,
    pub label: &'a str,
}

impl<'a> SectionSeparator<'a> {
    /// Recognise a separator line, or return `None` for anything else.
    ///
    /// Matching is exact on the prefix and suffix: leading or trailing
    /// whitespace around the dashes means the line is not a separator.
    /// Trim first if the surrounding grammar allows padding.
    pub fn parse(line: &'a str) -> Option<Self> {
        let (kind, rest) = if let Some(rest) = line.strip_prefix(BEGIN_PREFIX) {
            (SeparatorKind::Begin, rest)
        } else if let Some(rest) = line.strip_prefix(END_PREFIX) {
            (SeparatorKind::End, rest)
        } else {
            return None;
        };

        let label = rest.strip_suffix(SEPARATOR_SUFFIX)?;
        Some(Self {
            kind,
            label: trim(label),
        })
    }

    pub fn is_begin(&self) -> bool {
        self.kind == SeparatorKind::Begin
    }

    pub fn is_end(&self) -> bool {
        self.kind == SeparatorKind::End
    }
}

/// Returns true if `line` is an opening separator.
pub fn is_begin(line: &str) -> bool {
    SectionSeparator::parse(line).is_some_and(|s| s.is_begin())
}

/// Returns true if `line` is a closing separator.
pub fn is_end(line: &str) -> bool {
    SectionSeparator::parse(line).is_some_and(|s| s.is_end())
}

/// Trim spaces and tabs only. Other whitespace (`\r`, form feeds) is kept.
pub fn trim(line: &str) -> &str {
    line.trim_matches(|c| c == ' ' || c == '\t')
}

/// Split a `key: value` line. Exactly one splitter must be present.
pub fn split_header(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split(HEADER_SPLITTER);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => Some((key, value)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_begin_separator() {
        let sep = SectionSeparator::parse("-----BEGIN SIGNED CONTRACT-----").unwrap();
        assert_eq!(sep.kind, SeparatorKind::Begin);
        assert_eq!(sep.label, "SIGNED CONTRACT");
    }

    #[test]
    fn parses_end_separator() {
        let sep = SectionSeparator::parse("-----END SIGNATURE-----").unwrap();
        assert!(sep.is_end());
        assert_eq!(sep.label, "SIGNATURE");
    }

    #[test]
    fn label_is_trimmed() {
        let sep = SectionSeparator::parse("-----BEGIN \t SIGNED ACCOUNT  -----").unwrap();
        assert_eq!(sep.label, "SIGNED ACCOUNT");
    }

    #[test]
    fn empty_label_still_parses() {
        let sep = SectionSeparator::parse("-----BEGIN-----").unwrap();
        assert!(sep.is_begin());
        assert_eq!(sep.label, "");
    }

    #[test]
    fn rejects_missing_suffix() {
        assert!(SectionSeparator::parse("-----BEGIN SIGNATURE----").is_none());
        assert!(SectionSeparator::parse("-----BEGIN SIGNATURE").is_none());
    }

    #[test]
    fn rejects_padded_line() {
        assert!(SectionSeparator::parse("  -----END SIGNATURE-----").is_none());
        assert!(is_end(trim("  -----END SIGNATURE-----\t")));
    }

    #[test]
    fn rejects_plain_text() {
        assert!(!is_begin("something sane"));
        assert!(!is_end("BEGIN"));
    }

    #[test]
    fn split_header_requires_single_splitter() {
        assert_eq!(split_header("Version: 1"), Some(("Version", "1")));
        assert_eq!(split_header(": empty key"), Some(("", "empty key")));
        assert_eq!(split_header("Version:1"), None);
        assert_eq!(split_header("a: b: c"), None);
        assert_eq!(split_header("no splitter"), None);
    }

    #[test]
    fn trim_only_strips_spaces_and_tabs() {
        assert_eq!(trim(" \tline\t "), "line");
        assert_eq!(trim("line\r"), "line\r");
    }
}
