use armor_types::{HeaderBlock, Message};
use armor_wire::separator::{SectionSeparator, SeparatorKind, trim};

use crate::error::ParseError;

/// Grammar stages, in the only order they can occur.
///
/// ```text
///   Type ──► Headers ──► Payload ──┬──► Done          (END separator)
///                                  └──► Signatures ──► Done
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Type,
    Headers,
    Payload,
    Signatures,
    Done,
}

/// Line-oriented walker over inflated message plaintext.
///
/// The parser never backtracks. Each stage reads from `cursor` and leaves
/// it at the first line the next stage owns:
///
/// 1. **Type**: skip leading blank lines, read the opening
///    `-----BEGIN <type>-----` separator.
/// 2. **Headers**: read `key: value` lines up to the first blank line. The
///    blank line is left for the payload stage.
/// 3. **Payload**: drop the header terminator, then collect trimmed lines
///    until a separator. `END` finishes the document; `BEGIN` hands over
///    to the signature stage without consuming the line.
/// 4. **Signatures**: one signature per `BEGIN`/`END` pair. Lines with a
///    `:` are signature headers and are skipped; the rest are
///    concatenated without separators.
///
/// # Example
///
/// ```rust
/// use armor_decoder::SectionParser;
///
/// let plaintext = "-----BEGIN SIGNED CONTRACT-----\n\
///                  Version: 1\n\
///                  \n\
///                  something sane\n\
///                  -----BEGIN SIGNATURE-----\n\
///                  c2lnbmF0dXJl\n\
///                  -----END SIGNATURE-----\n\
///                  -----END SIGNED CONTRACT-----";
/// let lines: Vec<&str> = plaintext.split('\n').collect();
///
/// let message = SectionParser::parse(&lines).unwrap();
/// assert_eq!(message.message_type(), "SIGNED CONTRACT");
/// assert_eq!(message.payload(), "something sane");
/// assert_eq!(message.signatures(), ["c2lnbmF0dXJl"]);
/// ```
pub struct SectionParser<'a, S> {
    lines: &'a [S],
    cursor: usize,
}

impl<'a, S: AsRef<str>> SectionParser<'a, S> {
    /// Parse a complete plaintext document into a [`Message`].
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] of the first stage that fails. Nothing
    /// is returned for the stages that succeeded before it.
    pub fn parse(lines: &'a [S]) -> Result<Message, ParseError> {
        Self { lines, cursor: 0 }.run()
    }

    fn run(mut self) -> Result<Message, ParseError> {
        let mut stage = Stage::Type;
        let mut message_type = String::new();
        let mut payload = String::new();
        let mut signatures = Vec::new();

        loop {
            stage = match stage {
                Stage::Type => {
                    message_type = self.read_type()?;
                    Stage::Headers
                }
                Stage::Headers => {
                    let headers = self.read_headers()?;
                    tracing::debug!(
                        message_type = %message_type,
                        headers = headers.len(),
                        "parsed header block"
                    );
                    Stage::Payload
                }
                Stage::Payload => {
                    let (text, next) = self.read_payload()?;
                    payload = text;
                    next
                }
                Stage::Signatures => {
                    signatures = self.read_signatures()?;
                    Stage::Done
                }
                Stage::Done => break,
            };
        }

        tracing::debug!(
            message_type = %message_type,
            payload_len = payload.len(),
            signatures = signatures.len(),
            "parsed message"
        );
        Ok(Message::new(message_type, payload, signatures))
    }

    fn line(&self, idx: usize) -> &'a str {
        let lines: &'a [S] = self.lines;
        lines[idx].as_ref()
    }

    fn remaining(&self) -> usize {
        self.lines.len() - self.cursor
    }

    // ── Type ──────────────────────────────────────────────────────────────

    fn read_type(&mut self) -> Result<String, ParseError> {
        while self.cursor < self.lines.len() && trim(self.line(self.cursor)).is_empty() {
            self.cursor += 1;
        }

        if self.remaining() < 2 {
            return Err(ParseError::MalformedHeader {
                line: None,
                reason: "document has fewer than two lines".to_string(),
            });
        }

        let line = self.line(self.cursor);
        let label = match SectionSeparator::parse(line) {
            Some(SectionSeparator {
                kind: SeparatorKind::Begin,
                label,
            }) if !label.is_empty() => label,
            Some(SectionSeparator {
                kind: SeparatorKind::Begin,
                ..
            }) => {
                return Err(ParseError::MalformedHeader {
                    line: Some(self.cursor + 1),
                    reason: "BEGIN separator has an empty label".to_string(),
                });
            }
            _ => {
                return Err(ParseError::MalformedHeader {
                    line: Some(self.cursor + 1),
                    reason: format!("expected a BEGIN separator, found {line:?}"),
                });
            }
        };

        self.cursor += 1;
        Ok(label.to_string())
    }

    // ── Headers ───────────────────────────────────────────────────────────

    fn read_headers(&mut self) -> Result<HeaderBlock, ParseError> {
        let start = self.cursor + 1;
        let mut headers = HeaderBlock::new();

        while self.cursor < self.lines.len() {
            let line = trim(self.line(self.cursor));
            if line.is_empty() {
                return Ok(headers);
            }
            if !headers.insert_line(line) {
                return Err(ParseError::InvalidHeader {
                    line: self.cursor + 1,
                    content: line.to_string(),
                });
            }
            self.cursor += 1;
        }

        Err(ParseError::InvalidTransactionHeader { start })
    }

    // ── Payload ───────────────────────────────────────────────────────────

    fn read_payload(&mut self) -> Result<(String, Stage), ParseError> {
        if self.remaining() < 2 {
            return Err(ParseError::MalformedPayload {
                line: self.cursor + 1,
                reason: "expected at least one payload line and a closing separator",
            });
        }

        // The header block always ends on a blank line; it is not payload.
        self.cursor += 1;

        let mut payload = String::new();
        let mut first = true;
        while self.cursor < self.lines.len() {
            let line = trim(self.line(self.cursor));
            match SectionSeparator::parse(line).map(|s| s.kind) {
                Some(SeparatorKind::End) => {
                    self.cursor += 1;
                    if self.cursor < self.lines.len() {
                        self.log_trailing();
                    }
                    return Ok((payload, Stage::Done));
                }
                Some(SeparatorKind::Begin) => return Ok((payload, Stage::Signatures)),
                None => {
                    if !first {
                        payload.push('\n');
                    }
                    payload.push_str(line);
                    first = false;
                    self.cursor += 1;
                }
            }
        }

        Err(ParseError::MalformedPayload {
            line: self.lines.len(),
            reason: "payload is not terminated by a BEGIN or END separator",
        })
    }

    // ── Signatures ────────────────────────────────────────────────────────

    fn read_signatures(&mut self) -> Result<Vec<String>, ParseError> {
        let first = trim(self.line(self.cursor));
        if !SectionSeparator::parse(first).is_some_and(|s| s.is_begin()) {
            return Err(ParseError::ExpectedSignatureList {
                line: self.cursor + 1,
                content: first.to_string(),
            });
        }

        let mut signatures = Vec::new();
        let mut current: Option<String> = None;

        while self.cursor < self.lines.len() {
            let line = trim(self.line(self.cursor));
            self.cursor += 1;

            match SectionSeparator::parse(line).map(|s| s.kind) {
                Some(SeparatorKind::Begin) => {
                    if current.is_some() {
                        tracing::warn!(line = self.cursor, "signature section reopened before END");
                    }
                    current = Some(String::new());
                }
                Some(SeparatorKind::End) => {
                    // An END with nothing open closes the enclosing document.
                    if let Some(signature) = current.take() {
                        signatures.push(signature);
                    }
                }
                None if line.contains(':') => {}
                None => {
                    if let Some(signature) = current.as_mut() {
                        signature.push_str(line);
                    }
                }
            }
        }

        if current.is_some() {
            tracing::warn!("signature section left open at end of input; dropped");
        }
        Ok(signatures)
    }

    fn log_trailing(&self) {
        let trailing = self.lines[self.cursor..]
            .iter()
            .filter(|l| !trim(l.as_ref()).is_empty())
            .count();
        if trailing > 0 {
            tracing::warn!(
                line = self.cursor + 1,
                trailing,
                "ignoring content after closing END separator"
            );
        }
    }
}
