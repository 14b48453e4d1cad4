use std::collections::BTreeMap;

use armor_wire::separator::split_header;

/// `Key: Value` lines from the header block of a message.
///
/// The decoder builds one of these while walking the header block and
/// drops it once the payload starts; it is not part of [`Message`]. Keys
/// are not checked against any schema. A repeated key keeps its last
/// value.
///
/// [`Message`]: crate::Message
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderBlock {
    entries: BTreeMap<String, String>,
}

impl HeaderBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a `key: value` line. Returns `false`, leaving the block
    /// unchanged, if the line does not contain exactly one `": "`.
    pub fn insert_line(&mut self, line: &str) -> bool {
        match split_header(line) {
            Some((key, value)) => {
                self.insert(key, value);
                true
            }
            None => false,
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
