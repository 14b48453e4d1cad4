/// A decoded armored message.
///
/// ```text
/// ┌──────────────────────────────────────────────────────────┐
/// │ Message                                                  │
/// │   message_type: String      ← label of opening BEGIN     │
/// │   payload:      String      ← payload lines joined by \n │
/// │   signatures:   Vec<String> ← one per BEGIN/END pair     │
/// └──────────────────────────────────────────────────────────┘
/// ```
///
/// Built once by the decoder at the end of a successful parse. Fields are
/// private and only exposed through accessors, so a `Message` never
/// changes after construction. Serializes with the field name `type` for
/// the label.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Message {
    #[serde(rename = "type")]
    message_type: String,
    payload: String,
    signatures: Vec<String>,
}

impl Message {
    pub fn new(message_type: String, payload: String, signatures: Vec<String>) -> Self {
        Self {
            message_type,
            payload,
            signatures,
        }
    }

    /// Label of the opening section, e.g. `SIGNED CONTRACT`.
    pub fn message_type(&self) -> &str {
        &self.message_type
    }

    /// Payload text. Lines are joined with `\n`, no trailing newline.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Signature bodies in document order.
    pub fn signatures(&self) -> &[String] {
        &self.signatures
    }

    pub fn is_signed(&self) -> bool {
        !self.signatures.is_empty()
    }

    /// Split the message into its owned parts.
    pub fn into_parts(self) -> (String, String, Vec<String>) {
        (self.message_type, self.payload, self.signatures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract() -> Message {
        Message::new(
            "SIGNED CONTRACT".to_string(),
            "something sane".to_string(),
            vec!["c2lnbmF0dXJl".to_string()],
        )
    }

    #[test]
    fn accessors_expose_fields() {
        let message = contract();
        assert_eq!(message.message_type(), "SIGNED CONTRACT");
        assert_eq!(message.payload(), "something sane");
        assert_eq!(message.signatures(), ["c2lnbmF0dXJl"]);
        assert!(message.is_signed());
    }

    #[test]
    fn unsigned_message() {
        let message = Message::new("NOTICE".to_string(), String::new(), Vec::new());
        assert!(!message.is_signed());
    }

    #[test]
    fn serializes_label_as_type() {
        let json = serde_json::to_value(contract()).unwrap();
        assert_eq!(json["type"], "SIGNED CONTRACT");
        assert_eq!(json["payload"], "something sane");
        assert_eq!(json["signatures"][0], "c2lnbmF0dXJl");
    }

    #[test]
    fn into_parts_returns_owned_fields() {
        let (message_type, payload, signatures) = contract().into_parts();
        assert_eq!(message_type, "SIGNED CONTRACT");
        assert_eq!(payload, "something sane");
        assert_eq!(signatures.len(), 1);
    }
}
