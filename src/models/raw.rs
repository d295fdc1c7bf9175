use serde::Deserialize;

/// Label type the export uses to mark a pinned message.
pub const LABEL_PINNED: &str = "PINNED";

/// One message record as it appears in a `messages.json` file.
///
/// Every field is optional at this layer; required-field validation happens
/// during normalization so a single malformed record can be skipped without
/// failing the whole file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMessage {
    #[serde(default)]
    pub creator: Option<RawMember>,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub message_labels: Vec<RawLabel>,
}

impl RawMessage {
    pub fn is_pinned(&self) -> bool {
        self.message_labels.iter().any(|l| l.label_type.as_deref() == Some(LABEL_PINNED))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMember {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLabel {
    #[serde(default)]
    pub label_type: Option<String>,
}

/// Contents of an optional `group_info.json` next to the messages file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGroupInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub members: Vec<RawMember>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_message_full_record() {
        let json = r#"{
            "creator": {"name": "Alice", "email": "alice@example.com"},
            "created_date": "Saturday, 3 June 2023 at 14:51:00 UTC",
            "text": "hello",
            "message_labels": [{"label_type": "PINNED"}]
        }"#;

        let msg: RawMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.creator.as_ref().unwrap().name.as_deref(), Some("Alice"));
        assert_eq!(msg.text.as_deref(), Some("hello"));
        assert!(msg.is_pinned());
    }

    #[test]
    fn test_raw_message_minimal_record() {
        let msg: RawMessage = serde_json::from_str("{}").unwrap();
        assert!(msg.creator.is_none());
        assert!(msg.created_date.is_none());
        assert!(msg.text.is_none());
        assert!(!msg.is_pinned());
    }

    #[test]
    fn test_raw_message_non_pinned_labels() {
        let json = r#"{"message_labels": [{"label_type": "EDITED"}, {}]}"#;
        let msg: RawMessage = serde_json::from_str(json).unwrap();
        assert!(!msg.is_pinned());
    }

    #[test]
    fn test_raw_message_ignores_unknown_fields() {
        let json = r#"{"text": "hi", "topic_id": "t1", "attached_files": []}"#;
        let msg: RawMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.text.as_deref(), Some("hi"));
    }

    #[test]
    fn test_raw_group_info_defaults() {
        let info: RawGroupInfo = serde_json::from_str("{}").unwrap();
        assert!(info.name.is_none());
        assert!(info.members.is_empty());
    }

    #[test]
    fn test_raw_group_info_with_members() {
        let json = r#"{"name": "Platform team", "members": [{"name": "Bob", "email": "bob@example.com"}]}"#;
        let info: RawGroupInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.name.as_deref(), Some("Platform team"));
        assert_eq!(info.members.len(), 1);
    }
}
