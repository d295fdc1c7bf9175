/// Conversation classification: two-party chat or multi-party space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    DirectMessage,
    Space,
}

/// A message body is either text or some payload we do not render
/// (attachments, deleted content). The renderer matches exhaustively on this
/// so a new variant cannot be silently ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    Text(String),
    NonText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Sender display name; `"Unknown"` when the export carries none.
    pub sender: String,
    pub sender_email: Option<String>,
    /// Raw export timestamp string, carried for display only.
    pub timestamp: String,
    pub body: MessageBody,
    pub pinned: bool,
}

/// One conversation directory from the export. Immutable once constructed;
/// messages are kept in file order, which the export writes chronologically.
#[derive(Debug, Clone)]
pub struct Conversation {
    pub id: String,
    pub title: String,
    pub category: Category,
    /// Distinct sender identities (email, or name when no email), in
    /// first-seen order.
    pub participants: Vec<String>,
    pub messages: Vec<Message>,
    pub has_pinned: bool,
}

impl Conversation {
    pub fn new(
        id: String,
        title: String,
        category: Category,
        participants: Vec<String>,
        messages: Vec<Message>,
    ) -> Self {
        let has_pinned = messages.iter().any(|m| m.pinned);
        Self { id, title, category, participants, messages, has_pinned }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_message(sender: &str, pinned: bool) -> Message {
        Message {
            sender: sender.to_string(),
            sender_email: Some(format!("{}@example.com", sender.to_lowercase())),
            timestamp: "Saturday, 3 June 2023 at 14:51:00 UTC".to_string(),
            body: MessageBody::Text("hello".to_string()),
            pinned,
        }
    }

    #[test]
    fn test_has_pinned_derived_from_messages() {
        let convo = Conversation::new(
            "DM test".to_string(),
            "Alice".to_string(),
            Category::DirectMessage,
            vec!["alice@example.com".to_string()],
            vec![text_message("Alice", false), text_message("Alice", true)],
        );
        assert!(convo.has_pinned);
    }

    #[test]
    fn test_has_pinned_false_without_pins() {
        let convo = Conversation::new(
            "DM test".to_string(),
            "Alice".to_string(),
            Category::DirectMessage,
            vec![],
            vec![text_message("Alice", false)],
        );
        assert!(!convo.has_pinned);
    }

    #[test]
    fn test_has_pinned_false_for_empty_conversation() {
        let convo = Conversation::new(
            "Space test".to_string(),
            "Empty".to_string(),
            Category::Space,
            vec![],
            vec![],
        );
        assert!(!convo.has_pinned);
    }
}
