use crate::models::Conversation;

/// The loaded export: every conversation in load order plus the detected
/// viewer identity. Loaded once per session and never mutated afterwards;
/// pin and catalog views borrow from it.
#[derive(Debug, Clone)]
pub struct ExportModel {
    conversations: Vec<Conversation>,
    viewer_email: Option<String>,
}

impl ExportModel {
    pub(crate) fn new(conversations: Vec<Conversation>, viewer_email: Option<String>) -> Self {
        Self { conversations, viewer_email }
    }

    /// All conversations in load order (lexicographic directory order).
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn conversation(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    /// The address treated as "you" when rendering. Detected as the most
    /// frequent sender across the export, so it is a heuristic rather than
    /// ground truth; `None` when no record carried a sender email.
    pub fn viewer_email(&self) -> Option<&str> {
        self.viewer_email.as_deref()
    }

    pub fn message_count(&self) -> usize {
        self.conversations.iter().map(|c| c.messages.len()).sum()
    }

    pub fn pinned_message_count(&self) -> usize {
        self.conversations.iter().map(|c| c.messages.iter().filter(|m| m.pinned).count()).sum()
    }
}
