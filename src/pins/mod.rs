//! Index of pinned messages across the export.
//!
//! Built once after load with a single pass over every message; the model
//! never changes within a session, so the index is never invalidated.

use std::collections::HashMap;

use crate::models::{ExportModel, Message};

/// Per-conversation positions of pinned messages, in load order.
#[derive(Debug, Default)]
pub struct PinIndex {
    pinned: HashMap<String, Vec<usize>>,
}

impl PinIndex {
    /// One O(total messages) pass; cannot fail - an export without pins is a
    /// valid empty index.
    pub fn build(model: &ExportModel) -> Self {
        let mut pinned = HashMap::new();
        for conversation in model.conversations() {
            let indices: Vec<usize> = conversation
                .messages
                .iter()
                .enumerate()
                .filter(|(_, message)| message.pinned)
                .map(|(idx, _)| idx)
                .collect();
            if !indices.is_empty() {
                pinned.insert(conversation.id.clone(), indices);
            }
        }
        Self { pinned }
    }

    pub fn has_pinned(&self, conversation_id: &str) -> bool {
        self.pinned.contains_key(conversation_id)
    }

    pub fn pinned_count(&self, conversation_id: &str) -> usize {
        self.pinned.get(conversation_id).map(Vec::len).unwrap_or(0)
    }

    /// Pinned messages of one conversation in load order. Unknown ids and
    /// pinless conversations yield an empty vec, never an error.
    pub fn pinned_messages<'a>(
        &self,
        model: &'a ExportModel,
        conversation_id: &str,
    ) -> Vec<&'a Message> {
        let Some(conversation) = model.conversation(conversation_id) else {
            return Vec::new();
        };
        match self.pinned.get(conversation_id) {
            Some(indices) => {
                indices.iter().filter_map(|&idx| conversation.messages.get(idx)).collect()
            }
            None => Vec::new(),
        }
    }
}
