//! Category and pin views over the loaded export.
//!
//! A [`ConversationCatalog`] borrows the model and pin index and exposes
//! read-only listings for the selector. Listings preserve load order
//! exactly; nothing here re-sorts or mutates the underlying data.

use crate::models::{Category, Conversation, ExportModel};
use crate::pins::PinIndex;
use crate::render::width::pad_to_width;
use crate::utils::sanitize_for_display;

// Display-width column the title occupies in selector labels
const LABEL_TITLE_WIDTH: usize = 45;

pub struct ConversationCatalog<'a> {
    model: &'a ExportModel,
    pins: &'a PinIndex,
}

impl<'a> ConversationCatalog<'a> {
    pub fn new(model: &'a ExportModel, pins: &'a PinIndex) -> Self {
        Self { model, pins }
    }

    /// Conversations of one category, in load order.
    pub fn list_by_category(&self, category: Category) -> Vec<&'a Conversation> {
        self.model.conversations().iter().filter(|c| c.category == category).collect()
    }

    /// Conversations containing at least one pinned message, in load order.
    pub fn list_pinned_only(&self) -> Vec<&'a Conversation> {
        self.model
            .conversations()
            .iter()
            .filter(|c| self.pins.has_pinned(&c.id))
            .collect()
    }

    /// Human-readable selector label, e.g.
    /// `DM  Alice Chen (📌 2)<pad...> | DM 4ufW9aAAAAE`.
    ///
    /// The title column is padded by display width so labels line up even
    /// when titles contain wide characters.
    pub fn label(&self, conversation: &Conversation) -> String {
        let tag = match conversation.category {
            Category::DirectMessage => "DM",
            Category::Space => "SP",
        };

        let mut title = sanitize_for_display(&conversation.title);
        let pinned = self.pins.pinned_count(&conversation.id);
        if pinned > 0 {
            title.push_str(&format!(" (📌 {})", pinned));
        }

        format!("{}  {} | {}", tag, pad_to_width(&title, LABEL_TITLE_WIDTH), conversation.id)
    }
}
