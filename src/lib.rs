//! Takeout Chat Viewer - browse a Google Chat export as terminal chat bubbles
//!
//! This library reads an extracted Google Takeout "Google Chat" tree and
//! renders conversations as width-aligned chat bubbles. It supports:
//!
//! - Loading conversations, participants, and pin annotations from the
//!   per-conversation `messages.json` / `group_info.json` files
//! - Deriving pinned-message and category views for conversation selection
//! - Unicode display-width aware wrapping, padding, and left/right speaker
//!   alignment (bytes and code points are never used for layout)
//! - A pinned-only mode whose bubbles carry a searchable `[PINNED]` marker
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use takeout_chat_viewer::{PinIndex, load_export};
//!
//! let root = PathBuf::from("/home/alice/Downloads/Takeout/Google Chat/Groups");
//! let model = load_export(&root, None)?;
//! let pins = PinIndex::build(&model);
//! println!("Loaded {} conversations", model.conversations().len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod discovery;
pub mod loader;
pub mod models;
pub mod pager;
pub mod parsers;
pub mod pins;
pub mod render;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use catalog::ConversationCatalog;
pub use loader::load_export;
pub use models::{Category, Conversation, ExportModel, Message, MessageBody};
pub use pins::PinIndex;
pub use render::{BubbleRenderer, RenderConfig, RenderMode, RenderedLine, Side};
