//! Data models for a Google Chat Takeout export.
//!
//! Two layers:
//!
//! - [`raw`] - records exactly as serde sees them in `messages.json` and
//!   `group_info.json`, with every field optional
//! - normalized types ([`Conversation`], [`Message`], [`MessageBody`]) built
//!   by the loader, with required fields validated and bodies reduced to a
//!   text/non-text sum type
//!
//! [`ExportModel`] owns the normalized tree and is immutable after load.

pub mod conversation;
pub mod export;
pub mod raw;

pub use conversation::{Category, Conversation, Message, MessageBody};
pub use export::ExportModel;
pub use raw::{RawGroupInfo, RawLabel, RawMember, RawMessage};
