//! JSON parsers for the export's per-conversation files.
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach suitable for CLI
//! tools:
//!
//! - **Individual record failures**: a record that fails to decode is logged
//!   to stderr and skipped, so one bad record never hides a whole
//!   conversation.
//! - **Catastrophic failure detection**: a file where more than half of the
//!   records fail to decode is rejected, preventing severely corrupted files
//!   from masquerading as near-empty conversations.
//! - **Error propagation**: `anyhow::Result` with context; the loader
//!   decides whether a file-level failure skips one conversation or aborts
//!   the load.

pub mod group_info;
pub mod messages;
pub mod timestamps;

pub use group_info::parse_group_info_file;
pub use messages::parse_messages_file;
pub use timestamps::parse_export_timestamp;
