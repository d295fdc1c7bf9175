//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use serde_json::json;
use tempfile::TempDir;

/// Builder for synthetic export trees (`Groups/<conversation>/messages.json`)
pub struct ExportDirBuilder {
    temp_dir: TempDir,
}

impl ExportDirBuilder {
    pub fn new() -> Self {
        Self { temp_dir: TempDir::new().expect("Failed to create temp dir") }
    }

    /// Path of the Groups root
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a conversation directory with the given message records
    pub fn with_conversation(self, dir_name: &str, messages: &[MessageRecordBuilder]) -> Self {
        self.write_conversation(dir_name, None, messages)
    }

    /// Add a conversation that also carries a `group_info.json` name
    pub fn with_named_conversation(
        self,
        dir_name: &str,
        group_name: &str,
        messages: &[MessageRecordBuilder],
    ) -> Self {
        self.write_conversation(dir_name, Some(group_name), messages)
    }

    /// Add a conversation directory with raw file content (corruption tests)
    pub fn with_raw_conversation(self, dir_name: &str, messages_json: &str) -> Self {
        let dir = self.temp_dir.path().join(dir_name);
        fs::create_dir_all(&dir).expect("Failed to create conversation dir");
        fs::write(dir.join("messages.json"), messages_json).expect("Failed to write messages");
        self
    }

    fn write_conversation(
        self,
        dir_name: &str,
        group_name: Option<&str>,
        messages: &[MessageRecordBuilder],
    ) -> Self {
        let dir = self.temp_dir.path().join(dir_name);
        fs::create_dir_all(&dir).expect("Failed to create conversation dir");

        let records: Vec<serde_json::Value> = messages.iter().map(|m| m.to_value()).collect();
        let content = json!({ "messages": records });
        fs::write(dir.join("messages.json"), content.to_string())
            .expect("Failed to write messages.json");

        if let Some(name) = group_name {
            fs::write(dir.join("group_info.json"), json!({ "name": name }).to_string())
                .expect("Failed to write group_info.json");
        }

        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ExportDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one `messages.json` record
pub struct MessageRecordBuilder {
    name: Option<String>,
    email: Option<String>,
    date: Option<String>,
    text: Option<String>,
    pinned: bool,
}

impl MessageRecordBuilder {
    /// A complete text message from the given sender
    pub fn from(name: &str, email: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            date: Some("Saturday, 3 June 2023 at 14:51:00 UTC".to_string()),
            text: Some("Test message".to_string()),
            pinned: false,
        }
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    /// Attachment-only record: no text payload
    pub fn non_text(mut self) -> Self {
        self.text = None;
        self
    }

    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.date = Some(date.to_string());
        self
    }

    /// Drop the sender entirely (invalid record)
    pub fn without_creator(mut self) -> Self {
        self.name = None;
        self.email = None;
        self
    }

    /// Drop the timestamp (invalid record)
    pub fn without_date(mut self) -> Self {
        self.date = None;
        self
    }

    pub fn to_value(&self) -> serde_json::Value {
        let mut record = serde_json::Map::new();

        if self.name.is_some() || self.email.is_some() {
            let mut creator = serde_json::Map::new();
            if let Some(name) = &self.name {
                creator.insert("name".to_string(), json!(name));
            }
            if let Some(email) = &self.email {
                creator.insert("email".to_string(), json!(email));
            }
            record.insert("creator".to_string(), creator.into());
        }
        if let Some(date) = &self.date {
            record.insert("created_date".to_string(), json!(date));
        }
        if let Some(text) = &self.text {
            record.insert("text".to_string(), json!(text));
        }
        if self.pinned {
            record.insert("message_labels".to_string(), json!([{ "label_type": "PINNED" }]));
        }

        record.into()
    }
}

/// A small two-conversation export with a clear viewer identity
pub fn realistic_export() -> TempDir {
    ExportDirBuilder::new()
        .with_conversation(
            "DM 1aaa",
            &[
                MessageRecordBuilder::from("Me", "me@example.com").text("hello Bob"),
                MessageRecordBuilder::from("Bob", "bob@example.com").text("hi there"),
                MessageRecordBuilder::from("Me", "me@example.com").text("how are you?"),
            ],
        )
        .with_named_conversation(
            "Space 2bbb",
            "Release crew",
            &[
                MessageRecordBuilder::from("Me", "me@example.com").text("release is green"),
                MessageRecordBuilder::from("Carol", "carol@example.com")
                    .text("shipping it")
                    .pinned(),
            ],
        )
        .build()
}
