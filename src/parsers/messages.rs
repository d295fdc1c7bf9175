use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::models::RawMessage;
use crate::utils::safe_open_file;

/// Parse a conversation `messages.json` file.
///
/// Takeout wraps the records in `{"messages": [...]}`; older exports are a
/// bare array. Any other shape yields zero records rather than an error.
/// Individual records that fail to decode are logged and skipped; the file
/// as a whole is rejected when more than half of its records fail, since
/// that points at systematic corruption rather than a stray bad record.
pub fn parse_messages_file(path: &Path) -> Result<Vec<RawMessage>> {
    let file = safe_open_file(path)?;
    let reader = BufReader::new(file);

    let data: Value = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))?;

    let records = match &data {
        Value::Object(map) => match map.get("messages") {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        },
        Value::Array(items) => items.as_slice(),
        _ => &[],
    };

    let mut messages = Vec::with_capacity(records.len());
    let mut skipped = 0usize;

    for (idx, record) in records.iter().enumerate() {
        match serde_json::from_value::<RawMessage>(record.clone()) {
            Ok(message) => messages.push(message),
            Err(e) => {
                eprintln!(
                    "Warning: Failed to decode record {} in {}: {}",
                    idx + 1,
                    path.display(),
                    e
                );
                skipped += 1;
            }
        }
    }

    if skipped * 2 > records.len() {
        bail!(
            "Too many record failures in {}: {} of {} records failed",
            path.display(),
            skipped,
            records.len()
        );
    }

    Ok(messages)
}
