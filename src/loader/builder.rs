//! Export loader for a Takeout chat tree.
//!
//! # Error Handling Strategy
//!
//! Loading follows a **graceful degradation** approach:
//!
//! - **Fatal**: a missing/unreadable export root, or an export in which not
//!   a single conversation directory could be parsed.
//! - **Conversation-level**: a directory whose `messages.json` is unreadable
//!   or corrupt is skipped with a warning; the rest of the export loads.
//! - **Record-level**: a record missing its sender or timestamp is skipped
//!   with a warning during normalization.
//!
//! Directories are visited in lexicographic name order; that order is the
//! load order and nothing downstream re-sorts it, so listings and rendered
//! output are deterministic for a given export.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;

use crate::models::{Category, Conversation, ExportModel, Message, MessageBody, RawGroupInfo, RawMessage};
use crate::parsers::{parse_group_info_file, parse_messages_file};

const MESSAGES_FILE: &str = "messages.json";
const GROUP_INFO_FILE: &str = "group_info.json";
const DM_DIR_PREFIX: &str = "DM";
const SPACE_DIR_PREFIX: &str = "Space";
const UNKNOWN_SENDER: &str = "Unknown";

// How many records per conversation feed the viewer-identity count
const VIEWER_DETECTION_SAMPLE: usize = 200;

/// One parsed conversation directory, before normalization.
struct LoadedGroup {
    id: String,
    info: RawGroupInfo,
    records: Vec<RawMessage>,
}

/// Load a `Google Chat/Groups` export tree into an [`ExportModel`].
///
/// `viewer_override` forces the viewer identity; when `None` it is detected
/// as the most frequent sender email across the export.
///
/// # Errors
///
/// Fails when `root` is not a directory or when no conversation directory
/// under it could be parsed. Individually corrupt conversations are skipped
/// with a warning.
pub fn load_export(root: &Path, viewer_override: Option<&str>) -> Result<ExportModel> {
    if !root.is_dir() {
        bail!("Export root not found: {}", root.display());
    }

    let mut group_dirs: Vec<PathBuf> = fs::read_dir(root)
        .with_context(|| format!("Failed to read export root: {}", root.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir() && path.join(MESSAGES_FILE).is_file())
        .collect();
    group_dirs.sort();

    // Each directory is independent, so the parse fans out across cores;
    // collect() keeps the results in directory order.
    let groups: Vec<LoadedGroup> = group_dirs
        .par_iter()
        .map(|dir| match load_group(dir) {
            Ok(group) => Some(group),
            Err(e) => {
                eprintln!("Warning: Skipping conversation {}: {}", dir.display(), e);
                None
            }
        })
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect();

    if groups.is_empty() {
        bail!("No parseable conversations under {}", root.display());
    }

    let viewer_email = match viewer_override {
        Some(email) => Some(email.to_string()),
        None => detect_viewer_email(&groups),
    };

    let conversations = groups
        .into_iter()
        .map(|group| assemble_conversation(group, viewer_email.as_deref()))
        .collect();

    Ok(ExportModel::new(conversations, viewer_email))
}

fn load_group(dir: &Path) -> Result<LoadedGroup> {
    let id = dir
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| dir.display().to_string());

    let records = parse_messages_file(&dir.join(MESSAGES_FILE))?;

    let info_path = dir.join(GROUP_INFO_FILE);
    let info = if info_path.is_file() {
        match parse_group_info_file(&info_path) {
            Ok(info) => info,
            Err(e) => {
                eprintln!("Warning: Ignoring unreadable group info in {}: {}", dir.display(), e);
                RawGroupInfo::default()
            }
        }
    } else {
        RawGroupInfo::default()
    };

    Ok(LoadedGroup { id, info, records })
}

/// Pick the viewer identity as the most frequent sender email, sampling the
/// head of each conversation. Ties break to the lexicographically smallest
/// email so the answer is stable across runs.
fn detect_viewer_email(groups: &[LoadedGroup]) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for group in groups {
        for record in group.records.iter().take(VIEWER_DETECTION_SAMPLE) {
            if let Some(email) = record.creator.as_ref().and_then(|c| c.email.as_deref()) {
                *counts.entry(email).or_insert(0) += 1;
            }
        }
    }

    counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(email, _)| email.to_string())
}

fn assemble_conversation(group: LoadedGroup, viewer_email: Option<&str>) -> Conversation {
    let mut messages = Vec::with_capacity(group.records.len());
    for (idx, record) in group.records.iter().enumerate() {
        match normalize_message(record) {
            Some(message) => messages.push(message),
            None => {
                eprintln!(
                    "Warning: {}: skipping record {} missing sender or timestamp",
                    group.id,
                    idx + 1
                );
            }
        }
    }

    let participants = distinct_participants(&messages);
    let category = classify(&group.id, &group.info, &participants);
    let title = conversation_title(&group, category, &messages, viewer_email);

    Conversation::new(group.id, title, category, participants, messages)
}

/// Normalize one raw record. Returns `None` when the record is missing its
/// sender or timestamp; anything without usable text becomes `NonText` so
/// attachment-only messages survive the load.
fn normalize_message(record: &RawMessage) -> Option<Message> {
    let creator = record.creator.as_ref()?;
    let timestamp = record.created_date.as_ref()?.clone();

    let sender = match creator.name.as_deref() {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => UNKNOWN_SENDER.to_string(),
    };

    let body = match record.text.as_deref() {
        Some(text) if !text.trim().is_empty() => MessageBody::Text(text.to_string()),
        _ => MessageBody::NonText,
    };

    Some(Message {
        sender,
        sender_email: creator.email.clone(),
        timestamp,
        body,
        pinned: record.is_pinned(),
    })
}

fn distinct_participants(messages: &[Message]) -> Vec<String> {
    let mut participants: Vec<String> = Vec::new();
    for message in messages {
        let identity = message.sender_email.clone().unwrap_or_else(|| message.sender.clone());
        if !participants.contains(&identity) {
            participants.push(identity);
        }
    }
    participants
}

/// The directory prefix is the export's own category tag and wins outright;
/// the two-participant heuristic only applies to untagged directories.
fn classify(id: &str, info: &RawGroupInfo, participants: &[String]) -> Category {
    if id.starts_with(DM_DIR_PREFIX) {
        return Category::DirectMessage;
    }
    if id.starts_with(SPACE_DIR_PREFIX) {
        return Category::Space;
    }
    if participants.len() == 2 && info.name.is_none() {
        Category::DirectMessage
    } else {
        Category::Space
    }
}

fn conversation_title(
    group: &LoadedGroup,
    category: Category,
    messages: &[Message],
    viewer_email: Option<&str>,
) -> String {
    if let Some(name) = group.info.name.as_deref()
        && !name.trim().is_empty()
    {
        return name.to_string();
    }
    if category == Category::DirectMessage {
        return dm_partner_name(messages, viewer_email);
    }
    group.id.clone()
}

/// Title a DM after the other party: the first non-viewer sender that still
/// carries a real display name.
fn dm_partner_name(messages: &[Message], viewer_email: Option<&str>) -> String {
    for message in messages {
        if viewer_email.is_some() && message.sender_email.as_deref() == viewer_email {
            continue;
        }
        if message.sender != UNKNOWN_SENDER {
            return message.sender.clone();
        }
    }
    "Deleted User".to_string()
}
