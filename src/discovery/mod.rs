//! Locates a Takeout chat export under the downloads directory.
//!
//! Multi-part exports (`takeout-...-001.zip`, `takeout-...-002.zip`, or
//! several extracted `Takeout*` folders) are never merged: discovery picks
//! exactly one candidate, deterministically, and leaves the rest alone.
//! Extraction is out of scope - an unextracted archive is reported back to
//! the caller, which tells the user to unpack it.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

const TAKEOUT_DIR_PREFIX: &str = "Takeout";
const ARCHIVE_PREFIX: &str = "takeout-";
const ARCHIVE_SUFFIX: &str = ".zip";

/// What discovery found: a ready-to-load `Groups` directory, or an archive
/// that still needs extracting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportSource {
    ExtractedRoot(PathBuf),
    Archive(PathBuf),
}

/// Search `downloads` for a chat export. Extracted trees win over archives;
/// within a kind exactly one candidate is chosen (newest mtime, ties broken
/// by greatest name) so repeated runs agree.
pub fn discover_export(downloads: &Path) -> Result<Option<ExportSource>> {
    if !downloads.is_dir() {
        bail!("Downloads directory not found: {}", downloads.display());
    }

    if let Some(root) = newest_extracted_root(downloads)? {
        return Ok(Some(ExportSource::ExtractedRoot(root)));
    }
    Ok(newest_archive(downloads)?.map(ExportSource::Archive))
}

/// A candidate with the metadata the deterministic pick needs.
struct Candidate {
    modified: SystemTime,
    name: String,
    path: PathBuf,
}

fn newest_extracted_root(downloads: &Path) -> Result<Option<PathBuf>> {
    let mut candidates = Vec::new();

    for entry in WalkDir::new(downloads).min_depth(1).max_depth(1) {
        let entry = entry.context("Failed to read downloads entry")?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if !name.starts_with(TAKEOUT_DIR_PREFIX) {
            continue;
        }

        let groups = entry.path().join("Google Chat").join("Groups");
        if groups.is_dir() {
            candidates.push(Candidate { modified: modified_time(entry.path()), name, path: groups });
        }
    }

    Ok(pick_one(candidates))
}

fn newest_archive(downloads: &Path) -> Result<Option<PathBuf>> {
    let mut candidates = Vec::new();

    for entry in WalkDir::new(downloads).min_depth(1).max_depth(1) {
        let entry = entry.context("Failed to read downloads entry")?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with(ARCHIVE_PREFIX) && name.ends_with(ARCHIVE_SUFFIX) {
            candidates.push(Candidate {
                modified: modified_time(entry.path()),
                name,
                path: entry.path().to_path_buf(),
            });
        }
    }

    Ok(pick_one(candidates))
}

fn modified_time(path: &Path) -> SystemTime {
    path.metadata().and_then(|m| m.modified()).unwrap_or(SystemTime::UNIX_EPOCH)
}

/// Exactly one winner: newest modification time first, then the greatest
/// name, so `-002` beats `-001` even on filesystems with coarse timestamps.
fn pick_one(mut candidates: Vec<Candidate>) -> Option<PathBuf> {
    candidates.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| b.name.cmp(&a.name)));
    candidates.into_iter().next().map(|c| c.path)
}
