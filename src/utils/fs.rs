use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

// Maximum size for a single export JSON file: 10MB
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Open a file and validate its size against the already-open handle, so the
/// check cannot race with a replacement of the path (TOCTOU).
///
/// # Errors
///
/// Returns an error if the file cannot be opened, its metadata cannot be
/// read, or it exceeds 10MB.
pub fn safe_open_file(path: &Path) -> Result<File> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    if metadata.len() > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(file)
}
