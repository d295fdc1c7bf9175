use std::path::PathBuf;

use anyhow::{Context, Result};

/// The default search location for Takeout downloads.
///
/// Uses the platform downloads directory when the OS reports one, otherwise
/// falls back to `~/Downloads`.
pub fn downloads_dir() -> Result<PathBuf> {
    if let Some(dir) = dirs::download_dir() {
        return Ok(dir);
    }
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join("Downloads"))
}
