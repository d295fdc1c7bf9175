use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::RawGroupInfo;
use crate::utils::safe_open_file;

/// Parse an optional `group_info.json` (space title, member list).
pub fn parse_group_info_file(path: &Path) -> Result<RawGroupInfo> {
    let file = safe_open_file(path)?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse group info in {}", path.display()))
}
