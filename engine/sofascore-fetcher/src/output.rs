use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::models::HighlightRecord;

/// Write the records as a pretty-printed JSON array, replacing any previous
/// run's artifact. The parent directory is created if missing.
pub fn write_highlights(path: &Path, records: &[HighlightRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory {}", parent.display())
            })?;
        }
    }

    let json =
        serde_json::to_string_pretty(records).context("Failed to serialize highlight records")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
