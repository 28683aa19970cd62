//! Shared helpers for artifact writers.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{OutputError, Result};

/// Ensure the output directory exists.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| OutputError::io(dir, e))
}

/// Reject base names that are empty or are not a plain file name.
pub fn validate_base_name(base_name: &str) -> Result<()> {
    let trimmed = base_name.trim();
    if trimmed.is_empty()
        || trimmed != base_name
        || base_name == "."
        || base_name == ".."
        || base_name.contains(['/', '\\'])
    {
        return Err(OutputError::invalid_base_name(base_name));
    }
    Ok(())
}

/// Open a temporary file next to `target` so it can be persisted atomically.
pub fn staging_file(output_dir: &Path, target: &Path) -> Result<NamedTempFile> {
    let stem = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    tempfile::Builder::new()
        .prefix(&format!(".{stem}."))
        .suffix(".part")
        .tempfile_in(output_dir)
        .map_err(|e| OutputError::io(output_dir, e))
}

/// Move a finished temporary file to its final path.
pub fn persist(file: NamedTempFile, target: &Path) -> Result<PathBuf> {
    file.persist(target)
        .map_err(|e| OutputError::io(target, e.error))?;
    Ok(target.to_path_buf())
}
