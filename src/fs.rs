//! Filesystem helpers for the static inputs

use std::path::{Path, PathBuf};

use glob::glob;

/// List files directly inside `dir` with one of the given extensions,
/// sorted by path so load order never depends on the directory listing.
pub fn list_files(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();

    for ext in extensions {
        let pattern = dir.join(format!("*.{ext}"));
        let pattern_str = pattern.to_string_lossy();
        let matches = glob(&pattern_str).map_err(|e| format!("'{pattern_str}': {e}"))?;
        files.extend(matches.filter_map(|r| r.ok()).filter(|p| p.is_file()));
    }

    files.sort();
    files.dedup();
    Ok(files)
}
