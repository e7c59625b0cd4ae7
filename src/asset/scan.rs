//! Input directory scanning (read-only).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::{debug, utils::plural_count};

use super::{BundleError, INDEX_FILE};

/// Scan a flat asset directory and validate it.
///
/// Returns eligible files sorted by file name. A file is eligible when it
/// is a regular file (symlinks are followed) whose name does not start
/// with `.`. Subdirectories are skipped, never descended into.
///
/// ```text
/// web/
/// ├── .DS_Store      -> (hidden, skipped)
/// ├── app.js         -> web/app.js
/// ├── img/           -> (directory, skipped)
/// └── index.html     -> web/index.html
/// ```
///
/// # Errors
///
/// - [`BundleError::NotFound`] if `dir` is missing or not a directory
/// - [`BundleError::EmptyInput`] if there are no eligible files
/// - [`BundleError::MissingIndex`] if no eligible file is `index.html`
pub fn scan_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(BundleError::NotFound(dir.to_path_buf()).into());
    }

    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut files = Vec::new();
    let mut skipped = 0usize;
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        let path = entry.path();

        if is_hidden(&path) || !path.is_file() {
            skipped += 1;
            continue;
        }
        files.push(path);
    }

    // Byte-wise name order keeps output reproducible across filesystems
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    debug!("scan"; "{} eligible, {} skipped in {}",
        plural_count(files.len(), "file"), skipped, dir.display());

    if files.is_empty() {
        return Err(BundleError::EmptyInput(dir.to_path_buf()).into());
    }

    let has_index = files
        .iter()
        .any(|path| path.file_name().is_some_and(|name| name == INDEX_FILE));
    if !has_index {
        return Err(BundleError::MissingIndex(dir.to_path_buf()).into());
    }

    Ok(files)
}

/// Whether a path names a hidden file (leading `.`).
fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().starts_with(b"."))
}
