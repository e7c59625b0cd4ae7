//! Output file writing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Write generated text, creating parent directories as needed.
///
/// Existing files are overwritten unconditionally.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}
