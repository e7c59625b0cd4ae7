//! A loaded asset and its derived metadata.

use std::path::Path;

use anyhow::{Context, Result};

use crate::utils::mime;

use super::{INDEX_FILE, sanitize_identifier};

/// One file to embed, with everything the generator derives from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Original file name (e.g., "index.html")
    pub name: String,
    /// Sanitized C identifier fragment (e.g., "index_html")
    pub ident: String,
    /// Content-Type served for this asset
    pub content_type: &'static str,
    /// Raw file content
    pub body: Vec<u8>,
}

impl Asset {
    /// Read an asset from disk.
    ///
    /// Non-UTF-8 file names are converted lossily.
    pub fn load(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let body = std::fs::read(path)
            .with_context(|| format!("Failed to read asset {}", path.display()))?;
        Ok(Self::from_bytes(name, body))
    }

    /// Build an asset from a name and its content.
    pub fn from_bytes(name: impl Into<String>, body: Vec<u8>) -> Self {
        let name = name.into();
        Self {
            ident: sanitize_identifier(&name),
            content_type: mime::from_path(Path::new(&name)),
            name,
            body,
        }
    }

    /// Primary route (`/<name>`).
    pub fn route(&self) -> String {
        format!("/{}", self.name)
    }

    /// Whether this asset also answers the root route `/`.
    #[inline]
    pub fn is_index(&self) -> bool {
        self.name == INDEX_FILE
    }

    /// Name of the generated byte array.
    pub fn array_name(&self) -> String {
        format!("k_asset_{}", self.ident)
    }
}
