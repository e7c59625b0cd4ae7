//! Asset bundling error types.

use std::path::PathBuf;
use thiserror::Error;

/// Preconditions that abort a bundle run before any output is written.
///
/// Filesystem faults while reading or writing are not part of this set;
/// they surface as I/O errors with context.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("Input directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("No files found in {}", .0.display())]
    EmptyInput(PathBuf),

    #[error("index.html is required in {}", .0.display())]
    MissingIndex(PathBuf),

    #[error("`{first}` and `{second}` both map to identifier `{identifier}`")]
    DuplicateIdentifier {
        identifier: String,
        first: String,
        second: String,
    },
}
