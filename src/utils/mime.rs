//! MIME type detection for embedded assets.
//!
//! The table is intentionally small: firmware only serves the handful of
//! types a single-page status UI needs.

use std::path::Path;

/// MIME type constants served by the firmware.
pub mod types {
    // Text
    pub const HTML: &str = "text/html; charset=utf-8";
    pub const CSS: &str = "text/css; charset=utf-8";
    pub const JAVASCRIPT: &str = "application/javascript; charset=utf-8";
    pub const JSON: &str = "application/json; charset=utf-8";
    pub const PLAIN: &str = "text/plain; charset=utf-8";

    // Images
    pub const SVG: &str = "image/svg+xml";
    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const ICO: &str = "image/x-icon";

    // Binary
    pub const OCTET_STREAM: &str = "application/octet-stream";
}

/// Guess MIME type from file extension.
///
/// Returns a full MIME type string suitable for HTTP Content-Type header.
pub fn from_path(path: &Path) -> &'static str {
    from_extension(path.extension().and_then(|e| e.to_str()))
}

/// Guess MIME type from file extension string (case-insensitive).
pub fn from_extension(ext: Option<&str>) -> &'static str {
    let Some(ext) = ext else {
        return types::OCTET_STREAM;
    };

    match ext.to_ascii_lowercase().as_str() {
        "html" => types::HTML,
        "css" => types::CSS,
        "js" => types::JAVASCRIPT,
        "json" => types::JSON,
        "svg" => types::SVG,
        "png" => types::PNG,
        "jpg" | "jpeg" => types::JPEG,
        "gif" => types::GIF,
        "ico" => types::ICO,
        "txt" => types::PLAIN,
        _ => types::OCTET_STREAM,
    }
}
