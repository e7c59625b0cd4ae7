//! Companion header rendering.

use std::path::Path;

use crate::asset::sanitize_identifier;

use super::template::{HeaderVars, WEB_ASSETS_H};

/// Render the header declaring `web_assets_get`.
pub fn render_header(include_guard: &str) -> String {
    WEB_ASSETS_H.render(&HeaderVars { include_guard })
}

/// Derive an include guard from the header's file name.
///
/// `include/web/web_assets.h` -> `WEB_ASSETS_H`
pub fn include_guard_for(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    sanitize_identifier(&name).to_ascii_uppercase()
}
