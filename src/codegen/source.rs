//! Generated `.c` source rendering.
//!
//! Output layout:
//!
//! ```text
//! preamble            includes + web_asset_t
//! k_asset_<ident>[]   one byte array per asset, in name order
//! k_assets[]          route records (index.html followed by "/")
//! web_assets_get()    linear strcmp lookup
//! ```

use std::fmt::Write;

use crate::asset::AssetTable;

use super::encode_bytes;
use super::template::{LOOKUP_C, NoVars, PREAMBLE_C, PreambleVars};

/// Default include path of the companion header.
pub const DEFAULT_HEADER_INCLUDE: &str = "web/web_assets.h";

/// Options for [`render_source`].
#[derive(Debug, Clone)]
pub struct SourceOptions {
    /// Path written into the leading `#include "..."`
    pub header_include: String,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            header_include: DEFAULT_HEADER_INCLUDE.to_string(),
        }
    }
}

/// Render the complete generated source for a table.
///
/// Pure and deterministic: the same table always renders the same text.
///
/// An empty asset renders as an empty initializer (`= {\n\n};`), which ISO
/// C before C23 rejects under `-pedantic-errors`. Such bundles need GNU C or
/// `-std=c23`.
pub fn render_source(table: &AssetTable, options: &SourceOptions) -> String {
    let mut out = PREAMBLE_C.render(&PreambleVars {
        header_include: &options.header_include,
    });

    for asset in table.assets() {
        let _ = writeln!(out, "static const uint8_t {}[] = {{", asset.array_name());
        out.push_str(&encode_bytes(&asset.body));
        out.push_str("\n};\n\n");
    }

    out.push_str("static const web_asset_t k_assets[] = {\n");
    for route in table.routes() {
        let asset = table.asset_for(route);
        let _ = writeln!(
            out,
            "    {{.path = {}, .content_type = {}, .body = {}, .body_length = {}u}},",
            c_string_literal(&route.path),
            c_string_literal(route.content_type),
            asset.array_name(),
            asset.body.len(),
        );
    }
    out.push_str("};\n\n");

    out.push_str(&LOOKUP_C.render(&NoVars));
    out
}

/// Quote a string as a C string literal.
///
/// Quotes, backslashes and non-printable bytes are escaped. Octal escapes
/// are always three digits so a following digit cannot extend them.
pub fn c_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for byte in value.bytes() {
        match byte {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            // Keep "??" from forming trigraphs
            b'?' => out.push_str("\\?"),
            0x20..=0x7e => out.push(byte as char),
            _ => {
                let _ = write!(out, "\\{byte:03o}");
            }
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::Asset;

    fn sample_table() -> AssetTable {
        AssetTable::build(vec![
            Asset::from_bytes("index.html", b"<h1>hi</h1>".to_vec()),
            Asset::from_bytes("style.css", b"body{}".to_vec()),
        ])
        .unwrap()
    }

    #[test]
    fn test_render_exact_output() {
        let text = render_source(&sample_table(), &SourceOptions::default());
        let expected = r##"#include "web/web_assets.h"

#include <stddef.h>
#include <stdint.h>
#include <string.h>

typedef struct {
  const char *path;
  const char *content_type;
  const uint8_t *body;
  size_t body_length;
} web_asset_t;

static const uint8_t k_asset_index_html[] = {
    0x3c, 0x68, 0x31, 0x3e, 0x68, 0x69, 0x3c, 0x2f, 0x68, 0x31, 0x3e,
};

static const uint8_t k_asset_style_css[] = {
    0x62, 0x6f, 0x64, 0x79, 0x7b, 0x7d,
};

static const web_asset_t k_assets[] = {
    {.path = "/index.html", .content_type = "text/html; charset=utf-8", .body = k_asset_index_html, .body_length = 11u},
    {.path = "/", .content_type = "text/html; charset=utf-8", .body = k_asset_index_html, .body_length = 11u},
    {.path = "/style.css", .content_type = "text/css; charset=utf-8", .body = k_asset_style_css, .body_length = 6u},
};

bool web_assets_get(const char *request_path, const char **content_type,
                    const uint8_t **body, size_t *body_length) {
  size_t index = 0u;

  if (request_path == NULL || content_type == NULL || body == NULL ||
      body_length == NULL) {
    return false;
  }

  for (index = 0u; index < sizeof(k_assets) / sizeof(k_assets[0]); ++index) {
    if (strcmp(request_path, k_assets[index].path) == 0) {
      *content_type = k_assets[index].content_type;
      *body = k_assets[index].body;
      *body_length = k_assets[index].body_length;
      return true;
    }
  }

  return false;
}
"##;
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_empty_asset() {
        let table = AssetTable::build(vec![Asset::from_bytes("index.html", vec![])]).unwrap();
        let text = render_source(&table, &SourceOptions::default());

        assert!(text.contains("static const uint8_t k_asset_index_html[] = {\n\n};\n"));
        assert!(text.contains(".body = k_asset_index_html, .body_length = 0u}"));
    }

    #[test]
    fn test_render_custom_header_include() {
        let options = SourceOptions {
            header_include: "generated/assets.h".to_string(),
        };
        let text = render_source(&sample_table(), &options);
        assert!(text.starts_with("#include \"generated/assets.h\"\n"));
    }

    #[test]
    fn test_render_deterministic() {
        let table = sample_table();
        let options = SourceOptions::default();
        assert_eq!(render_source(&table, &options), render_source(&table, &options));
    }

    #[test]
    fn test_c_string_literal() {
        assert_eq!(c_string_literal("/index.html"), "\"/index.html\"");
        assert_eq!(c_string_literal("/a\"b"), "\"/a\\\"b\"");
        assert_eq!(c_string_literal("/a\\b"), "\"/a\\\\b\"");
        assert_eq!(c_string_literal("/??=.txt"), "\"/\\?\\?=.txt\"");
        assert_eq!(c_string_literal("/\n1"), "\"/\\0121\"");
        assert_eq!(c_string_literal("/ü"), "\"/\\303\\274\"");
    }
}
