//! C identifier derivation from file names.

/// Prefix for identifiers that would otherwise start with a digit.
const DIGIT_PREFIX: &str = "f_";

/// Identifier used when sanitizing leaves nothing behind.
const FALLBACK: &str = "asset";

/// Map a file name to a valid C identifier fragment.
///
/// Every character outside `[0-9a-zA-Z_]` becomes `_`, a leading digit
/// gets the `f_` prefix, and an empty name falls back to `asset`.
///
/// Distinct names can map to the same identifier (`a.js` and `a_js`);
/// collisions are rejected when the table is built.
///
/// # Examples
///
/// ```ignore
/// sanitize_identifier("index.html")  -> "index_html"
/// sanitize_identifier("404.html")    -> "f_404_html"
/// sanitize_identifier("")            -> "asset"
/// ```
pub fn sanitize_identifier(name: &str) -> String {
    let ident: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if ident.is_empty() {
        return FALLBACK.to_string();
    }

    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        format!("{DIGIT_PREFIX}{ident}")
    } else {
        ident
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_plain() {
        assert_eq!(sanitize_identifier("index.html"), "index_html");
        assert_eq!(sanitize_identifier("app-v2.min.js"), "app_v2_min_js");
        assert_eq!(sanitize_identifier("already_ok"), "already_ok");
    }

    #[test]
    fn test_sanitize_leading_digit() {
        assert_eq!(sanitize_identifier("404.html"), "f_404_html");
        assert_eq!(sanitize_identifier("0"), "f_0");
    }

    #[test]
    fn test_sanitize_empty() {
        assert_eq!(sanitize_identifier(""), "asset");
    }

    #[test]
    fn test_sanitize_non_ascii() {
        // One underscore per character, not per byte
        assert_eq!(sanitize_identifier("ü.css"), "__css");
        assert_eq!(sanitize_identifier("日本.txt"), "___txt");
    }

    #[test]
    fn test_sanitize_collision() {
        assert_eq!(sanitize_identifier("a.js"), sanitize_identifier("a_js"));
    }

    #[test]
    fn test_sanitize_deterministic() {
        for name in ["style.css", "1.png", "", "a b c"] {
            assert_eq!(sanitize_identifier(name), sanitize_identifier(name));
        }
    }
}
