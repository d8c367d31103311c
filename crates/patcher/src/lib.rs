// Idempotent insertion of the favicon <link> into HTML entry points.
// Plain text matching, no HTML parsing: the document is left untouched
// unless a suitable anchor is found.

use favicon_kit_core::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Indentation used when the anchor line has none
const DEFAULT_INDENT: &str = "    ";
const HEAD_CLOSE: &str = "</head>";

/// Any existing icon link, single or double quoted
static ICON_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"rel=['"]icon['"]"#).expect("valid icon link pattern"));

/// A `<link` tag opening a line, capturing its horizontal indentation
static LINK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([^\S\n]*)<link\b").expect("valid link line pattern"));

/// The exact tag inserted for `href`
pub fn favicon_link_tag(href: &str) -> String {
    format!(r#"<link rel="icon" type="image/svg+xml" href="{}">"#, href)
}

/// Whether the document already declares an icon anywhere
pub fn has_favicon_link(content: &str) -> bool {
    ICON_LINK.is_match(content)
}

/// Compute the patched document, or `None` when nothing should change.
///
/// The tag goes on its own line before the first line starting with
/// `<link`, reusing that line's indentation. Without such a line it goes
/// before the first `</head>`. Documents with neither are left alone.
pub fn plan_patch(content: &str, href: &str) -> Option<String> {
    if has_favicon_link(content) {
        return None;
    }

    let tag = favicon_link_tag(href);

    if let Some(caps) = LINK_LINE.captures(content) {
        let whole = caps.get(0)?;
        let indent = caps.get(1).map_or("", |m| m.as_str());
        let indent = if indent.is_empty() { DEFAULT_INDENT } else { indent };

        let at = whole.start();
        let mut patched = String::with_capacity(content.len() + indent.len() + tag.len() + 1);
        patched.push_str(&content[..at]);
        patched.push_str(indent);
        patched.push_str(&tag);
        patched.push('\n');
        patched.push_str(&content[at..]);
        return Some(patched);
    }

    if content.contains(HEAD_CLOSE) {
        let insertion = format!("{}{}\n{}", DEFAULT_INDENT, tag, HEAD_CLOSE);
        return Some(content.replacen(HEAD_CLOSE, &insertion, 1));
    }

    None
}

/// Ensure `path` links the favicon at `href`, rewriting it only when needed.
///
/// Returns whether the file was modified.
pub fn ensure_favicon_link(path: &Path, href: &str) -> Result<bool> {
    let content = fs::read_to_string(path)?;

    match plan_patch(&content, href) {
        Some(patched) => {
            fs::write(path, patched)?;
            tracing::info!(path = %path.display(), href, "inserted favicon link");
            Ok(true)
        }
        None => {
            tracing::debug!(path = %path.display(), "favicon link present or no anchor found");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const HREF: &str = "images/favicon.svg";

    /// Helper to write an HTML fixture and return its path
    fn write_html(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("index.html");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_link_tag_format() {
        assert_eq!(
            favicon_link_tag("favicon.svg"),
            r#"<link rel="icon" type="image/svg+xml" href="favicon.svg">"#
        );
    }

    #[test]
    fn test_detects_existing_icon_with_either_quote() {
        assert!(has_favicon_link(r#"<link rel="icon" href="x.ico">"#));
        assert!(has_favicon_link("<link rel='icon' href='x.ico'>"));
        assert!(has_favicon_link("<body>rel=\"icon'</body>"));

        assert!(!has_favicon_link(r#"<link rel="shortcut icon" href="x.ico">"#));
        assert!(!has_favicon_link(r#"<link REL="icon">"#));
        assert!(!has_favicon_link(r#"<link rel="Icon">"#));
    }

    #[test]
    fn test_inserts_before_first_link_line_with_its_indent() {
        let html = "<head>\n  <link rel=\"stylesheet\" href=\"a.css\">\n</head>";
        let patched = plan_patch(html, HREF).unwrap();

        assert_eq!(
            patched,
            "<head>\n  <link rel=\"icon\" type=\"image/svg+xml\" href=\"images/favicon.svg\">\n  <link rel=\"stylesheet\" href=\"a.css\">\n</head>"
        );
    }

    #[test]
    fn test_unindented_link_line_gets_default_indent() {
        let html = "<head>\n<link rel=\"stylesheet\" href=\"a.css\">\n</head>";
        let patched = plan_patch(html, HREF).unwrap();

        assert!(patched.contains(
            "\n    <link rel=\"icon\" type=\"image/svg+xml\" href=\"images/favicon.svg\">\n<link rel=\"stylesheet\""
        ));
    }

    #[test]
    fn test_tab_indentation_is_reused() {
        let html = "<head>\n\t\t<link rel=\"preconnect\" href=\"https://x\">\n</head>";
        let patched = plan_patch(html, HREF).unwrap();

        assert!(patched.contains("\n\t\t<link rel=\"icon\""));
    }

    #[test]
    fn test_only_first_link_line_is_used() {
        let html = "<head>\n  <link rel=\"a\">\n    <link rel=\"b\">\n</head>";
        let patched = plan_patch(html, HREF).unwrap();

        assert_eq!(patched.matches("rel=\"icon\"").count(), 1);
        assert!(patched.contains("<head>\n  <link rel=\"icon\""));
    }

    #[test]
    fn test_inline_link_is_not_an_anchor() {
        let html = "<head><link rel=\"stylesheet\" href=\"a.css\">\n</head>";
        let patched = plan_patch(html, HREF).unwrap();

        assert!(patched.starts_with("<head><link rel=\"stylesheet\""));
        assert!(patched.ends_with("    <link rel=\"icon\" type=\"image/svg+xml\" href=\"images/favicon.svg\">\n</head>"));
    }

    #[test]
    fn test_linked_word_is_not_an_anchor() {
        let html = "<head>\n<linkage>\n</head>";
        let patched = plan_patch(html, HREF).unwrap();

        assert_eq!(
            patched,
            "<head>\n<linkage>\n    <link rel=\"icon\" type=\"image/svg+xml\" href=\"images/favicon.svg\">\n</head>"
        );
    }

    #[test]
    fn test_falls_back_to_head_close() {
        let html = "<head>\n</head>";
        let patched = plan_patch(html, HREF).unwrap();

        assert_eq!(
            patched,
            "<head>\n    <link rel=\"icon\" type=\"image/svg+xml\" href=\"images/favicon.svg\">\n</head>"
        );
    }

    #[test]
    fn test_head_close_fallback_inserts_once() {
        let html = "<head></head><template><head></head></template>";
        let patched = plan_patch(html, HREF).unwrap();

        assert_eq!(patched.matches("rel=\"icon\"").count(), 1);
        assert!(patched.starts_with("<head>    <link rel=\"icon\""));
    }

    #[test]
    fn test_no_anchor_is_no_change() {
        assert_eq!(plan_patch("<html><body>hi</body></html>", HREF), None);
        assert_eq!(plan_patch("", HREF), None);
    }

    #[test]
    fn test_crlf_document_keeps_other_lines() {
        let html = "<head>\r\n  <link rel=\"stylesheet\">\r\n</head>\r\n";
        let patched = plan_patch(html, HREF).unwrap();

        assert!(patched.starts_with("<head>\r\n  <link rel=\"icon\""));
        assert!(patched.ends_with("\n  <link rel=\"stylesheet\">\r\n</head>\r\n"));
    }

    #[test]
    fn test_ensure_writes_only_when_changed() {
        let dir = TempDir::new().unwrap();
        let path = write_html(&dir, "<head>\n</head>\n<body></body>\n");

        assert!(ensure_favicon_link(&path, HREF).unwrap());
        let first = fs::read_to_string(&path).unwrap();
        assert!(first.contains(&favicon_link_tag(HREF)));
        assert!(first.ends_with("</head>\n<body></body>\n"));

        assert!(!ensure_favicon_link(&path, HREF).unwrap());
        let second = fs::read_to_string(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_existing_icon_file_is_untouched() {
        let dir = TempDir::new().unwrap();
        let original = "<head>\n  <link rel='icon' href='old.png'>\n</head>";
        let path = write_html(&dir, original);

        assert!(!ensure_favicon_link(&path, HREF).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_unsuitable_file_is_untouched() {
        let dir = TempDir::new().unwrap();
        let original = "just some text\n";
        let path = write_html(&dir, original);

        assert!(!ensure_favicon_link(&path, HREF).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("index.html");
        assert!(ensure_favicon_link(&missing, HREF).is_err());
    }
}
