//! Shared helpers for HTML output and markdown file names.

/// Extension of markdown documents, compared case-insensitively.
const MD_EXTENSION: &str = ".md";

/// Escape the HTML-unsafe characters `&`, `<`, `>`, `"` and `'`.
///
/// Safe for both text content and quoted attribute values.
///
/// # Examples
///
/// ```
/// use mdoc_renderer::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Check whether a path or name ends in `.md`, ignoring case.
#[must_use]
pub(crate) fn has_md_extension(path: &str) -> bool {
    path.len() >= MD_EXTENSION.len()
        && path
            .get(path.len() - MD_EXTENSION.len()..)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(MD_EXTENSION))
}

/// Remove a trailing `.md` (any case) from a path.
#[must_use]
pub(crate) fn strip_md_extension(path: &str) -> &str {
    if has_md_extension(path) {
        &path[..path.len() - MD_EXTENSION.len()]
    } else {
        path
    }
}
