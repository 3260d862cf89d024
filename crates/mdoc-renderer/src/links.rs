//! Rewriting of markdown file references into server routes.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::util::{has_md_extension, strip_md_extension};

/// `href` attribute whose quoted value ends in `.md` (any case).
///
/// Group 1 keeps the attribute name and `=`, group 2 or 3 holds the target
/// for double or single quotes.
static HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(\bhref\s*=\s*)(?:"([^"]*\.md)"|'([^']*\.md)')"#).unwrap()
});

/// URI scheme such as `https:` or `mailto:`.
static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*:").unwrap());

/// Rewrite `href` targets ending in `.md` into extension-free routes.
///
/// Relative targets are resolved against `current_dir`, the referring
/// document's directory relative to the corpus root. Targets with a URI
/// scheme or a `//` network prefix are left untouched, as is everything
/// else in the fragment.
///
/// # Examples
///
/// ```
/// use mdoc_renderer::rewrite_links;
///
/// assert_eq!(
///     rewrite_links(r#"<a href="./file.md">x</a>"#, "docs"),
///     r#"<a href="/docs/file">x</a>"#
/// );
/// assert_eq!(
///     rewrite_links(r#"<a href="https://example.com/page.md">x</a>"#, "docs"),
///     r#"<a href="https://example.com/page.md">x</a>"#
/// );
/// ```
#[must_use]
pub fn rewrite_links(html: &str, current_dir: &str) -> String {
    HREF_RE
        .replace_all(html, |caps: &Captures<'_>| {
            let (target, quote) = match (caps.get(2), caps.get(3)) {
                (Some(m), _) => (m.as_str(), '"'),
                (None, Some(m)) => (m.as_str(), '\''),
                (None, None) => return caps[0].to_owned(),
            };
            if is_external(target) {
                return caps[0].to_owned();
            }
            format!("{}{quote}{}{quote}", &caps[1], route_for(target, current_dir))
        })
        .into_owned()
}

/// Route for a link destination naming a local markdown document.
///
/// Returns `None` for external targets and anything not ending in `.md`.
pub(crate) fn markdown_route(target: &str, current_dir: &str) -> Option<String> {
    (has_md_extension(target) && !is_external(target)).then(|| route_for(target, current_dir))
}

/// Compute the route a markdown reference points at.
///
/// A leading `/` makes the target corpus-root-relative and it is taken as
/// is. Otherwise it is joined onto `current_dir` and `.`/`..` segments are
/// folded away; `..` never climbs above the root.
///
/// # Examples
///
/// ```
/// use mdoc_renderer::route_for;
///
/// assert_eq!(route_for("a/../b.md", ""), "/b");
/// assert_eq!(route_for("/guide/intro.MD", "ignored"), "/guide/intro");
/// ```
#[must_use]
pub fn route_for(target: &str, current_dir: &str) -> String {
    let resolved = match target.strip_prefix('/') {
        Some(rooted) => rooted.to_owned(),
        None => clean_join(current_dir, target),
    };
    format!("/{}", strip_md_extension(&resolved))
}

/// Join `relative` onto `base` and normalize the result.
fn clean_join(base: &str, relative: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in base.split('/').chain(relative.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }
    segments.join("/")
}

/// Check whether a target has a scheme or a network-path prefix.
fn is_external(target: &str) -> bool {
    if target.starts_with("//") {
        return true;
    }
    // A colon after the first slash belongs to the path, not a scheme.
    let head = target.split('/').next().unwrap_or(target);
    SCHEME_RE.is_match(head)
}
