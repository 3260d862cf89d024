//! Navigation tree rendering as nested HTML lists.

use std::fmt::Write;

use mdoc_renderer::escape_html;

use crate::navigation::NavNode;

/// Render a navigation tree as a nested `<ul class="file-tree">` list.
///
/// The root node itself is not rendered, only its children. Names and
/// routes are HTML-escaped.
#[must_use]
pub fn render_tree(root: &NavNode) -> String {
    let mut out = String::from("<ul class=\"file-tree\">\n");
    for child in root.children() {
        render_node(child, &mut out);
    }
    out.push_str("</ul>\n");
    out
}

fn render_node(node: &NavNode, out: &mut String) {
    match node {
        NavNode::Directory { name, children } => {
            let _ = writeln!(out, "<li><span class=\"folder\">{}</span>", escape_html(name));
            if !children.is_empty() {
                out.push_str("<ul>\n");
                for child in children {
                    render_node(child, out);
                }
                out.push_str("</ul>\n");
            }
            out.push_str("</li>\n");
        }
        NavNode::Document { name, route } => {
            let _ = writeln!(
                out,
                "<li><a href=\"{}\" class=\"file\">{}</a></li>",
                escape_html(route),
                escape_html(name)
            );
        }
    }
}
