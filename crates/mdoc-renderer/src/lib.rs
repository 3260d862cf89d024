//! Markdown to HTML conversion for mdoc.
//!
//! This crate turns a document body into an HTML fragment and rewrites
//! references to sibling markdown files into extension-free routes.
//!
//! # Architecture
//!
//! - [`HtmlRenderer`]: process-wide conversion engine built once at startup.
//!   Wraps pulldown-cmark with GitHub Flavored Markdown extensions, syntect
//!   highlighting for fenced code, automatic heading anchors and hard wraps.
//! - [`route_for`]: maps a `*.md` link destination onto a server route
//!   relative to the document's directory. Applied to markdown link events
//!   and, through [`rewrite_links`], to `href` attributes of raw HTML.
//!
//! # Example
//!
//! ```
//! use mdoc_renderer::{DEFAULT_THEME, HtmlRenderer};
//!
//! let renderer = HtmlRenderer::new(DEFAULT_THEME).unwrap();
//! let html = renderer
//!     .render_document(b"See [setup](./setup.md).", "guides")
//!     .unwrap();
//! assert!(html.contains(r#"href="/guides/setup""#));
//! ```

mod autolink;
mod error;
mod heading;
mod highlight;
mod html;
mod links;
mod util;

pub use error::RenderError;
pub use highlight::DEFAULT_THEME;
pub use html::HtmlRenderer;
pub use links::{rewrite_links, route_for};
pub use util::escape_html;
