//! Document body to HTML fragment conversion.

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd, TextMergeStream};

use crate::autolink::push_linked;
use crate::error::RenderError;
use crate::heading::with_heading_ids;
use crate::highlight::{Highlighter, fence_language};
use crate::links::{markdown_route, rewrite_links};

/// Markdown to HTML conversion engine.
///
/// Built once at startup and shared read-only across requests. Supports
/// GitHub Flavored Markdown (tables, strikethrough, task lists, bare URL
/// links), highlighted fenced code, heading anchors, hard line wraps and
/// raw HTML pass-through.
pub struct HtmlRenderer {
    highlighter: Highlighter,
}

impl HtmlRenderer {
    /// Create a renderer using the named bundled highlight theme.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnknownTheme`] if no bundled theme has that name.
    pub fn new(theme: &str) -> Result<Self, RenderError> {
        Ok(Self {
            highlighter: Highlighter::new(theme)?,
        })
    }

    fn parser_options() -> Options {
        Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_GFM
    }

    /// Convert a document body to an HTML fragment.
    ///
    /// Empty input yields an empty fragment. Byte sequences that are not
    /// valid UTF-8 are replaced with U+FFFD.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Highlight`] if a code block cannot be
    /// highlighted.
    pub fn render(&self, body: &[u8]) -> Result<String, RenderError> {
        self.render_with(body, None)
    }

    /// Convert a document body and rewrite its markdown links to routes.
    ///
    /// `current_dir` is the document's directory relative to the corpus
    /// root, `""` for top-level documents. Only link destinations and
    /// `href` attributes of raw HTML are rewritten; text and code that
    /// merely mention a `.md` file are left alone.
    ///
    /// # Errors
    ///
    /// Same as [`HtmlRenderer::render`].
    pub fn render_document(&self, body: &[u8], current_dir: &str) -> Result<String, RenderError> {
        self.render_with(body, Some(current_dir))
    }

    fn render_with(&self, body: &[u8], current_dir: Option<&str>) -> Result<String, RenderError> {
        let markdown = String::from_utf8_lossy(body);
        if markdown.is_empty() {
            return Ok(String::new());
        }

        let parser = TextMergeStream::new(Parser::new_ext(&markdown, Self::parser_options()));
        let events = self.transform(parser, current_dir)?;
        let events = with_heading_ids(events.into_iter());

        let mut html = String::with_capacity(markdown.len() * 3 / 2);
        pulldown_cmark::html::push_html(&mut html, events.into_iter());
        Ok(html)
    }

    /// Highlight code blocks, link bare URLs and turn soft breaks hard.
    ///
    /// With a `current_dir`, markdown link targets are mapped to routes.
    fn transform<'a>(
        &self,
        events: impl Iterator<Item = Event<'a>>,
        current_dir: Option<&str>,
    ) -> Result<Vec<Event<'a>>, RenderError> {
        let mut out = Vec::new();
        // Language and buffered source of the open code block.
        let mut code: Option<(String, String)> = None;
        // Nesting depth of links and images; bare URLs there stay text.
        let mut link_depth = 0usize;

        for event in events {
            if let Some((lang, source)) = code.as_mut() {
                match event {
                    Event::Text(text) => source.push_str(&text),
                    Event::End(TagEnd::CodeBlock) => {
                        let html = self.highlighter.highlight(source, lang)?;
                        out.push(Event::Html(CowStr::from(html)));
                        code = None;
                    }
                    _ => {}
                }
                continue;
            }

            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => fence_language(&info).to_owned(),
                        CodeBlockKind::Indented => String::new(),
                    };
                    code = Some((lang, String::new()));
                }
                Event::Start(Tag::Link {
                    link_type,
                    dest_url,
                    title,
                    id,
                }) => {
                    link_depth += 1;
                    out.push(Event::Start(Tag::Link {
                        link_type,
                        dest_url: relink(dest_url, current_dir),
                        title,
                        id,
                    }));
                }
                Event::Start(Tag::Image { .. }) => {
                    link_depth += 1;
                    out.push(event);
                }
                Event::End(TagEnd::Link | TagEnd::Image) => {
                    link_depth = link_depth.saturating_sub(1);
                    out.push(event);
                }
                Event::Html(html) => out.push(Event::Html(relink_html(html, current_dir))),
                Event::InlineHtml(html) => {
                    out.push(Event::InlineHtml(relink_html(html, current_dir)));
                }
                Event::Text(text) if link_depth == 0 => push_linked(text, &mut out),
                Event::SoftBreak => out.push(Event::HardBreak),
                other => out.push(other),
            }
        }

        Ok(out)
    }
}

/// Map a link destination onto its route when it names a local document.
fn relink<'a>(url: CowStr<'a>, current_dir: Option<&str>) -> CowStr<'a> {
    match current_dir.and_then(|dir| markdown_route(&url, dir)) {
        Some(route) => CowStr::from(route),
        None => url,
    }
}

/// Rewrite `href` attributes inside a raw HTML event.
fn relink_html<'a>(html: CowStr<'a>, current_dir: Option<&str>) -> CowStr<'a> {
    match current_dir {
        Some(dir) => CowStr::from(rewrite_links(&html, dir)),
        None => html,
    }
}
