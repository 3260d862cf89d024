//! Automatic heading anchor ids.

use std::collections::{HashMap, HashSet};

use pulldown_cmark::{CowStr, Event, Tag, TagEnd};

/// Fallback id for headings whose text yields an empty slug.
const EMPTY_SLUG: &str = "heading";

/// Generator of document-unique heading ids.
///
/// Repeated slugs get a numeric suffix: `intro`, `intro-1`, `intro-2`.
#[derive(Debug, Default)]
pub(crate) struct HeadingIds {
    used: HashSet<String>,
    suffixes: HashMap<String, usize>,
}

impl HeadingIds {
    /// Return a unique id for heading text.
    pub(crate) fn unique(&mut self, text: &str) -> String {
        let base = slugify(text);
        if self.used.insert(base.clone()) {
            return base;
        }
        let suffix = self.suffixes.entry(base.clone()).or_insert(0);
        loop {
            *suffix += 1;
            let candidate = format!("{base}-{suffix}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

/// Convert heading text into an anchor slug.
///
/// Letters and digits are lowercased, whitespace becomes `-`, `-` and `_`
/// are kept, everything else is dropped.
pub(crate) fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.trim().chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if c.is_whitespace() {
            slug.push('-');
        } else if c == '-' || c == '_' {
            slug.push(c);
        }
    }
    if slug.is_empty() {
        EMPTY_SLUG.to_owned()
    } else {
        slug
    }
}

/// Collect events, filling in missing heading ids from heading text.
pub(crate) fn with_heading_ids<'a>(events: impl Iterator<Item = Event<'a>>) -> Vec<Event<'a>> {
    let mut ids = HeadingIds::default();
    let mut out = Vec::new();
    // Index of the open heading's start event and its text so far.
    let mut open: Option<(usize, String)> = None;

    for event in events {
        match &event {
            Event::Start(Tag::Heading { .. }) => open = Some((out.len(), String::new())),
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, buf)) = open.as_mut() {
                    buf.push_str(text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((start, text)) = open.take()
                    && let Some(Event::Start(Tag::Heading { id, .. })) = out.get_mut(start)
                {
                    id.get_or_insert_with(|| CowStr::from(ids.unique(&text)));
                }
            }
            _ => {}
        }
        out.push(event);
    }

    out
}
