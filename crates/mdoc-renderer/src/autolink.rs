//! Bare URL detection in text runs.

use std::sync::LazyLock;

use pulldown_cmark::{CowStr, Event, LinkType, Tag, TagEnd};
use regex::Regex;

/// `http(s)://` or `www.` URL. Trailing punctuation is left out of the match.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(?:https?://|www\.)[^\s<>"]*[^\s<>".,:;'!?*_~)\]]"#).unwrap()
});

/// Push a text run onto `out`, turning bare URLs into links.
///
/// Text without URLs is pushed unchanged as a single event.
pub(crate) fn push_linked<'a>(text: CowStr<'a>, out: &mut Vec<Event<'a>>) {
    if !URL_RE.is_match(&text) {
        out.push(Event::Text(text));
        return;
    }

    let mut last = 0;
    for m in URL_RE.find_iter(&text) {
        if m.start() > last {
            out.push(Event::Text(CowStr::from(text[last..m.start()].to_owned())));
        }

        let url = m.as_str();
        let dest = if url.len() >= 4 && url[..4].eq_ignore_ascii_case("www.") {
            format!("http://{url}")
        } else {
            url.to_owned()
        };
        out.push(Event::Start(Tag::Link {
            link_type: LinkType::Autolink,
            dest_url: CowStr::from(dest),
            title: CowStr::Borrowed(""),
            id: CowStr::Borrowed(""),
        }));
        out.push(Event::Text(CowStr::from(url.to_owned())));
        out.push(Event::End(TagEnd::Link));

        last = m.end();
    }
    if last < text.len() {
        out.push(Event::Text(CowStr::from(text[last..].to_owned())));
    }
}
