//! Leading metadata block extraction for mdoc documents.
//!
//! A document may start with a block delimited by `---` lines:
//!
//! ```text
//! ---
//! title: "Getting Started"
//! author: Jane
//! ---
//! # Body starts here
//! ```
//!
//! Only `title` and `author` are recognized. Anything else in the block is
//! ignored, and a block that is missing or never closed leaves the document
//! untouched. Extraction never fails.
//!
//! # Example
//!
//! ```
//! use mdoc_meta::extract_metadata;
//!
//! let (meta, body) = extract_metadata(b"---\ntitle: Guide\n---\n# Hello\n");
//! assert_eq!(meta.title.as_deref(), Some("Guide"));
//! assert_eq!(body, b"# Hello\n");
//! ```

/// Delimiter line opening and closing a metadata block.
const DELIMITER: &[u8] = b"---";

/// Fields recognized in a document's metadata block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Metadata {
    /// Page title.
    pub title: Option<String>,
    /// Document author.
    pub author: Option<String>,
}

impl Metadata {
    /// Check if no recognized field was set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none()
    }

    /// Parse `key: value` lines of a metadata block.
    fn parse_block(block: &str) -> Self {
        let mut meta = Self::default();

        for line in block.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };

            let value = unquote(value.trim());
            let value = (!value.is_empty()).then(|| value.to_owned());

            match key.trim().to_lowercase().as_str() {
                "title" => meta.title = value,
                "author" => meta.author = value,
                _ => {}
            }
        }

        meta
    }
}

/// Split a leading metadata block off document content.
///
/// Returns the parsed metadata and the content following the closing
/// delimiter line. When the content does not open with a `---` line, or the
/// block is never closed, returns empty metadata and the content unchanged.
#[must_use]
pub fn extract_metadata(content: &[u8]) -> (Metadata, &[u8]) {
    let Some(block_start) = opening_delimiter_len(content) else {
        return (Metadata::default(), content);
    };
    let Some((block_end, body_start)) = find_closing_delimiter(content, block_start) else {
        return (Metadata::default(), content);
    };

    let block = String::from_utf8_lossy(&content[block_start..block_end]);
    (Metadata::parse_block(&block), &content[body_start..])
}

/// Length of the opening delimiter line, terminator included.
fn opening_delimiter_len(content: &[u8]) -> Option<usize> {
    if content.starts_with(b"---\n") {
        Some(4)
    } else if content.starts_with(b"---\r\n") {
        Some(5)
    } else {
        None
    }
}

/// Find the first line at or after `from` that is exactly `---`.
///
/// Returns the offset where that line starts (end of the block text) and the
/// offset just past its terminator (start of the body).
fn find_closing_delimiter(content: &[u8], from: usize) -> Option<(usize, usize)> {
    let mut line_start = from;
    loop {
        let rest = content.get(line_start..)?;
        if rest.is_empty() {
            return None;
        }

        let (line, next) = match rest.iter().position(|&b| b == b'\n') {
            Some(pos) => (&rest[..pos], line_start + pos + 1),
            None => (rest, content.len()),
        };

        if line.strip_suffix(b"\r").unwrap_or(line) == DELIMITER {
            return Some((line_start, next));
        }
        line_start = next;
    }
}

/// Strip one layer of matching single or double quotes.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(&first), Some(&last))
            if bytes.len() >= 2 && first == last && (first == b'"' || first == b'\'') =>
        {
            &value[1..value.len() - 1]
        }
        _ => value,
    }
}
