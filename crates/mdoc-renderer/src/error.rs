//! Conversion error type.

/// Error returned when a document cannot be converted to HTML.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Syntax highlighting of a code block failed.
    #[error("syntax highlighting failed: {0}")]
    Highlight(#[from] syntect::Error),
    /// Configured color theme is not bundled.
    #[error("unknown highlight theme: {0}")]
    UnknownTheme(String),
}
