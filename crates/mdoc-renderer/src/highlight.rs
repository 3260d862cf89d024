//! Fenced code block highlighting.

use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::error::RenderError;
use crate::util::escape_html;

/// Color theme used when none is configured.
pub const DEFAULT_THEME: &str = "base16-mocha.dark";

/// Syntax highlighter holding loaded syntax definitions and one theme.
pub(crate) struct Highlighter {
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl Highlighter {
    /// Load bundled syntaxes and the named bundled theme.
    pub(crate) fn new(theme_name: &str) -> Result<Self, RenderError> {
        let mut themes = ThemeSet::load_defaults();
        let theme = themes
            .themes
            .remove(theme_name)
            .ok_or_else(|| RenderError::UnknownTheme(theme_name.to_owned()))?;

        Ok(Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            theme,
        })
    }

    /// Render a code block, highlighted when `lang` names a known syntax.
    ///
    /// Unknown or empty languages produce an escaped plain block carrying a
    /// `language-*` class, so client-side tooling can still pick it up.
    pub(crate) fn highlight(&self, code: &str, lang: &str) -> Result<String, RenderError> {
        let syntax = if lang.is_empty() {
            None
        } else {
            self.syntaxes.find_syntax_by_token(lang)
        };

        match syntax {
            Some(syntax) => Ok(highlighted_html_for_string(
                code,
                &self.syntaxes,
                syntax,
                &self.theme,
            )?),
            None => Ok(plain_block(code, lang)),
        }
    }
}

/// Escaped code block without highlighting.
fn plain_block(code: &str, lang: &str) -> String {
    let code = escape_html(code);
    if lang.is_empty() {
        format!("<pre><code>{code}</code></pre>\n")
    } else {
        let lang = escape_html(lang);
        format!("<pre><code class=\"language-{lang}\">{code}</code></pre>\n")
    }
}

/// Language token from a fence info string.
///
/// The first word is the language; anything after whitespace or a comma is
/// ignored (` ```rust,ignore ` and ` ```python title="x" ` both work).
pub(crate) fn fence_language(info: &str) -> &str {
    info.split(|c: char| c.is_whitespace() || c == ',')
        .find(|s| !s.is_empty())
        .unwrap_or("")
}
