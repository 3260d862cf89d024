//! Colored terminal output on stderr.

use std::path::Path;

use console::{Style, Term};

pub(crate) struct Output {
    term: Term,
    red: Style,
    dim: Style,
    cyan_bold: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            red: Style::new().red(),
            dim: Style::new().dim(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    /// Print the startup banner: site URL followed by what is being served.
    pub(crate) fn serving(&self, url: &str, source_dir: &Path, title: &str) {
        let _ = self.term.write_line(&format!(
            "Serving {} at {}",
            title,
            self.cyan_bold.apply_to(url)
        ));
        let _ = self.term.write_line(&format!(
            "{} {}",
            self.dim.apply_to("Source directory:"),
            source_dir.display()
        ));
        let _ = self
            .term
            .write_line(&self.dim.apply_to("Press Ctrl-C to stop").to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }
}
