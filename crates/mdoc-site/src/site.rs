//! Site facade combining storage, navigation and page rendering.

use std::sync::Arc;

use mdoc_meta::extract_metadata;
use mdoc_renderer::{HtmlRenderer, RenderError};
use mdoc_storage::{Storage, StorageError, StorageErrorKind};

use crate::navigation::{NavNode, build_tree};
use crate::tree_html::render_tree;

/// Result of rendering a document page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRenderResult {
    /// URL path of the document without leading slash (e.g., "guide/setup").
    pub path: String,
    /// Page title: metadata title, else the last URL path segment.
    pub title: String,
    /// Author from the metadata block.
    pub author: Option<String>,
    /// Rendered HTML fragment with links rewritten to routes.
    pub html: String,
}

/// Error returned by [`Site`] operations.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Document could not be found or read, or the corpus could not be scanned.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// Document could not be converted to HTML.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl SiteError {
    /// Check if the error means the requested document does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(e) if e.kind == StorageErrorKind::NotFound)
    }

    /// Check if the error comes from a malformed request path.
    #[must_use]
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Self::Storage(e) if e.kind == StorageErrorKind::InvalidPath)
    }
}

/// Documentation site over a storage backend.
///
/// Stateless: every call scans or reads storage afresh, so the site always
/// reflects the current corpus. Cheap to share behind an `Arc`.
///
/// # Example
///
/// ```no_run
/// use std::path::PathBuf;
/// use std::sync::Arc;
///
/// use mdoc_renderer::{DEFAULT_THEME, HtmlRenderer};
/// use mdoc_site::Site;
/// use mdoc_storage::FsStorage;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let storage = Arc::new(FsStorage::new(PathBuf::from("docs")));
/// let renderer = Arc::new(HtmlRenderer::new(DEFAULT_THEME)?);
/// let site = Site::new(storage, renderer);
///
/// let index = site.index_html()?;
/// let page = site.render("guide/setup")?;
/// # Ok(())
/// # }
/// ```
pub struct Site {
    storage: Arc<dyn Storage>,
    renderer: Arc<HtmlRenderer>,
}

impl Site {
    /// Create a site reading from `storage` and rendering with `renderer`.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, renderer: Arc<HtmlRenderer>) -> Self {
        Self { storage, renderer }
    }

    /// Scan the corpus and build the navigation tree.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] if scanning fails.
    pub fn navigation(&self) -> Result<NavNode, SiteError> {
        let entries = self.storage.scan()?;
        Ok(build_tree(&entries))
    }

    /// Scan the corpus and render the navigation tree as an HTML list.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] if scanning fails.
    pub fn index_html(&self) -> Result<String, SiteError> {
        Ok(render_tree(&self.navigation()?))
    }

    /// Render the document at a URL path.
    ///
    /// # Arguments
    ///
    /// * `path` - URL path without extension (e.g., "guide/setup")
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] if the document is missing or the path
    /// is invalid, and [`SiteError::Render`] if conversion fails.
    pub fn render(&self, path: &str) -> Result<PageRenderResult, SiteError> {
        let path = path.trim_matches('/');
        let content = self.storage.read(path)?;
        let (meta, body) = extract_metadata(&content);

        let (current_dir, file_name) = path.rsplit_once('/').unwrap_or(("", path));
        let html = self.renderer.render_document(body, current_dir)?;

        tracing::debug!(path, bytes = content.len(), "Rendered document");

        Ok(PageRenderResult {
            path: path.to_owned(),
            title: meta.title.unwrap_or_else(|| file_name.to_owned()),
            author: meta.author,
            html,
        })
    }
}
