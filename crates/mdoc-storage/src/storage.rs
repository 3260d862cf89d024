//! Storage trait and error types.
//!
//! Provides the [`Storage`] trait for corpus discovery and document reads,
//! along with [`StorageError`] shared by every backend.
//!
//! # URL Path Convention
//!
//! [`Storage::read`] takes **URL paths**, not file paths:
//! - `"guide"` - `guide.md` at the corpus root
//! - `"api/auth"` - `api/auth.md`
//!
//! Backends map a URL path onto their own layout, trying the `.md` and then
//! the `.MD` extension.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Markdown document discovered in the corpus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentEntry {
    /// Path relative to the corpus root, `/`-separated (e.g., `"api/auth.md"`).
    pub relative_path: String,
    /// File name without the `.md` extension (e.g., `"auth"`).
    pub base_name: String,
}

impl DocumentEntry {
    /// Create an entry from a corpus-relative path.
    ///
    /// The base name is the last path segment with a trailing `.md` (any
    /// case) removed.
    #[must_use]
    pub fn new(relative_path: impl Into<String>) -> Self {
        let relative_path = relative_path.into();
        let name = relative_path.rsplit('/').next().unwrap_or(&relative_path);
        let base_name = markdown_stem(name).unwrap_or(name).to_owned();
        Self {
            relative_path,
            base_name,
        }
    }

    /// Relative path without the `.md` extension (e.g., `"api/auth"`).
    #[must_use]
    pub fn url_path(&self) -> &str {
        markdown_stem(&self.relative_path).unwrap_or(&self.relative_path)
    }
}

/// Name without its `.md` extension, or `None` if it is not markdown.
pub(crate) fn markdown_stem(name: &str) -> Option<&str> {
    let split = name.len().checked_sub(3)?;
    let ext = name.get(split..)?;
    ext.eq_ignore_ascii_case(".md").then(|| &name[..split])
}

/// Why a storage operation failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Document or directory does not exist.
    NotFound,
    /// The process may not read the file or directory.
    PermissionDenied,
    /// URL path escapes the corpus or is empty.
    InvalidPath,
    /// Any other I/O failure.
    Other,
}

impl StorageErrorKind {
    fn from_io(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for StorageErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotFound => "document not found",
            Self::PermissionDenied => "permission denied",
            Self::InvalidPath => "invalid document path",
            Self::Other => "corpus read failed",
        })
    }
}

/// Failure to scan the corpus or read a document.
///
/// Displays as `<kind> at <path>: <io error>`, omitting the parts that are
/// absent.
#[derive(Debug)]
pub struct StorageError {
    /// What went wrong.
    pub kind: StorageErrorKind,
    /// Offending file, directory or URL path.
    pub path: Option<PathBuf>,
    source: Option<io::Error>,
}

impl StorageError {
    /// Create an error with no path or cause attached.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            path: None,
            source: None,
        }
    }

    /// Document missing at a URL path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::new(StorageErrorKind::NotFound)
        }
    }

    /// URL path rejected before touching storage.
    #[must_use]
    pub fn invalid_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::new(StorageErrorKind::InvalidPath)
        }
    }

    /// I/O failure on a path, categorized by the error's kind.
    #[must_use]
    pub fn io(err: io::Error, path: impl Into<PathBuf>) -> Self {
        Self {
            kind: StorageErrorKind::from_io(err.kind()),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Keep the I/O error that led to this one.
    #[must_use]
    pub(crate) fn caused_by(mut self, err: io::Error) -> Self {
        self.source = Some(err);
        self
    }

    /// Check if the error means the document does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == StorageErrorKind::NotFound
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(path) = &self.path {
            write!(f, " at {}", path.display())?;
        }
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Storage abstraction for corpus discovery and document retrieval.
///
/// Implementations are read-only and hold no per-request state, so a single
/// instance is shared across concurrent requests.
pub trait Storage: Send + Sync {
    /// Discover every markdown document in the corpus.
    ///
    /// Entries are ordered by relative path (byte-wise). Hidden files and
    /// hidden directories (name starting with `.`) are skipped, hidden
    /// directories together with everything beneath them.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] on any traversal failure. No partial result
    /// is returned.
    fn scan(&self) -> Result<Vec<DocumentEntry>, StorageError>;

    /// Read raw document bytes for a URL path.
    ///
    /// # Arguments
    ///
    /// * `path` - URL path without extension (e.g., "guide", "api/auth")
    ///
    /// # Errors
    ///
    /// Returns [`StorageErrorKind::InvalidPath`] for paths escaping the
    /// corpus, and [`StorageErrorKind::NotFound`] if neither `.md` nor `.MD`
    /// can be read.
    fn read(&self, path: &str) -> Result<Vec<u8>, StorageError>;
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_document_entry_top_level() {
        let entry = DocumentEntry::new("README.md");

        assert_eq!(entry.relative_path, "README.md");
        assert_eq!(entry.base_name, "README");
    }

    #[test]
    fn test_document_entry_nested_upper_extension() {
        let entry = DocumentEntry::new("api/v1/Auth.MD");

        assert_eq!(entry.relative_path, "api/v1/Auth.MD");
        assert_eq!(entry.base_name, "Auth");
        assert_eq!(entry.url_path(), "api/v1/Auth");
    }

    #[test]
    fn test_markdown_stem() {
        assert_eq!(markdown_stem("a.md"), Some("a"));
        assert_eq!(markdown_stem("a.Md"), Some("a"));
        assert_eq!(markdown_stem("a.md.bak"), None);
        assert_eq!(markdown_stem("md"), None);
        assert_eq!(markdown_stem("файл.md"), Some("файл"));
        assert_eq!(markdown_stem("жж"), None);
    }

    #[test]
    fn test_storage_error_new() {
        let err = StorageError::new(StorageErrorKind::NotFound);

        assert_eq!(err.kind, StorageErrorKind::NotFound);
        assert!(err.path.is_none());
        assert!(err.is_not_found());
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_storage_error_io_kinds() {
        let cases = [
            (io::ErrorKind::NotFound, StorageErrorKind::NotFound),
            (io::ErrorKind::PermissionDenied, StorageErrorKind::PermissionDenied),
            (io::ErrorKind::Interrupted, StorageErrorKind::Other),
        ];
        for (io_kind, expected) in cases {
            let err = StorageError::io(io::Error::new(io_kind, "x"), "p");
            assert_eq!(err.kind, expected);
        }
    }

    #[test]
    fn test_storage_error_io_keeps_path_and_cause() {
        let err = StorageError::io(io::Error::new(io::ErrorKind::NotFound, "gone"), "/foo/bar");

        assert_eq!(err.path.as_deref(), Some(Path::new("/foo/bar")));
        assert_eq!(std::error::Error::source(&err).unwrap().to_string(), "gone");
    }

    #[test]
    fn test_storage_error_display_kind_only() {
        let err = StorageError::new(StorageErrorKind::Other);

        assert_eq!(err.to_string(), "corpus read failed");
    }

    #[test]
    fn test_storage_error_display_with_path() {
        assert_eq!(
            StorageError::invalid_path("../etc").to_string(),
            "invalid document path at ../etc"
        );
        assert_eq!(
            StorageError::not_found("guide").to_string(),
            "document not found at guide"
        );
    }

    #[test]
    fn test_storage_error_display_with_cause() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = StorageError::io(io_err, "/srv/docs");

        assert_eq!(err.to_string(), "permission denied at /srv/docs: denied");
    }

    #[test]
    fn test_not_found_keeps_cause() {
        let io_err = io::Error::new(io::ErrorKind::IsADirectory, "is a directory");
        let err = StorageError::not_found("dir").caused_by(io_err);

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "document not found at dir: is a directory");
    }

    #[test]
    fn test_storage_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StorageError>();
    }
}
