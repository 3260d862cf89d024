//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::HashMap;

use crate::storage::{DocumentEntry, Storage, StorageError, StorageErrorKind, markdown_stem};

/// In-memory storage for tests.
///
/// # Example
///
/// ```
/// use mdoc_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_file("guide.md", "# Guide")
///     .with_file("api/auth.md", "# Auth");
///
/// assert_eq!(storage.scan().unwrap().len(), 2);
/// assert_eq!(storage.read("api/auth").unwrap(), b"# Auth");
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    documents: Vec<DocumentEntry>,
    contents: HashMap<String, Vec<u8>>,
    scan_failure: Option<StorageErrorKind>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document at a corpus-relative path (e.g., `"api/auth.md"`).
    #[must_use]
    pub fn with_file(mut self, relative_path: &str, content: impl Into<Vec<u8>>) -> Self {
        let url_path = markdown_stem(relative_path)
            .unwrap_or(relative_path)
            .to_owned();
        self.documents.push(DocumentEntry::new(relative_path));
        self.contents.insert(url_path, content.into());
        self
    }

    /// Make every `scan` call fail with the given kind.
    #[must_use]
    pub fn with_scan_failure(mut self, kind: StorageErrorKind) -> Self {
        self.scan_failure = Some(kind);
        self
    }
}

impl Storage for MockStorage {
    fn scan(&self) -> Result<Vec<DocumentEntry>, StorageError> {
        if let Some(kind) = self.scan_failure {
            return Err(StorageError::new(kind));
        }

        let mut documents = self.documents.clone();
        documents.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(documents)
    }

    fn read(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        let path = path.trim_start_matches('/');
        if path.split('/').any(|s| s == "..") {
            return Err(StorageError::invalid_path(path));
        }
        self.contents
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::not_found(path))
    }
}
