//! Filesystem storage implementation.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::scanner::scan_corpus;
use crate::storage::{DocumentEntry, Storage, StorageError};

/// Extensions tried, in order, when resolving a URL path to a file.
const EXTENSIONS: [&str; 2] = ["md", "MD"];

/// Filesystem storage rooted at a corpus directory.
///
/// Every call hits the filesystem; nothing is cached, so edits show up on
/// the next request.
///
/// # Example
///
/// ```no_run
/// use std::path::PathBuf;
/// use mdoc_storage::{FsStorage, Storage};
///
/// let storage = FsStorage::new(PathBuf::from("docs"));
/// for entry in storage.scan()? {
///     println!("{}", entry.relative_path);
/// }
/// # Ok::<(), mdoc_storage::StorageError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FsStorage {
    source_dir: PathBuf,
}

impl FsStorage {
    /// Create storage for the given corpus root.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Validate that a URL path stays inside the corpus.
    ///
    /// Rejects parent directory components (`..`) and absolute or
    /// prefixed paths.
    fn validate_path(path: &str) -> Result<(), StorageError> {
        let escapes = Path::new(path).components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });

        if escapes || path.is_empty() {
            return Err(StorageError::invalid_path(path));
        }
        Ok(())
    }
}

impl Storage for FsStorage {
    fn scan(&self) -> Result<Vec<DocumentEntry>, StorageError> {
        scan_corpus(&self.source_dir)
    }

    fn read(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        let path = path.trim_start_matches('/');
        Self::validate_path(path)?;

        let mut last_err = None;
        for ext in EXTENSIONS {
            let file = self.source_dir.join(format!("{path}.{ext}"));
            match fs::read(&file) {
                Ok(content) => return Ok(content),
                Err(err) => {
                    tracing::debug!(file = %file.display(), error = %err, "Document candidate unreadable");
                    last_err = Some(err);
                }
            }
        }

        let error = StorageError::not_found(path);
        Err(match last_err {
            Some(err) => error.caused_by(err),
            None => error,
        })
    }
}
