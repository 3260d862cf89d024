//! Corpus discovery by filesystem walking.

use std::fs;
use std::path::Path;

use crate::storage::{DocumentEntry, StorageError, markdown_stem};

/// Discover every markdown document beneath `root`.
///
/// Walks the tree recursively. Entries whose name starts with `.` are
/// skipped, and hidden directories are not descended into. Only non-directory
/// entries with an `.md` extension (any case) are kept. The result is sorted
/// byte-wise by relative path.
///
/// # Errors
///
/// Returns [`StorageError`] if `root` or any directory beneath it cannot be
/// listed. The walk stops at the first failure.
pub fn scan_corpus(root: &Path) -> Result<Vec<DocumentEntry>, StorageError> {
    let mut entries = Vec::new();
    scan_directory(root, "", &mut entries)?;
    entries.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

    tracing::debug!(root = %root.display(), documents = entries.len(), "Scanned corpus");
    Ok(entries)
}

fn scan_directory(
    dir: &Path,
    prefix: &str,
    out: &mut Vec<DocumentEntry>,
) -> Result<(), StorageError> {
    let listing = fs::read_dir(dir).map_err(|e| StorageError::io(e, dir))?;

    for entry in listing {
        let entry = entry.map_err(|e| StorageError::io(e, dir))?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with('.') {
            continue;
        }

        let file_type = entry
            .file_type()
            .map_err(|e| StorageError::io(e, entry.path()))?;
        let is_dir = file_type.is_dir();
        if !is_dir && markdown_stem(&name).is_none() {
            continue;
        }

        let relative = if prefix.is_empty() {
            name.into_owned()
        } else {
            format!("{prefix}/{name}")
        };

        if is_dir {
            scan_directory(&entry.path(), &relative, out)?;
        } else {
            out.push(DocumentEntry::new(relative));
        }
    }

    Ok(())
}
