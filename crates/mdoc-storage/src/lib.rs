//! Document corpus discovery and retrieval for mdoc.
//!
//! This crate provides a [`Storage`] trait over the document corpus, so page
//! assembly can be tested without touching the real filesystem.
//!
//! # Architecture
//!
//! - [`Storage`] trait with `scan()` and `read()` methods
//! - [`FsStorage`] reading a directory tree on every call
//! - [`scan_corpus`] walking a directory into an ordered [`DocumentEntry`] list
//! - [`MockStorage`] for testing (behind `mock` feature flag)

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod scanner;
mod storage;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use scanner::scan_corpus;
pub use storage::{DocumentEntry, Storage, StorageError, StorageErrorKind};
