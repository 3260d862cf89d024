//! Navigation tree and page assembly for mdoc.
//!
//! This crate provides:
//! - [`build_tree`]: folds scanned documents into a [`NavNode`] tree
//! - [`render_tree`]: renders that tree as a nested HTML list
//! - [`Site`]: facade over storage and renderer used by the server
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use mdoc_renderer::{DEFAULT_THEME, HtmlRenderer};
//! use mdoc_site::Site;
//! use mdoc_storage::FsStorage;
//!
//! let storage = Arc::new(FsStorage::new(PathBuf::from("docs")));
//! let renderer = Arc::new(HtmlRenderer::new(DEFAULT_THEME)?);
//! let site = Site::new(storage, renderer);
//!
//! let tree = site.navigation()?;
//! let page = site.render("guide")?;
//! # Ok(())
//! # }
//! ```

mod navigation;
mod site;
mod tree_html;

pub use navigation::{NavNode, ROOT_NAME, build_tree};
pub use site::{PageRenderResult, Site, SiteError};
pub use tree_html::render_tree;
