//! Navigation tree built from the flat document list.

use mdoc_storage::DocumentEntry;
use serde::Serialize;

/// Name of the synthetic root directory. Never displayed.
pub const ROOT_NAME: &str = "root";

/// Node of the navigation tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavNode {
    /// Directory containing further nodes.
    Directory {
        /// Directory name.
        name: String,
        /// Child nodes, directories first.
        children: Vec<NavNode>,
    },
    /// Document linking to its route.
    Document {
        /// Document name without extension.
        name: String,
        /// Root-relative route (e.g., `/guide/setup`).
        route: String,
    },
}

impl NavNode {
    /// Create an empty directory node.
    #[must_use]
    pub fn directory(name: impl Into<String>) -> Self {
        Self::Directory {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Display name of the node.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Directory { name, .. } | Self::Document { name, .. } => name,
        }
    }

    /// Children of a directory; empty for documents.
    #[must_use]
    pub fn children(&self) -> &[NavNode] {
        match self {
            Self::Directory { children, .. } => children,
            Self::Document { .. } => &[],
        }
    }

    /// Consume the node, returning its children.
    #[must_use]
    pub fn into_children(self) -> Vec<NavNode> {
        match self {
            Self::Directory { children, .. } => children,
            Self::Document { .. } => Vec::new(),
        }
    }

    fn is_directory(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }

    /// Sort recursively: directories first, then by case-insensitive name.
    fn sort(&mut self) {
        if let Self::Directory { children, .. } = self {
            children.sort_by_cached_key(|c| (!c.is_directory(), c.name().to_lowercase()));
            children.iter_mut().for_each(Self::sort);
        }
    }
}

/// Fold document entries into a tree mirroring the directory layout.
///
/// The returned root is a synthetic directory named [`ROOT_NAME`]. Input
/// order does not matter; the tree is sorted at every level.
///
/// # Example
///
/// ```
/// use mdoc_site::{NavNode, build_tree};
/// use mdoc_storage::DocumentEntry;
///
/// let root = build_tree(&[DocumentEntry::new("guide/setup.md")]);
/// let NavNode::Directory { name, children } = &root.children()[0] else {
///     panic!("expected directory");
/// };
/// assert_eq!(name, "guide");
/// assert_eq!(
///     children[0],
///     NavNode::Document { name: "setup".to_owned(), route: "/guide/setup".to_owned() }
/// );
/// ```
#[must_use]
pub fn build_tree(entries: &[DocumentEntry]) -> NavNode {
    let mut root = NavNode::directory(ROOT_NAME);
    for entry in entries {
        insert(&mut root, entry);
    }
    root.sort();
    root
}

fn insert(root: &mut NavNode, entry: &DocumentEntry) {
    let mut segments: Vec<&str> = entry
        .relative_path
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();
    if segments.pop().is_none() {
        return;
    }

    let mut node = root;
    for segment in segments {
        let NavNode::Directory { children, .. } = node else {
            return;
        };
        let index = match children
            .iter()
            .position(|c| c.is_directory() && c.name() == segment)
        {
            Some(index) => index,
            None => {
                children.push(NavNode::directory(segment));
                children.len() - 1
            }
        };
        node = &mut children[index];
    }

    if let NavNode::Directory { children, .. } = node {
        children.push(NavNode::Document {
            name: entry.base_name.clone(),
            route: format!("/{}", entry.url_path()),
        });
    }
}
