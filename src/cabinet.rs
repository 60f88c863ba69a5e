//! File Cabinet
//!
//! Query engine over a snapshot of folders. Every query runs over the recursive
//! flattening of the stored children: nested cabinets are candidates themselves,
//! and so are all of their descendants.
//!
//! A `FileCabinet` is immutable once built. Replacing its contents produces a new
//! cabinet through [`FileCabinet::with_folders`] or [`FileCabinet::cleared`].

use crate::error::QueryError;
use crate::folder::validation::{assert_allowed_size, normalize, validate_tree, ValidationResult};
use crate::folder::{Folder, FolderNode, MultiFolder};
use crate::tree::walker::{flatten, walk, Flatten, Walk};
use tracing::debug;

/// Lookup and filtering over a cabinet tree.
pub trait Cabinet {
    /// First folder, in traversal order, whose normalized name equals the normalized query.
    ///
    /// An absent or blank query is a valid request that matches nothing.
    fn find_folder_by_name(&self, name: Option<&str>) -> Option<&FolderNode>;

    /// Every folder, in traversal order, whose size matches the query size.
    ///
    /// The query is validated before any folder is inspected. Folders whose own
    /// stored size is not an allowed category never match and are skipped.
    fn find_folders_by_size(&self, size: Option<&str>) -> Result<Vec<&FolderNode>, QueryError>;

    /// Number of nodes in the flattened tree, cabinets and leaves alike.
    fn count(&self) -> usize;
}

/// Cabinet engine holding its own name and size plus a snapshot of child folders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCabinet {
    name: String,
    size: String,
    folders: Vec<FolderNode>,
}

impl FileCabinet {
    /// Create a cabinet from a snapshot of its direct children.
    pub fn new(folders: Vec<FolderNode>, name: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
            folders,
        }
    }

    /// Create a cabinet from a possibly absent sequence with possibly absent slots.
    ///
    /// An absent sequence becomes an empty cabinet; absent slots are dropped.
    pub fn from_slots(
        folders: Option<Vec<Option<FolderNode>>>,
        name: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        let folders = folders
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .collect();
        Self::new(folders, name, size)
    }

    /// Same name and size, different children.
    pub fn with_folders(&self, folders: Vec<FolderNode>) -> Self {
        Self::new(folders, self.name.clone(), self.size.clone())
    }

    /// Same name and size, no children.
    pub fn cleared(&self) -> Self {
        self.with_folders(Vec::new())
    }

    /// Pre-order traversal of every folder in this cabinet.
    pub fn iter(&self) -> Flatten<'_> {
        flatten(&self.folders)
    }

    /// Pre-order traversal with the depth of each folder.
    pub fn walk(&self) -> Walk<'_> {
        walk(&self.folders)
    }

    /// Check every folder for a usable name and an allowed size.
    pub fn validate(&self) -> ValidationResult {
        validate_tree(&self.name, &self.folders)
    }
}

impl Folder for FileCabinet {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> &str {
        &self.size
    }
}

impl MultiFolder for FileCabinet {
    fn folders(&self) -> &[FolderNode] {
        &self.folders
    }
}

impl Cabinet for FileCabinet {
    fn find_folder_by_name(&self, name: Option<&str>) -> Option<&FolderNode> {
        let key = normalize(name)?;
        debug!(cabinet = %self.name, name = %key, "find folder by name");

        self.iter()
            .find(|folder| normalize(Some(folder.name())).as_deref() == Some(key.as_str()))
    }

    fn find_folders_by_size(&self, size: Option<&str>) -> Result<Vec<&FolderNode>, QueryError> {
        let wanted = assert_allowed_size(size)?;
        debug!(cabinet = %self.name, size = %wanted, "find folders by size");

        let matches = self
            .iter()
            .filter(|folder| match assert_allowed_size(Some(folder.size())) {
                Ok(stored) => stored == wanted,
                Err(_) => {
                    debug!(
                        folder = folder.name(),
                        size = folder.size(),
                        "skipping folder with invalid stored size"
                    );
                    false
                }
            })
            .collect();
        Ok(matches)
    }

    fn count(&self) -> usize {
        self.iter().count()
    }
}

// Nested cabinets are moved onto a worklist so teardown of a deep tree stays iterative.
impl Drop for FileCabinet {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.folders);
        while let Some(node) = pending.pop() {
            if let FolderNode::Cabinet(mut cabinet) = node {
                pending.append(&mut cabinet.folders);
            }
        }
    }
}

impl<'a> IntoIterator for &'a FileCabinet {
    type Item = &'a FolderNode;
    type IntoIter = Flatten<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
