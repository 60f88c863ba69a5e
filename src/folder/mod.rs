//! Folder capabilities and the node types a cabinet tree is built from.
//!
//! A tree is made of two kinds of node: plain [`FolderEntry`] leaves and nested
//! [`FileCabinet`]s. Both report a name and a size; only cabinets expose children.

pub mod validation;

use crate::cabinet::FileCabinet;

/// Anything that can report a name and a size category.
///
/// Values are returned exactly as stored. Callers that compare them must
/// normalize first (see [`validation::normalize`]).
pub trait Folder {
    fn name(&self) -> &str;
    fn size(&self) -> &str;
}

/// A folder that also holds an ordered sequence of child folders.
pub trait MultiFolder: Folder {
    fn folders(&self) -> &[FolderNode];
}

/// Leaf folder: an immutable name/size value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    name: String,
    size: String,
}

impl FolderEntry {
    pub fn new(name: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
        }
    }
}

impl Folder for FolderEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> &str {
        &self.size
    }
}

/// A node in a cabinet tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderNode {
    Entry(FolderEntry),
    Cabinet(FileCabinet),
}

impl FolderNode {
    /// Shorthand for a leaf node.
    pub fn entry(name: impl Into<String>, size: impl Into<String>) -> Self {
        FolderNode::Entry(FolderEntry::new(name, size))
    }

    /// Direct children when this node is a container, `None` for leaves.
    pub fn children(&self) -> Option<&[FolderNode]> {
        match self {
            FolderNode::Entry(_) => None,
            FolderNode::Cabinet(cabinet) => Some(cabinet.folders()),
        }
    }

    pub fn is_cabinet(&self) -> bool {
        matches!(self, FolderNode::Cabinet(_))
    }

    /// Short label for the node kind, used in rendered output.
    pub fn kind(&self) -> &'static str {
        match self {
            FolderNode::Entry(_) => "folder",
            FolderNode::Cabinet(_) => "cabinet",
        }
    }
}

impl Folder for FolderNode {
    fn name(&self) -> &str {
        match self {
            FolderNode::Entry(entry) => entry.name(),
            FolderNode::Cabinet(cabinet) => cabinet.name(),
        }
    }

    fn size(&self) -> &str {
        match self {
            FolderNode::Entry(entry) => entry.size(),
            FolderNode::Cabinet(cabinet) => cabinet.size(),
        }
    }
}

impl From<FolderEntry> for FolderNode {
    fn from(entry: FolderEntry) -> Self {
        FolderNode::Entry(entry)
    }
}

impl From<FileCabinet> for FolderNode {
    fn from(cabinet: FileCabinet) -> Self {
        FolderNode::Cabinet(cabinet)
    }
}
