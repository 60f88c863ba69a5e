//! Cabinet layouts
//!
//! Declarative description of a cabinet tree, loaded from TOML or JSON and
//! turned into a [`FileCabinet`]. A node that carries a `folders` key is a
//! nested cabinet, even if the list is empty.
//!
//! ```toml
//! name = "Archive"
//! size = "large"
//!
//! [[folders]]
//! name = "Invoices"
//! size = "small"
//!
//! [[folders]]
//! name = "Old"
//! size = "medium"
//! folders = [{ name = "2019", size = "small" }]
//! ```

use crate::cabinet::FileCabinet;
use crate::error::ApiError;
use crate::folder::FolderNode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// One node of a layout document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutNode {
    pub name: String,
    pub size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folders: Option<Vec<LayoutNode>>,
}

impl LayoutNode {
    pub fn folder(name: &str, size: &str) -> Self {
        Self {
            name: name.to_string(),
            size: size.to_string(),
            folders: None,
        }
    }

    fn into_node(self) -> FolderNode {
        match self.folders {
            None => FolderNode::entry(self.name, self.size),
            Some(children) => FolderNode::Cabinet(FileCabinet::new(
                children.into_iter().map(LayoutNode::into_node).collect(),
                self.name,
                self.size,
            )),
        }
    }
}

/// Top-level layout: the root cabinet's own name and size plus its folders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub name: String,
    pub size: String,
    #[serde(default)]
    pub folders: Vec<LayoutNode>,
}

impl Layout {
    /// Built-in demonstration cabinet.
    pub fn demo() -> Self {
        Self {
            name: "FileCabinet".to_string(),
            size: "medium".to_string(),
            folders: vec![
                LayoutNode::folder("Test1", "small"),
                LayoutNode::folder("Test2", "medium"),
                LayoutNode::folder("Test3", "small"),
                LayoutNode::folder("Test4", "medium"),
                LayoutNode::folder("Test5", "large"),
                LayoutNode::folder("Test6", "large"),
                LayoutNode::folder("Test7", "small"),
            ],
        }
    }

    /// Parse a TOML layout document.
    pub fn from_toml_str(content: &str) -> Result<Self, ApiError> {
        toml::from_str(content)
            .map_err(|e| ApiError::LayoutError(format!("Failed to parse TOML layout: {}", e)))
    }

    /// Parse a JSON layout document.
    pub fn from_json_str(content: &str) -> Result<Self, ApiError> {
        serde_json::from_str(content)
            .map_err(|e| ApiError::LayoutError(format!("Failed to parse JSON layout: {}", e)))
    }

    /// Load a layout file. `.json` files are parsed as JSON, everything else as TOML.
    pub fn load(path: &Path) -> Result<Self, ApiError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ApiError::LayoutError(format!(
                "Failed to read layout file {}: {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        debug!(path = %path.display(), json = is_json, "loading cabinet layout");
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Build the cabinet described by this layout.
    pub fn into_cabinet(self) -> FileCabinet {
        FileCabinet::new(
            self.folders.into_iter().map(LayoutNode::into_node).collect(),
            self.name,
            self.size,
        )
    }
}
