//! Core types for the cabinet query engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Size category of a folder.
///
/// Stored sizes stay free-form strings on the folders themselves; this enum is
/// what they are interpreted as when compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderSize {
    Small,
    Medium,
    Large,
}

impl FolderSize {
    /// The complete set of allowed size categories.
    pub const ALL: [FolderSize; 3] = [FolderSize::Small, FolderSize::Medium, FolderSize::Large];

    /// Canonical lower-case literal for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            FolderSize::Small => "small",
            FolderSize::Medium => "medium",
            FolderSize::Large => "large",
        }
    }

    /// Look up a category by its canonical literal. Expects already-normalized input.
    pub fn from_canonical(key: &str) -> Option<FolderSize> {
        Self::ALL.into_iter().find(|size| size.as_str() == key)
    }
}

impl fmt::Display for FolderSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
