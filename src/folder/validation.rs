//! Normalization and size validation for folder names and sizes.

use crate::error::QueryError;
use crate::folder::{Folder, FolderNode};
use crate::tree::walker::flatten;
use crate::types::FolderSize;

/// Canonical comparison key: trimmed and lower-cased, `None` when absent or blank.
///
/// Lower-casing uses Unicode case mapping, independent of the process locale.
pub fn normalize(input: Option<&str>) -> Option<String> {
    let trimmed = input?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Normalize `input` and accept it only if it names one of the allowed size categories.
pub fn assert_allowed_size(input: Option<&str>) -> Result<FolderSize, QueryError> {
    normalize(input)
        .as_deref()
        .and_then(FolderSize::from_canonical)
        .ok_or(QueryError::InvalidSize)
}

/// Validation report for a cabinet tree.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub cabinet_name: String,
    pub checks: Vec<(String, bool)>,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn new(cabinet_name: String) -> Self {
        Self {
            cabinet_name,
            checks: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn add_check(&mut self, description: &str, passed: bool) {
        self.checks.push((description.to_string(), passed));
    }

    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.checks.iter().all(|(_, passed)| *passed)
    }

    pub fn total_checks(&self) -> usize {
        self.checks.len()
    }

    pub fn passed_checks(&self) -> usize {
        self.checks.iter().filter(|(_, passed)| *passed).count()
    }
}

/// Check every node of the flattened tree for a usable name and an allowed size.
///
/// Errors name the node's position in traversal order, so they line up with `list` output.
pub fn validate_tree(cabinet_name: &str, folders: &[FolderNode]) -> ValidationResult {
    let mut result = ValidationResult::new(cabinet_name.to_string());

    for (index, node) in flatten(folders).enumerate() {
        let name_ok = normalize(Some(node.name())).is_some();
        result.add_check(&format!("#{} name present", index), name_ok);
        if !name_ok {
            result.add_error(format!("#{} {} has a blank name", index, node.kind()));
        }

        let size_ok = assert_allowed_size(Some(node.size())).is_ok();
        result.add_check(&format!("#{} size allowed", index), size_ok);
        if !size_ok {
            result.add_error(format!(
                "#{} {} '{}' has invalid size '{}'",
                index,
                node.kind(),
                node.name(),
                node.size()
            ));
        }
    }

    result
}
