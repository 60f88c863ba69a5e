//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::CabinetConfig;
use crate::error::ApiError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file and environment.
    pub fn load() -> Result<CabinetConfig, ApiError> {
        Ok(MergeService::load()?)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<CabinetConfig, ApiError> {
        Ok(MergeService::load_from_file(path)?)
    }

    /// Load from `path` when given, otherwise from the standard sources.
    pub fn load_or_default(path: Option<&Path>) -> Result<CabinetConfig, ApiError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(),
        }
    }
}
