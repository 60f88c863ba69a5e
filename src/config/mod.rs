//! Configuration
//!
//! Layered settings for the `cabinet` binary: built-in defaults, the global
//! config file, an explicit `--config` file and `CABINET_*` environment
//! variables, in increasing order of precedence.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the cabinet tree comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Layout file (TOML or JSON); `None` uses the built-in demo layout
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Complete cabinet configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CabinetConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub layout: LayoutConfig,
}
