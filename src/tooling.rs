//! Tooling Layer
//!
//! Command-line access to a cabinet: argument parsing, command execution and
//! output rendering.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands};
pub use format::OutputFormat;
