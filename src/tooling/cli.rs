//! CLI Tooling
//!
//! Command-line interface over a single cabinet. The cabinet comes from a
//! layout file (`--layout` or `layout.path` in config) or the built-in demo.

use crate::cabinet::{Cabinet, FileCabinet};
use crate::config::{CabinetConfig, ConfigLoader};
use crate::error::ApiError;
use crate::folder::validation::normalize;
use crate::folder::Folder;
use crate::layout::Layout;
use crate::logging::LoggingConfig;
use crate::tooling::format::{
    format_count_text, format_find_name_text, format_find_size_text, format_list_text,
    format_validate_text, to_json, CountOutput, FindNameOutput, FindSizeOutput, FolderRow,
    ListOutput, OutputFormat, ValidateOutput,
};
use crate::types::FolderSize;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

/// Cabinet CLI - name and size queries over nested folder cabinets
#[derive(Parser)]
#[command(name = "cabinet")]
#[command(about = "Name and size queries over nested folder cabinets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Layout file describing the cabinet (TOML or JSON)
    #[arg(long)]
    pub layout: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply logging flags on top of configured logging settings.
    pub fn apply_logging_overrides(&self, logging: &mut LoggingConfig) {
        if let Some(level) = &self.log_level {
            logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            logging.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            logging.file = Some(file.clone());
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List every folder in traversal order
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Find the first folder with the given name (case and whitespace insensitive)
    FindName {
        /// Folder name; omitted or blank matches nothing
        name: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Find all folders of the given size (small, medium, large)
    FindSize {
        /// Size category
        size: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Count every folder, nested cabinets included
    Count {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Check every folder for a usable name and an allowed size
    Validate {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// CLI execution context
pub struct CliContext {
    cabinet: FileCabinet,
}

impl CliContext {
    /// Load config (explicit file or standard sources) and build the cabinet.
    pub fn new(layout: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = ConfigLoader::load_or_default(config_path.as_deref())?;
        Self::with_config(&config, layout.as_deref())
    }

    /// Build the cabinet from an already-loaded config; `layout` wins over `config.layout.path`.
    pub fn with_config(config: &CabinetConfig, layout: Option<&Path>) -> Result<Self, ApiError> {
        let layout_path = layout.or(config.layout.path.as_deref());
        let layout = match layout_path {
            Some(path) => Layout::load(path)?,
            None => Layout::demo(),
        };
        Ok(Self::from_cabinet(layout.into_cabinet()))
    }

    pub fn from_cabinet(cabinet: FileCabinet) -> Self {
        Self { cabinet }
    }

    pub fn cabinet(&self) -> &FileCabinet {
        &self.cabinet
    }

    /// Execute a command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::List { format } => {
                let format = OutputFormat::parse(format)?;
                info!(cabinet = self.cabinet.name(), "list");
                let output = ListOutput::from_cabinet(&self.cabinet);
                match format {
                    OutputFormat::Json => to_json(&output),
                    OutputFormat::Text => Ok(format_list_text(&output)),
                }
            }
            Commands::FindName { name, format } => {
                let format = OutputFormat::parse(format)?;
                info!(cabinet = self.cabinet.name(), query = ?name, "find-name");
                let folder = self
                    .cabinet
                    .find_folder_by_name(name.as_deref())
                    .map(FolderRow::from_node);
                let output = FindNameOutput {
                    query: name.clone(),
                    found: folder.is_some(),
                    folder,
                };
                match format {
                    OutputFormat::Json => to_json(&output),
                    OutputFormat::Text => Ok(format_find_name_text(&output)),
                }
            }
            Commands::FindSize { size, format } => {
                let format = OutputFormat::parse(format)?;
                info!(cabinet = self.cabinet.name(), query = ?size, "find-size");
                let folders: Vec<FolderRow> = self
                    .cabinet
                    .find_folders_by_size(size.as_deref())?
                    .into_iter()
                    .map(FolderRow::from_node)
                    .collect();
                // The query above already rejected anything that is not a size.
                let label = normalize(size.as_deref())
                    .as_deref()
                    .and_then(FolderSize::from_canonical)
                    .map(FolderSize::as_str)
                    .unwrap_or_default();
                let output = FindSizeOutput {
                    size: label.to_string(),
                    count: folders.len(),
                    folders,
                };
                match format {
                    OutputFormat::Json => to_json(&output),
                    OutputFormat::Text => Ok(format_find_size_text(&output)),
                }
            }
            Commands::Count { format } => {
                let format = OutputFormat::parse(format)?;
                info!(cabinet = self.cabinet.name(), "count");
                let output = CountOutput {
                    cabinet: self.cabinet.name().to_string(),
                    count: self.cabinet.count(),
                };
                match format {
                    OutputFormat::Json => to_json(&output),
                    OutputFormat::Text => Ok(format_count_text(&output)),
                }
            }
            Commands::Validate { format } => {
                let format = OutputFormat::parse(format)?;
                info!(cabinet = self.cabinet.name(), "validate");
                let output = ValidateOutput::from(&self.cabinet.validate());
                match format {
                    OutputFormat::Json => to_json(&output),
                    OutputFormat::Text => Ok(format_validate_text(&output)),
                }
            }
        }
    }
}
