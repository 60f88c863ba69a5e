//! Render query results as text tables or JSON.

use crate::cabinet::FileCabinet;
use crate::error::ApiError;
use crate::folder::validation::ValidationResult;
use crate::folder::{Folder, FolderNode};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Output format accepted by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(format: &str) -> Result<Self, ApiError> {
        match format {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ApiError::ConfigError(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }
}

/// One folder as shown to the user.
#[derive(Debug, Clone, Serialize)]
pub struct FolderRow {
    pub name: String,
    pub size: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
}

impl FolderRow {
    pub fn from_node(node: &FolderNode) -> Self {
        Self {
            name: node.name().to_string(),
            size: node.size().to_string(),
            kind: node.kind().to_string(),
            depth: None,
        }
    }

    pub fn with_depth(node: &FolderNode, depth: usize) -> Self {
        Self {
            depth: Some(depth),
            ..Self::from_node(node)
        }
    }
}

/// Result of the list command.
#[derive(Debug, Clone, Serialize)]
pub struct ListOutput {
    pub cabinet: String,
    pub size: String,
    pub count: usize,
    pub folders: Vec<FolderRow>,
}

impl ListOutput {
    pub fn from_cabinet(cabinet: &FileCabinet) -> Self {
        let folders: Vec<FolderRow> = cabinet
            .walk()
            .map(|(depth, node)| FolderRow::with_depth(node, depth))
            .collect();
        Self {
            cabinet: cabinet.name().to_string(),
            size: cabinet.size().to_string(),
            count: folders.len(),
            folders,
        }
    }
}

/// Result of the find-name command.
#[derive(Debug, Clone, Serialize)]
pub struct FindNameOutput {
    pub query: Option<String>,
    pub found: bool,
    pub folder: Option<FolderRow>,
}

/// Result of the find-size command.
#[derive(Debug, Clone, Serialize)]
pub struct FindSizeOutput {
    pub size: String,
    pub count: usize,
    pub folders: Vec<FolderRow>,
}

/// Result of the count command.
#[derive(Debug, Clone, Serialize)]
pub struct CountOutput {
    pub cabinet: String,
    pub count: usize,
}

/// One validation check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckRow {
    pub description: String,
    pub passed: bool,
}

/// Result of the validate command.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateOutput {
    pub cabinet: String,
    pub valid: bool,
    pub total_checks: usize,
    pub passed_checks: usize,
    pub checks: Vec<CheckRow>,
    pub errors: Vec<String>,
}

impl From<&ValidationResult> for ValidateOutput {
    fn from(result: &ValidationResult) -> Self {
        Self {
            cabinet: result.cabinet_name.clone(),
            valid: result.is_valid(),
            total_checks: result.total_checks(),
            passed_checks: result.passed_checks(),
            checks: result
                .checks
                .iter()
                .map(|(description, passed)| CheckRow {
                    description: description.clone(),
                    passed: *passed,
                })
                .collect(),
            errors: result.errors.clone(),
        }
    }
}

/// Serialize any output DTO as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::ConfigError(format!("Failed to serialize output: {}", e)))
}

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn folder_table(rows: &[FolderRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["#", "Name", "Size", "Kind"]);
    for (index, row) in rows.iter().enumerate() {
        let indent = "  ".repeat(row.depth.unwrap_or(0));
        table.add_row(vec![
            index.to_string(),
            format!("{}{}", indent, row.name),
            row.size.clone(),
            row.kind.clone(),
        ]);
    }
    table
}

pub fn format_list_text(data: &ListOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading(&format!("Cabinet {} ({})", data.cabinet, data.size))
    ));
    if data.folders.is_empty() {
        out.push_str("  (empty)\n");
    } else {
        out.push_str(&format!("{}\n", folder_table(&data.folders)));
    }
    out.push_str(&format!("\nTotal folders: {}", data.count));
    out
}

pub fn format_find_name_text(data: &FindNameOutput) -> String {
    match (&data.query, &data.folder) {
        (_, Some(row)) => format!(
            "{}\n\n{}",
            format_section_heading("Folder found"),
            folder_table(std::slice::from_ref(row))
        ),
        (Some(query), None) => format!("No folder named '{}'", query),
        (None, None) => "No folder name given".to_string(),
    }
}

pub fn format_find_size_text(data: &FindSizeOutput) -> String {
    if data.folders.is_empty() {
        return format!("No folders of size {}", data.size);
    }
    format!(
        "{}\n\n{}\n\nMatches: {}",
        format_section_heading(&format!("Folders of size {}", data.size)),
        folder_table(&data.folders),
        data.count
    )
}

pub fn format_count_text(data: &CountOutput) -> String {
    format!("Total folders: {}", data.count)
}

pub fn format_validate_text(data: &ValidateOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading(&format!("Validation: {}", data.cabinet))
    ));
    out.push_str(&format!(
        "  Checks passed: {}/{}\n",
        data.passed_checks, data.total_checks
    ));
    if !data.errors.is_empty() {
        out.push_str("  Errors:\n");
        for error in &data.errors {
            out.push_str(&format!("    - {}\n", error));
        }
    }
    out.push_str(&format!("  Valid: {}", if data.valid { "yes" } else { "no" }));
    out
}
