//! Output formatting module
//!
//! This module provides formatters for JSON, YAML, ANSI, and plain-text
//! output of a generated trail.

pub mod ansi;
mod json;
mod yaml;

pub use ansi::format_ansi;
pub use json::format_json;
pub use yaml::format_yaml;

use crate::models::Trail;
use thiserror::Error;

/// Output format errors
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON array of crumb objects
    Json,
    /// YAML sequence of crumb mappings
    Yaml,
    /// ANSI colored terminal output
    Ansi,
    /// Plain text, titles joined with " > "
    #[default]
    Text,
}

impl OutputFormat {
    /// Parse a format name as used for renderer template ids
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(OutputFormat::Json),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            "ansi" => Some(OutputFormat::Ansi),
            "text" | "txt" => Some(OutputFormat::Text),
            _ => None,
        }
    }

    /// The canonical name for this format
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Ansi => "ansi",
            OutputFormat::Text => "text",
        }
    }
}

/// Format a trail in the specified format
pub fn format_trail(trail: &Trail, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => format_json(trail),
        OutputFormat::Yaml => format_yaml(trail),
        OutputFormat::Ansi => Ok(format_ansi(trail)),
        OutputFormat::Text => Ok(format_text(trail)),
    }
}

/// Format a trail as plain text
pub fn format_text(trail: &Trail) -> String {
    trail.path()
}
