//! Configuration module
//!
//! Holds the startup configuration for a breadcrumb manager: which
//! definition files to load and which template the parameterless `render`
//! call should use.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] toml::de::Error),
}

/// Configuration for a breadcrumb manager
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BreadcrumbConfig {
    /// Declarative definition files loaded at startup
    pub definition_files: Vec<PathBuf>,

    /// Template id used by `render` when no template is given
    pub default_template: String,
}

impl Default for BreadcrumbConfig {
    fn default() -> Self {
        Self {
            definition_files: Vec::new(),
            default_template: "text".to_string(),
        }
    }
}

impl BreadcrumbConfig {
    /// Create a default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Add a definition file (builder pattern)
    pub fn with_definition_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.definition_files.push(path.into());
        self
    }

    /// Set the definition files (builder pattern)
    pub fn with_definition_files(mut self, files: Vec<PathBuf>) -> Self {
        self.definition_files = files;
        self
    }

    /// Set the default template id (builder pattern)
    pub fn with_default_template(mut self, template: impl Into<String>) -> Self {
        self.default_template = template.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_builder() {
        let config = BreadcrumbConfig::new()
            .with_definition_file("breadcrumbs.toml")
            .with_default_template("json");

        assert_eq!(config.definition_files, vec![PathBuf::from("breadcrumbs.toml")]);
        assert_eq!(config.default_template, "json");
    }

    #[test]
    fn test_config_defaults() {
        let config = BreadcrumbConfig::default();
        assert!(config.definition_files.is_empty());
        assert_eq!(config.default_template, "text");
    }

    #[test]
    fn test_config_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
definition_files = ["routes/breadcrumbs.toml"]
default_template = "ansi"
"#
        )
        .unwrap();

        let config = BreadcrumbConfig::from_file(&path).unwrap();
        assert_eq!(config.default_template, "ansi");
        assert_eq!(
            config.definition_files,
            vec![PathBuf::from("routes/breadcrumbs.toml")]
        );
    }
}
