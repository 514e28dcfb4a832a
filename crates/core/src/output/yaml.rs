//! YAML output formatter

use crate::models::Trail;
use crate::output::FormatError;

/// Format a trail as YAML
pub fn format_yaml(trail: &Trail) -> Result<String, FormatError> {
    serde_yaml::to_string(trail).map_err(FormatError::from)
}
