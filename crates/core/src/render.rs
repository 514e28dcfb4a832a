//! Trail rendering collaborator
//!
//! The manager hands a generated trail to a [`TrailRenderer`] together with a
//! template identifier and returns whatever artifact the renderer produces.
//! The core ships [`FormatRenderer`], which treats template ids as output
//! format names; web deployments substitute their own templating engine.

use crate::models::Trail;
use crate::output::{format_trail, FormatError, OutputFormat};
use thiserror::Error;

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// The renderer does not know the requested template id
    #[error("no template registered with id `{0}`")]
    UnknownTemplate(String),

    /// An output formatter failed
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A caller-supplied renderer failed
    #[error(transparent)]
    Custom(#[from] anyhow::Error),
}

/// Renders a generated trail into a final artifact
pub trait TrailRenderer: Send + Sync {
    /// Render `trail` using the template identified by `template`
    fn render(&self, template: &str, trail: &Trail) -> Result<String, RenderError>;
}

impl<F> TrailRenderer for F
where
    F: Fn(&str, &Trail) -> Result<String, RenderError> + Send + Sync,
{
    fn render(&self, template: &str, trail: &Trail) -> Result<String, RenderError> {
        self(template, trail)
    }
}

/// A renderer backed by the built-in output formatters
///
/// Template ids are output format names ("json", "yaml", "ansi", "text");
/// anything else fails with [`RenderError::UnknownTemplate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatRenderer;

impl TrailRenderer for FormatRenderer {
    fn render(&self, template: &str, trail: &Trail) -> Result<String, RenderError> {
        let format = OutputFormat::from_name(template)
            .ok_or_else(|| RenderError::UnknownTemplate(template.to_string()))?;

        format_trail(trail, format).map_err(RenderError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trail() -> Trail {
        let mut trail = Trail::new();
        trail.push(("Home", "/"));
        trail.push("Blog");
        trail
    }

    #[test]
    fn test_format_renderer_text() {
        let out = FormatRenderer.render("text", &sample_trail()).unwrap();
        assert_eq!(out, "Home > Blog");
    }

    #[test]
    fn test_format_renderer_unknown_template() {
        let err = FormatRenderer.render("blade", &sample_trail()).unwrap_err();
        assert!(matches!(err, RenderError::UnknownTemplate(id) if id == "blade"));
    }

    #[test]
    fn test_closure_renderer() {
        let renderer = |template: &str, trail: &Trail| -> Result<String, RenderError> {
            Ok(format!("{}:{}", template, trail.len()))
        };

        let out = renderer.render("custom", &sample_trail()).unwrap();
        assert_eq!(out, "custom:2");
    }
}
