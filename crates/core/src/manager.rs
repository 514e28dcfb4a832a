//! Breadcrumb registry and manager
//!
//! The manager owns the name-to-callback registry and the before/after hook
//! lists, delegates trail resolution to the generator, and optionally hands
//! generated trails to a rendering collaborator. Registration is a
//! setup-phase concern: the expected usage is to register everything before
//! serving begins, then call `generate`/`render` per request. The manager is
//! not internally synchronized; callers that share one across threads wrap
//! it themselves.

use crate::config::BreadcrumbConfig;
use crate::context::RouteContext;
use crate::generator::{self, GenerateError, Registry, TrailHook, TrailScope};
use crate::loader::{self, LoaderError};
use crate::models::Trail;
use crate::render::{FormatRenderer, RenderError, TrailRenderer};
use serde_json::Value;
use thiserror::Error;

/// Manager errors
#[derive(Error, Debug)]
pub enum ManagerError {
    /// Trail generation failed; the generator's error is passed through
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// No explicit name was given and the route context supplied none
    #[error("no breadcrumb name given and none derivable from the current route")]
    NoName,

    /// Render was requested but no renderer is configured
    #[error("no renderer configured")]
    NoRenderer,

    /// The rendering collaborator failed
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// The breadcrumb registry and public API
pub struct BreadcrumbManager {
    registry: Registry,
    before: Vec<TrailHook>,
    after: Vec<TrailHook>,
    context: Option<Box<dyn RouteContext>>,
    renderer: Option<Box<dyn TrailRenderer>>,
    default_template: String,
    current: Option<String>,
}

impl Default for BreadcrumbManager {
    fn default() -> Self {
        Self::new()
    }
}

impl BreadcrumbManager {
    /// Create an empty manager with no renderer and no route context
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            before: Vec::new(),
            after: Vec::new(),
            context: None,
            renderer: None,
            default_template: "text".to_string(),
            current: None,
        }
    }

    /// Create a manager from a config: loads every definition file and
    /// installs the built-in format renderer
    pub fn from_config(config: &BreadcrumbConfig) -> Result<Self, LoaderError> {
        let mut manager = Self::new()
            .with_renderer(FormatRenderer)
            .with_default_template(&config.default_template);

        for path in &config.definition_files {
            loader::load_into(path, &mut manager)?;
        }

        Ok(manager)
    }

    /// Set the route context collaborator (builder pattern)
    pub fn with_context(mut self, context: impl RouteContext + 'static) -> Self {
        self.context = Some(Box::new(context));
        self
    }

    /// Set the rendering collaborator (builder pattern)
    pub fn with_renderer(mut self, renderer: impl TrailRenderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Set the default template id used by `render` (builder pattern)
    pub fn with_default_template(mut self, template: impl Into<String>) -> Self {
        self.default_template = template.into();
        self
    }

    /// Register a trail callback under `name`
    ///
    /// Registering a second callback under the same name silently replaces
    /// the first: the last registration wins.
    pub fn register<F>(&mut self, name: impl Into<String>, callback: F)
    where
        F: Fn(&mut TrailScope, &[Value]) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.registry.insert(name.into(), Box::new(callback));
    }

    /// Append a hook that runs before every generation, in registration order
    pub fn register_before<F>(&mut self, hook: F)
    where
        F: Fn(&mut Trail) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.before.push(Box::new(hook));
    }

    /// Append a hook that runs after every generation, in registration order
    pub fn register_after<F>(&mut self, hook: F)
    where
        F: Fn(&mut Trail) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.after.push(Box::new(hook));
    }

    /// Whether `name` (or the context-derived name, when omitted) is registered
    pub fn exists(&self, name: Option<&str>) -> bool {
        match self.resolve_name(name) {
            Some(name) => self.registry.contains_key(&name),
            None => false,
        }
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.registry.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Generate the trail for `name` (or the context-derived name)
    ///
    /// Records the resolved name for [`current`](Self::current); the record
    /// is cleared when the call fails before a name is determined.
    pub fn generate(&mut self, name: Option<&str>, params: &[Value]) -> Result<Trail, ManagerError> {
        self.current = None;
        let name = self.resolve_name(name).ok_or(ManagerError::NoName)?;
        self.current = Some(name.clone());

        generator::generate(&self.registry, &self.before, &self.after, &name, params)
            .map_err(ManagerError::from)
    }

    /// Generate the trail for `name` and render it with an explicit template
    pub fn view(
        &mut self,
        template: &str,
        name: Option<&str>,
        params: &[Value],
    ) -> Result<String, ManagerError> {
        let trail = self.generate(name, params)?;
        let renderer = self.renderer.as_ref().ok_or(ManagerError::NoRenderer)?;
        Ok(renderer.render(template, &trail)?)
    }

    /// Generate the trail for `name` and render it with the default template
    pub fn render(&mut self, name: Option<&str>, params: &[Value]) -> Result<String, ManagerError> {
        let template = self.default_template.clone();
        self.view(&template, name, params)
    }

    /// The name used by the most recent generate/render call
    ///
    /// `None` if no generation has occurred yet or the most recent call
    /// failed before a name was determined.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Remove all registrations and hooks
    pub fn clear(&mut self) {
        self.registry.clear();
        self.before.clear();
        self.after.clear();
        self.current = None;
    }

    fn resolve_name(&self, name: Option<&str>) -> Option<String> {
        match name {
            Some(name) => Some(name.to_string()),
            None => self.context.as_ref().and_then(|ctx| ctx.current_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::StaticContext;
    use serde_json::json;

    fn manager_with_blog() -> BreadcrumbManager {
        let mut manager = BreadcrumbManager::new();
        manager.register("home", |trail, _| {
            trail.push(("Home", "/"));
            Ok(())
        });
        manager.register("blog", |trail, _| {
            trail.parent("home");
            trail.push(("Blog", "/blog"));
            Ok(())
        });
        manager
    }

    fn titles(trail: &Trail) -> Vec<String> {
        trail
            .iter()
            .map(|c| c.title.clone().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_generate_by_explicit_name() {
        let mut manager = manager_with_blog();
        let trail = manager.generate(Some("blog"), &[]).unwrap();

        assert_eq!(titles(&trail), vec!["Home", "Blog"]);
    }

    #[test]
    fn test_last_registration_wins() {
        let mut manager = BreadcrumbManager::new();
        manager.register("page", |trail, _| {
            trail.push("First");
            Ok(())
        });
        manager.register("page", |trail, _| {
            trail.push("Second");
            Ok(())
        });

        let trail = manager.generate(Some("page"), &[]).unwrap();
        assert_eq!(titles(&trail), vec!["Second"]);
    }

    #[test]
    fn test_exists() {
        let manager = manager_with_blog();

        assert!(manager.exists(Some("blog")));
        assert!(!manager.exists(Some("shop")));
        assert!(!manager.exists(None));
    }

    #[test]
    fn test_exists_with_route_context() {
        let manager = manager_with_blog().with_context(StaticContext::new("blog"));
        assert!(manager.exists(None));

        let manager = manager_with_blog().with_context(StaticContext::new("shop"));
        assert!(!manager.exists(None));
    }

    #[test]
    fn test_generate_with_context_derived_name() {
        let mut manager = manager_with_blog().with_context(StaticContext::new("blog"));

        let trail = manager.generate(None, &[]).unwrap();
        assert_eq!(titles(&trail), vec!["Home", "Blog"]);
        assert_eq!(manager.current(), Some("blog"));
    }

    #[test]
    fn test_generate_without_name_or_context_fails() {
        let mut manager = manager_with_blog();

        let err = manager.generate(None, &[]).unwrap_err();
        assert!(matches!(err, ManagerError::NoName));
        assert_eq!(manager.current(), None);
    }

    #[test]
    fn test_current_tracks_most_recent_call() {
        let mut manager = manager_with_blog();
        assert_eq!(manager.current(), None);

        manager.generate(Some("blog"), &[]).unwrap();
        assert_eq!(manager.current(), Some("blog"));

        // Name was determined before the lookup failed, so it stays recorded.
        let err = manager.generate(Some("missing"), &[]).unwrap_err();
        assert!(matches!(err, ManagerError::Generate(_)));
        assert_eq!(manager.current(), Some("missing"));
    }

    #[test]
    fn test_hooks_wrap_generation() {
        let mut manager = BreadcrumbManager::new();
        manager.register("blog", |trail, _| {
            trail.push(("Blog", "/blog"));
            Ok(())
        });
        manager.register_before(|trail| {
            trail.push(("Home", "/"));
            Ok(())
        });
        manager.register_after(|trail| {
            trail.push(("Page 2", "/page-2"));
            Ok(())
        });

        let trail = manager.generate(Some("blog"), &[]).unwrap();
        assert_eq!(titles(&trail), vec!["Home", "Blog", "Page 2"]);
    }

    #[test]
    fn test_render_uses_default_template() {
        let mut manager = manager_with_blog().with_renderer(FormatRenderer);

        let out = manager.render(Some("blog"), &[]).unwrap();
        assert_eq!(out, "Home > Blog");
    }

    #[test]
    fn test_view_with_explicit_template() {
        let mut manager = manager_with_blog().with_renderer(FormatRenderer);

        let out = manager.view("json", Some("blog"), &[]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            parsed,
            json!([
                {"title": "Home", "url": "/"},
                {"title": "Blog", "url": "/blog"}
            ])
        );
    }

    #[test]
    fn test_render_without_renderer_fails() {
        let mut manager = manager_with_blog();

        let err = manager.render(Some("blog"), &[]).unwrap_err();
        assert!(matches!(err, ManagerError::NoRenderer));
    }

    #[test]
    fn test_params_reach_the_callback() {
        let mut manager = BreadcrumbManager::new();
        manager.register("post", |trail, params| {
            let id = params
                .first()
                .and_then(Value::as_u64)
                .ok_or_else(|| anyhow::anyhow!("post callback needs an id"))?;
            trail.push((format!("Post {id}"), format!("/post/{id}")));
            Ok(())
        });

        let trail = manager.generate(Some("post"), &[json!(7)]).unwrap();
        assert_eq!(titles(&trail), vec!["Post 7"]);

        // Arity mismatch fails clearly instead of padding.
        let err = manager.generate(Some("post"), &[]).unwrap_err();
        assert!(matches!(err, ManagerError::Generate(GenerateError::Callback(_))));
    }

    #[test]
    fn test_clear_removes_registrations_and_hooks() {
        let mut manager = manager_with_blog();
        manager.register_before(|trail| {
            trail.push(("Home", "/"));
            Ok(())
        });

        manager.clear();

        assert!(!manager.exists(Some("blog")));
        assert!(manager.names().is_empty());
        assert_eq!(manager.current(), None);
    }

    #[test]
    fn test_names_are_sorted() {
        let manager = manager_with_blog();
        assert_eq!(manager.names(), vec!["blog", "home"]);
    }
}
