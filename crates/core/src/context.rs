//! Route context collaborator
//!
//! When `generate`/`render`/`exists` are called without an explicit name, the
//! manager asks an optional [`RouteContext`] for one. In a web deployment the
//! implementation typically reads the current route name from the framework's
//! request state; the core only consumes the answer.

/// Supplies a default breadcrumb name derived from the current request
pub trait RouteContext: Send + Sync {
    /// The breadcrumb name for the current request, if one can be derived
    fn current_name(&self) -> Option<String>;
}

impl<F> RouteContext for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn current_name(&self) -> Option<String> {
        self()
    }
}

/// A context that always reports the same name
///
/// Useful for tests and for the CLI, where the "route" is a flag.
pub struct StaticContext {
    name: String,
}

impl StaticContext {
    /// Create a context fixed to `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl RouteContext for StaticContext {
    fn current_name(&self) -> Option<String> {
        Some(self.name.clone())
    }
}
