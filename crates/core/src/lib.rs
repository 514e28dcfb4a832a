//! crumbtrail-core - Named hierarchical breadcrumb trail generation
//!
//! This crate builds the breadcrumb trail for a web page view from a registry
//! of named callbacks. Each callback may declare a parameterized parent
//! breadcrumb and push items onto the trail; generation resolves the
//! requested name into an ordered, flattened item sequence by walking parent
//! links recursively, root first.
//!
//! # Features
//!
//! - **Named callbacks**: register a callback per page, compose pages via
//!   parent declarations.
//! - **Deterministic ordering**: before hooks, then the ancestor chain from
//!   ultimate root to current page, then after hooks.
//! - **Cycle and missing-name detection**: generation fails fast, no partial
//!   trails.
//! - **Declarative definitions**: optionally load breadcrumbs from TOML or
//!   JSON files instead of code.
//! - **Multiple output formats**: JSON, YAML, ANSI, and plain text, plus a
//!   renderer trait for custom templating.
//!
//! # Example
//!
//! ```rust
//! use crumbtrail_core::BreadcrumbManager;
//!
//! let mut breadcrumbs = BreadcrumbManager::new();
//!
//! breadcrumbs.register("home", |trail, _params| {
//!     trail.push(("Home", "/"));
//!     Ok(())
//! });
//!
//! breadcrumbs.register("blog", |trail, _params| {
//!     trail.parent("home");
//!     trail.push(("Blog", "/blog"));
//!     Ok(())
//! });
//!
//! let trail = breadcrumbs.generate(Some("blog"), &[]).unwrap();
//! assert_eq!(trail.path(), "Home > Blog");
//! ```

pub mod config;
pub mod context;
pub mod generator;
pub mod loader;
pub mod manager;
pub mod models;
pub mod output;
pub mod render;

// Re-exports for convenience
pub use config::{BreadcrumbConfig, ConfigError};
pub use context::{RouteContext, StaticContext};
pub use generator::{generate, GenerateError, Registry, TrailCallback, TrailHook, TrailScope};
pub use loader::{install, load_file, load_into, CrumbDef, LoaderError};
pub use manager::{BreadcrumbManager, ManagerError};
pub use models::{Crumb, Trail};
pub use output::{format_trail, FormatError, OutputFormat};
pub use render::{FormatRenderer, RenderError, TrailRenderer};
