//! Trail generation engine
//!
//! This module owns the breadcrumb resolution algorithm: looking up the
//! requested name in the callback registry, recursively walking parent
//! declarations, accumulating crumbs in root-to-leaf order, guarding against
//! cycles, and running before/after hooks around the resolved chain.

use crate::models::{Crumb, Trail};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// A registered trail callback
///
/// Invoked with a [`TrailScope`] capability handle and the positional
/// parameters supplied to `generate` (or declared by a child's parent
/// reference). Errors raised by the callback abort the whole generation and
/// reach the caller unwrapped.
pub type TrailCallback =
    Box<dyn Fn(&mut TrailScope, &[Value]) -> anyhow::Result<()> + Send + Sync>;

/// A before/after hook
///
/// Hooks receive the in-progress trail and may push crumbs onto it. They get
/// no parameters and no parent-declaration capability; their role is
/// augmentation only.
pub type TrailHook = Box<dyn Fn(&mut Trail) -> anyhow::Result<()> + Send + Sync>;

/// The name-to-callback registry consumed by [`generate`]
pub type Registry = HashMap<String, TrailCallback>;

/// Generation errors
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The requested or parent-referenced name has no registered callback
    #[error("no breadcrumb registered with name `{0}`")]
    UnknownName(String),

    /// A parent-reference chain revisited a name already in the chain
    #[error("circular breadcrumb reference: {}", .chain.join(" -> "))]
    CircularReference {
        /// The ancestor chain up to and including the revisited name
        chain: Vec<String>,
    },

    /// An error raised by a caller-supplied callback or hook, passed through
    #[error(transparent)]
    Callback(#[from] anyhow::Error),
}

/// Capability handle passed to trail callbacks
///
/// Exposes exactly two operations: pushing crumbs and declaring a parent.
/// Pushes are buffered locally and spliced in after the parent subtree is
/// resolved, so the final order is always parent-first regardless of whether
/// the callback body calls `parent()` before or after its `push()` calls.
#[derive(Default)]
pub struct TrailScope {
    crumbs: Vec<Crumb>,
    parent: Option<(String, Vec<Value>)>,
}

impl TrailScope {
    fn new() -> Self {
        Self::default()
    }

    /// Append a crumb for the current breadcrumb, in call order
    pub fn push(&mut self, crumb: impl Into<Crumb>) {
        self.crumbs.push(crumb.into());
    }

    /// Declare a parameterless parent breadcrumb
    ///
    /// At most one parent takes effect per callback invocation; a later
    /// declaration replaces an earlier one.
    pub fn parent(&mut self, name: impl Into<String>) {
        self.parent = Some((name.into(), Vec::new()));
    }

    /// Declare a parent breadcrumb with its own positional parameters
    pub fn parent_with(&mut self, name: impl Into<String>, params: Vec<Value>) {
        self.parent = Some((name.into(), params));
    }

    fn into_parts(self) -> (Vec<Crumb>, Option<(String, Vec<Value>)>) {
        (self.crumbs, self.parent)
    }
}

/// Generate the trail for `name` from the given registry and hooks
///
/// Runs the `before` hooks in registration order, resolves the requested
/// callback and its ancestor chain depth-first, runs the `after` hooks, and
/// returns the accumulated trail. Fails with [`GenerateError::UnknownName`]
/// when `name` (or any parent-referenced name) is not registered and with
/// [`GenerateError::CircularReference`] when the ancestor chain revisits a
/// name. No partial trail is returned on failure.
pub fn generate(
    registry: &Registry,
    before: &[TrailHook],
    after: &[TrailHook],
    name: &str,
    params: &[Value],
) -> Result<Trail, GenerateError> {
    let mut trail = Trail::new();

    for hook in before {
        hook(&mut trail)?;
    }

    let mut chain = Vec::new();
    let crumbs = resolve(registry, name, params, &mut chain)?;
    trail.extend(crumbs);

    for hook in after {
        hook(&mut trail)?;
    }

    Ok(trail)
}

/// Resolve one name into its flattened crumb sequence, parents first
///
/// `chain` carries the names already visited on the path from the originally
/// requested name; recursion depth is bounded by the cycle guard alone.
fn resolve(
    registry: &Registry,
    name: &str,
    params: &[Value],
    chain: &mut Vec<String>,
) -> Result<Vec<Crumb>, GenerateError> {
    if chain.iter().any(|visited| visited == name) {
        let mut cycle = chain.clone();
        cycle.push(name.to_string());
        return Err(GenerateError::CircularReference { chain: cycle });
    }

    let callback = registry
        .get(name)
        .ok_or_else(|| GenerateError::UnknownName(name.to_string()))?;

    chain.push(name.to_string());

    let mut scope = TrailScope::new();
    callback(&mut scope, params)?;
    let (own_crumbs, parent) = scope.into_parts();

    let mut crumbs = Vec::new();
    if let Some((parent_name, parent_params)) = parent {
        crumbs.extend(resolve(registry, &parent_name, &parent_params, chain)?);
    }
    crumbs.extend(own_crumbs);

    Ok(crumbs)
}
