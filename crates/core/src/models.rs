//! Data models for breadcrumb trails
//!
//! This module defines the core data structures shared across the crate:
//! individual breadcrumb items and the ordered trail produced by one
//! generation call.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single breadcrumb item in a trail
///
/// Every crumb carries a `title` and a `url`, either of which may be null,
/// plus an open-ended set of extra attributes (an icon, a CSS class, ...)
/// supplied by the registering callback. The extra attributes are flattened
/// into the crumb on serialization, so a crumb serializes as one flat object:
/// `{"title": "Blog", "url": "/blog", "icon": "blog"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crumb {
    /// Display title for the item (null is legal but unusual)
    #[serde(default)]
    pub title: Option<String>,

    /// Link target; null for non-clickable items such as the current page
    #[serde(default)]
    pub url: Option<String>,

    /// Caller-defined extra attributes, flattened alongside title/url
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub attrs: Map<String, Value>,
}

impl Crumb {
    /// Create a crumb with a title and no url
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            url: None,
            attrs: Map::new(),
        }
    }

    /// Create a crumb with neither title nor url
    pub fn untitled() -> Self {
        Self {
            title: None,
            url: None,
            attrs: Map::new(),
        }
    }

    /// Set the url (builder pattern)
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Add an extra attribute (builder pattern)
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Get display text for this crumb
    pub fn display(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Whether the crumb links anywhere
    pub fn is_link(&self) -> bool {
        self.url.is_some()
    }
}

impl From<&str> for Crumb {
    fn from(title: &str) -> Self {
        Crumb::new(title)
    }
}

impl From<String> for Crumb {
    fn from(title: String) -> Self {
        Crumb::new(title)
    }
}

impl From<(&str, &str)> for Crumb {
    fn from((title, url): (&str, &str)) -> Self {
        Crumb::new(title).with_url(url)
    }
}

impl From<(String, String)> for Crumb {
    fn from((title, url): (String, String)) -> Self {
        Crumb::new(title).with_url(url)
    }
}

/// The ordered sequence of crumbs produced by one generation call
///
/// Insertion order is display order: the ultimate ancestor comes first and
/// the current page last. A trail is created at the start of a generation
/// call and handed to the caller at its end; it is never reused across calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trail {
    crumbs: Vec<Crumb>,
}

impl Trail {
    /// Create an empty trail
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a crumb to the end of the trail
    pub fn push(&mut self, crumb: impl Into<Crumb>) {
        self.crumbs.push(crumb.into());
    }

    /// Append a sequence of crumbs, preserving their order
    pub fn extend(&mut self, crumbs: impl IntoIterator<Item = Crumb>) {
        self.crumbs.extend(crumbs);
    }

    /// Number of crumbs in the trail
    pub fn len(&self) -> usize {
        self.crumbs.len()
    }

    /// Whether the trail contains no crumbs
    pub fn is_empty(&self) -> bool {
        self.crumbs.is_empty()
    }

    /// Iterate over the crumbs in display order
    pub fn iter(&self) -> std::slice::Iter<'_, Crumb> {
        self.crumbs.iter()
    }

    /// The crumbs as a slice, in display order
    pub fn crumbs(&self) -> &[Crumb] {
        &self.crumbs
    }

    /// The last crumb, conventionally the current page
    pub fn current(&self) -> Option<&Crumb> {
        self.crumbs.last()
    }

    /// Titles joined with " > ", for plain-text display
    pub fn path(&self) -> String {
        self.crumbs
            .iter()
            .map(Crumb::display)
            .collect::<Vec<_>>()
            .join(" > ")
    }
}

impl IntoIterator for Trail {
    type Item = Crumb;
    type IntoIter = std::vec::IntoIter<Crumb>;

    fn into_iter(self) -> Self::IntoIter {
        self.crumbs.into_iter()
    }
}

impl<'a> IntoIterator for &'a Trail {
    type Item = &'a Crumb;
    type IntoIter = std::slice::Iter<'a, Crumb>;

    fn into_iter(self) -> Self::IntoIter {
        self.crumbs.iter()
    }
}
