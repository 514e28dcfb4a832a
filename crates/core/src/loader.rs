//! Declarative definition loader
//!
//! Breadcrumb definitions are normally registered in code during startup. For
//! deployments that prefer configuration, this module loads a definitions
//! file (TOML or JSON, chosen by extension) and registers one static callback
//! per entry. `title` and `url` may contain positional placeholders `{0}`,
//! `{1}`, ... which are substituted from the generation parameters; unmatched
//! placeholders are left untouched. Unless an entry pins `parent_params`, the
//! full parameter list is passed through to the declared parent.
//!
//! TOML files use a `[[breadcrumb]]` array of tables; JSON files are a plain
//! array of definition objects.

use crate::manager::BreadcrumbManager;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use thiserror::Error;

/// Loader errors
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("unsupported definitions format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid TOML definitions: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("invalid JSON definitions: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// One declarative breadcrumb definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrumbDef {
    /// Registration name, the unique key
    pub name: String,

    /// Name of the parent breadcrumb, if any
    #[serde(default)]
    pub parent: Option<String>,

    /// Parameters for the parent; defaults to passing the caller's through
    #[serde(default)]
    pub parent_params: Option<Vec<Value>>,

    /// Item title, with optional `{n}` placeholders
    #[serde(default)]
    pub title: Option<String>,

    /// Item url, with optional `{n}` placeholders
    #[serde(default)]
    pub url: Option<String>,

    /// Extra item attributes
    #[serde(default)]
    pub attrs: Map<String, Value>,
}

impl CrumbDef {
    /// Whether this definition contributes an item to the trail
    fn pushes_item(&self) -> bool {
        self.title.is_some() || self.url.is_some() || !self.attrs.is_empty()
    }
}

#[derive(Deserialize)]
struct DefinitionFile {
    #[serde(default, rename = "breadcrumb")]
    breadcrumbs: Vec<CrumbDef>,
}

/// Load definitions from a TOML or JSON file
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<CrumbDef>, LoaderError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let content = std::fs::read_to_string(path)?;

    match ext.as_str() {
        "toml" => {
            let file: DefinitionFile = toml::from_str(&content)?;
            Ok(file.breadcrumbs)
        }
        "json" => Ok(serde_json::from_str(&content)?),
        other => Err(LoaderError::UnsupportedFormat(other.to_string())),
    }
}

/// Register every definition with the manager
///
/// Registration order follows file order, so a name defined twice resolves to
/// its last definition, consistent with the manager's overwrite policy.
pub fn install(defs: Vec<CrumbDef>, manager: &mut BreadcrumbManager) {
    for def in defs {
        let name = def.name.clone();
        manager.register(name, move |trail, params| {
            if let Some(parent) = &def.parent {
                let parent_params = match &def.parent_params {
                    Some(pinned) => pinned.clone(),
                    None => params.to_vec(),
                };
                trail.parent_with(parent.clone(), parent_params);
            }

            if def.pushes_item() {
                trail.push(crate::models::Crumb {
                    title: def.title.as_deref().map(|t| substitute(t, params)),
                    url: def.url.as_deref().map(|u| substitute(u, params)),
                    attrs: def.attrs.clone(),
                });
            }

            Ok(())
        });
    }
}

/// Load a definitions file and register its entries with the manager
pub fn load_into(path: impl AsRef<Path>, manager: &mut BreadcrumbManager) -> Result<(), LoaderError> {
    let defs = load_file(path)?;
    install(defs, manager);
    Ok(())
}

/// Substitute `{n}` placeholders with the n-th parameter
///
/// String parameters are inserted verbatim; other values use their compact
/// JSON form.
fn substitute(template: &str, params: &[Value]) -> String {
    let mut out = template.to_string();
    for (idx, param) in params.iter().enumerate() {
        let placeholder = format!("{{{idx}}}");
        if out.contains(&placeholder) {
            out = out.replace(&placeholder, &value_text(param));
        }
    }
    out
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{content}").unwrap();
        path
    }

    #[test]
    fn test_substitute_placeholders() {
        assert_eq!(
            substitute("Post {0} by {1}", &[json!("Hello"), json!("Ann")]),
            "Post Hello by Ann"
        );
        assert_eq!(substitute("/post/{0}", &[json!(7)]), "/post/7");
        // Unmatched placeholders stay put rather than panicking.
        assert_eq!(substitute("Post {0}", &[]), "Post {0}");
    }

    #[test]
    fn test_load_toml_definitions_and_generate() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "breadcrumbs.toml",
            r#"
[[breadcrumb]]
name = "home"
title = "Home"
url = "/"

[[breadcrumb]]
name = "blog"
parent = "home"
title = "Blog"
url = "/blog"

[[breadcrumb]]
name = "post"
parent = "blog"
title = "Post {0}"
url = "/blog/{0}"

[breadcrumb.attrs]
icon = "article"
"#,
        );

        let mut manager = BreadcrumbManager::new();
        load_into(&path, &mut manager).unwrap();

        let trail = manager.generate(Some("post"), &[json!("42")]).unwrap();

        assert_eq!(
            serde_json::to_value(&trail).unwrap(),
            json!([
                {"title": "Home", "url": "/"},
                {"title": "Blog", "url": "/blog"},
                {"title": "Post 42", "url": "/blog/42", "icon": "article"}
            ])
        );
    }

    #[test]
    fn test_load_json_definitions() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "breadcrumbs.json",
            r#"[
                {"name": "home", "title": "Home", "url": "/"},
                {"name": "about", "parent": "home", "title": "About"}
            ]"#,
        );

        let mut manager = BreadcrumbManager::new();
        load_into(&path, &mut manager).unwrap();

        let trail = manager.generate(Some("about"), &[]).unwrap();
        assert_eq!(trail.len(), 2);
        assert_eq!(trail.current().unwrap().url, None);
    }

    #[test]
    fn test_pinned_parent_params() {
        let defs = vec![
            CrumbDef {
                name: "section".to_string(),
                parent: None,
                parent_params: None,
                title: Some("Section {0}".to_string()),
                url: None,
                attrs: Map::new(),
            },
            CrumbDef {
                name: "page".to_string(),
                parent: Some("section".to_string()),
                parent_params: Some(vec![json!("news")]),
                title: Some("Page {0}".to_string()),
                url: None,
                attrs: Map::new(),
            },
        ];

        let mut manager = BreadcrumbManager::new();
        install(defs, &mut manager);

        let trail = manager.generate(Some("page"), &[json!("two")]).unwrap();
        let titles: Vec<_> = trail.iter().map(|c| c.display().to_string()).collect();
        assert_eq!(titles, vec!["Section news", "Page two"]);
    }

    #[test]
    fn test_unsupported_extension_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "breadcrumbs.ini", "[breadcrumb]\n");

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, LoaderError::UnsupportedFormat(ext) if ext == "ini"));
    }

    #[test]
    fn test_entry_without_item_contributes_nothing() {
        let defs = vec![CrumbDef {
            name: "ghost".to_string(),
            parent: None,
            parent_params: None,
            title: None,
            url: None,
            attrs: Map::new(),
        }];

        let mut manager = BreadcrumbManager::new();
        install(defs, &mut manager);

        let trail = manager.generate(Some("ghost"), &[]).unwrap();
        assert!(trail.is_empty());
    }
}
