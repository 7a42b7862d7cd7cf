//! Manifest types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The parts of a package.json that matter for profiling a project.
///
/// Dependency maps keep the order the manifest declares them in.
///
/// # Example
///
/// ```
/// use compscope::parser::types::PackageJson;
///
/// let json = r#"{"name": "shop", "dependencies": {"react": "^18.2.0"}}"#;
/// let pkg: PackageJson = serde_json::from_str(json).unwrap();
/// assert_eq!(pkg.name.as_deref(), Some("shop"));
/// assert!(pkg.has_dependency("react"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PackageJson {
    /// The name of the package.
    pub name: Option<String>,

    /// The version of the package (semver format).
    pub version: Option<String>,

    /// Runtime dependencies.
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,

    /// Development-only dependencies (bundlers, test runners, etc.).
    #[serde(rename = "devDependencies", default)]
    pub dev_dependencies: IndexMap<String, String>,

    /// Every other top-level field, kept as raw JSON.
    #[serde(flatten)]
    pub other: IndexMap<String, serde_json::Value>,
}

impl PackageJson {
    /// Returns true for a manifest with no fields at all (`{}`).
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.version.is_none()
            && self.dependencies.is_empty()
            && self.dev_dependencies.is_empty()
            && self.other.is_empty()
    }

    /// Returns true if the package is listed in `dependencies` or
    /// `devDependencies`.
    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }

    /// Returns true if any of the given packages is declared.
    pub fn has_any(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.has_dependency(name))
    }

    /// Names of runtime dependencies, in declaration order.
    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies.keys().map(String::as_str)
    }
}
