//! Parser for npm package.json files.

use std::fs;
use std::path::{Path, PathBuf};

use super::types::PackageJson;

/// File name of the npm manifest.
pub const MANIFEST_NAME: &str = "package.json";

/// Errors that can occur during package.json parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read the file from disk.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse JSON content.
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a package.json file from a file path.
pub fn parse_file(path: &Path) -> ParseResult<PackageJson> {
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parses a package.json from a string.
///
/// Unknown fields are ignored and missing dependency maps read as empty.
///
/// # Example
///
/// ```
/// use compscope::parser::package_json::parse_str;
///
/// let pkg = parse_str(r#"{"name": "my-app", "version": "1.0.0"}"#).unwrap();
/// assert_eq!(pkg.name, Some("my-app".to_string()));
/// assert!(pkg.dependencies.is_empty());
/// ```
pub fn parse_str(content: &str) -> ParseResult<PackageJson> {
    let pkg: PackageJson = serde_json::from_str(content)?;
    Ok(pkg)
}

/// Location of the manifest directly under a project root.
pub fn manifest_path(root: &Path) -> PathBuf {
    root.join(MANIFEST_NAME)
}

/// Reads the manifest at the project root, if there is one.
///
/// Returns `Ok(None)` when the root has no package.json. A manifest that
/// exists but cannot be read or parsed is an error.
pub fn find_in(root: &Path) -> ParseResult<Option<PackageJson>> {
    let path = manifest_path(root);
    if !path.is_file() {
        log::debug!("No {} under {}", MANIFEST_NAME, root.display());
        return Ok(None);
    }

    parse_file(&path).map(Some)
}
