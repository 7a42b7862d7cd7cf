//! Project file discovery and reading.
//!
//! Walks a project root, skipping build output and vendored directories,
//! and hands each eligible file's text to the analysis as a [`SourceFile`].

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// Errors that can occur while scanning a project.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("File is not valid UTF-8: {path}")]
    InvalidEncoding { path: String },
}

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Extensions of files that can define markup components.
pub const COMPONENT_EXTENSIONS: &[&str] = &["tsx", "jsx"];

/// Extensions considered when profiling a whole project.
pub const SCRIPT_EXTENSIONS: &[&str] = &["tsx", "jsx", "ts", "js"];

/// Directory names never descended into.
pub const IGNORED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    ".next",
    "coverage",
    ".turbo",
];

/// Which files a scan picks up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Accepted file extensions, without the leading dot
    pub extensions: Vec<String>,
}

impl ScanOptions {
    /// Options for component graph analysis (`.tsx`, `.jsx`).
    pub fn components() -> Self {
        Self::with_extensions(COMPONENT_EXTENSIONS)
    }

    /// Options for project profiling (`.tsx`, `.jsx`, `.ts`, `.js`).
    pub fn scripts() -> Self {
        Self::with_extensions(SCRIPT_EXTENSIONS)
    }

    pub fn with_extensions(extensions: &[&str]) -> Self {
        Self {
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Returns true if the path has an accepted extension.
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|accepted| accepted == ext))
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::components()
    }
}

/// One file's text with its location relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path relative to the project root, `/`-separated
    pub relative_path: String,
    /// Full file contents
    pub text: String,
}

impl SourceFile {
    pub fn new(relative_path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            text: text.into(),
        }
    }
}

/// Lists eligible files under `root`, sorted by path.
///
/// Hidden files and ignored directories are skipped. Entries that cannot be
/// visited (permissions, broken links) are logged and skipped.
pub fn collect_source_files(root: &Path, options: &ScanOptions) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_ignored_dir(e))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() || is_hidden(&entry) {
            continue;
        }

        if options.accepts(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files
}

/// Reads every eligible file under `root`.
///
/// Fails only when `root` itself does not exist. Files that cannot be read
/// or are not valid UTF-8 are logged and left out.
pub fn read_sources(root: &Path, options: &ScanOptions) -> AnalysisResult<Vec<SourceFile>> {
    if !root.exists() {
        return Err(AnalysisError::PathNotFound(root.display().to_string()));
    }

    let mut sources = Vec::new();
    for path in collect_source_files(root, options) {
        match read_source(&path) {
            Ok(text) => sources.push(SourceFile::new(relative_path(root, &path), text)),
            Err(e) => log::warn!("Skipping {}: {}", path.display(), e),
        }
    }

    log::debug!("Read {} source files under {}", sources.len(), root.display());
    Ok(sources)
}

/// Reads one file as UTF-8 text.
pub fn read_source(path: &Path) -> AnalysisResult<String> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| AnalysisError::InvalidEncoding {
        path: path.display().to_string(),
    })
}

/// Renders `path` relative to `root` with `/` separators.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Check if a directory should be ignored during traversal.
fn is_ignored_dir(entry: &walkdir::DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }

    let name = entry.file_name().to_string_lossy();
    IGNORED_DIRS.contains(&name.as_ref())
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}
