//! Parser module for package manifests.
//!
//! Reads a project's `package.json` into [`PackageJson`], keeping only the
//! fields the project profile looks at.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use compscope::parser::find_in;
//!
//! if let Some(pkg) = find_in(Path::new("my-app")).unwrap() {
//!     println!("uses vite: {}", pkg.has_dependency("vite"));
//! }
//! ```

pub mod package_json;
pub mod types;

pub use package_json::{find_in, manifest_path, parse_file, parse_str, ParseError, ParseResult};

pub use types::PackageJson;
