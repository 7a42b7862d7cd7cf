//! Source code analysis module for compscope.
//!
//! This module turns raw component source text into structural facts and
//! runs the project-wide analysis pipeline. It works on text with regular
//! expressions rather than a parser, so results are approximate: the goal
//! is a stable, explainable heuristic.
//!
//! # Features
//!
//! - Classify files as function or class components
//! - Extract relative imports, referenced markup tags and destructured props
//! - Build a component index keyed by file stem
//! - Run index -> graph -> issues as one strict pipeline
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use compscope::analysis::{analyze_project, ScanOptions};
//!
//! let analysis = analyze_project(Path::new("./my-app"), &ScanOptions::components())?;
//! for issue in &analysis.issues {
//!     println!("{}: {}", issue.location, issue.message);
//! }
//! ```

pub mod classify;
pub mod extract;
pub mod index;
pub mod pipeline;
pub mod scan;

// Re-export main types for convenience
pub use classify::{classify, is_component, ComponentKind};
pub use extract::{extract, ExtractedFacts};
pub use index::{component_name, ComponentIndex, FileFacts};
pub use pipeline::{analyze_project, build_index, Analysis};
pub use scan::{
    collect_source_files, read_sources, AnalysisError, AnalysisResult, ScanOptions, SourceFile,
};
