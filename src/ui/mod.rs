//! UI module for the compscope TUI
//!
//! This module provides the terminal user interface for browsing the
//! component tree of an analyzed project.

mod app;
pub mod tree;

pub use app::{run_app, App};
pub use tree::{build_component_tree, TreeNode};
