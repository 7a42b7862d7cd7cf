//! compscope - static component analysis for React projects
//!
//! This crate reads component source files as plain text, builds a graph of
//! which components render which, and reports structural issues such as
//! prop drilling and orphan components. It also profiles a project's stack
//! from its package.json and offers a terminal tree view of the components.

pub mod analysis;
pub mod export;
pub mod graph;
pub mod issues;
pub mod parser;
pub mod profile;
pub mod ui;
