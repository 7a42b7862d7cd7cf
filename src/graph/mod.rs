//! Graph module for component usage modeling.
//!
//! This module provides the [`ComponentGraph`] struct for building and
//! querying who-renders-whom relationships using a directed graph.
//!
//! # Example
//!
//! ```rust
//! use compscope::graph::ComponentGraph;
//!
//! let mut graph = ComponentGraph::new();
//! graph.add_component("App", "src/App.tsx");
//! graph.add_component("Header", "src/Header.tsx");
//! graph.add_usage("App", "Header");
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! ```

mod component_graph;

pub use component_graph::{ComponentGraph, ComponentNode, UsageEdge};
