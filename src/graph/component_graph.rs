//! Component usage graph implementation using petgraph.
//!
//! Provides a directed graph of who-renders-whom between the components of
//! one project, with the reverse "used by" index read off incoming edges.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;

use crate::analysis::ComponentIndex;

/// Represents a component in the usage graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentNode {
    /// Component name (file stem)
    pub name: String,
    /// Location of the component file relative to the project root
    pub relative_path: String,
}

impl ComponentNode {
    /// Creates a new component node.
    pub fn new(name: impl Into<String>, relative_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relative_path: relative_path.into(),
        }
    }
}

/// Represents a usage edge: the source component renders the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsageEdge {
    /// Whether the consumer also imports the target from a relative path
    pub imported: bool,
}

impl UsageEdge {
    /// Creates an edge for a tag reference with no matching import.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an edge backed by an explicit relative import.
    pub fn imported() -> Self {
        Self { imported: true }
    }
}

/// A directed graph of component usage.
///
/// Nodes are the components of a [`ComponentIndex`], added in index order.
/// An edge points from a consumer to the component it renders. Cycles,
/// including self references from recursive rendering, are legal and inert:
/// this is a reporting graph, not a resolution order.
///
/// # Example
///
/// ```rust
/// use compscope::graph::ComponentGraph;
///
/// let mut graph = ComponentGraph::new();
/// graph.add_component("App", "src/App.tsx");
/// graph.add_component("Header", "src/Header.tsx");
/// graph.add_usage("App", "Header");
///
/// assert_eq!(graph.used_by("Header"), vec!["App"]);
/// assert_eq!(graph.children_of("App"), vec!["Header"]);
/// assert!(!graph.is_used("App"));
/// ```
#[derive(Debug, Clone)]
pub struct ComponentGraph {
    /// The underlying directed graph
    graph: DiGraph<ComponentNode, UsageEdge>,
    /// Maps component names to their node indices for O(1) lookup
    node_indices: HashMap<String, NodeIndex>,
}

impl Default for ComponentGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
        }
    }

    /// Creates a new graph with pre-allocated capacity.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(nodes, edges),
            node_indices: HashMap::with_capacity(nodes),
        }
    }

    /// Builds the usage graph for a finished component index.
    ///
    /// Every component becomes a node. For each component, every referenced
    /// tag that names a component in the index becomes an edge from that
    /// component to the tag. Tags that resolve to nothing are dropped.
    pub fn build(index: &ComponentIndex) -> Self {
        let mut graph = Self::with_capacity(index.len(), index.len() * 2);

        for facts in index {
            graph.add_component(&facts.name, &facts.relative_path);
        }

        for facts in index {
            for tag in &facts.referenced_tags {
                if !index.contains(tag) {
                    continue;
                }

                let edge = if facts.declared_imports.iter().any(|i| i == tag) {
                    UsageEdge::imported()
                } else {
                    UsageEdge::new()
                };
                graph.add_usage_with_metadata(&facts.name, tag, edge);
            }
        }

        graph
    }

    /// Adds a component to the graph.
    ///
    /// If a component with the same name already exists, returns its
    /// existing node index without modification.
    pub fn add_component(&mut self, name: &str, relative_path: &str) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(name) {
            return idx;
        }

        let idx = self.graph.add_node(ComponentNode::new(name, relative_path));
        self.node_indices.insert(name.to_string(), idx);
        idx
    }

    /// Records that `consumer` renders `child`.
    ///
    /// Returns `false` if either component doesn't exist. Repeated usages
    /// collapse into one edge.
    pub fn add_usage(&mut self, consumer: &str, child: &str) -> bool {
        self.add_usage_with_metadata(consumer, child, UsageEdge::new())
    }

    /// Records a usage with custom edge metadata.
    pub fn add_usage_with_metadata(&mut self, consumer: &str, child: &str, edge: UsageEdge) -> bool {
        let Some(&from_idx) = self.node_indices.get(consumer) else {
            return false;
        };
        let Some(&to_idx) = self.node_indices.get(child) else {
            return false;
        };

        self.graph.update_edge(from_idx, to_idx, edge);
        true
    }

    /// Gets a component node by name.
    pub fn get_node(&self, name: &str) -> Option<&ComponentNode> {
        self.node_indices
            .get(name)
            .and_then(|&idx| self.graph.node_weight(idx))
    }

    /// Components rendered by `name`, sorted by name.
    pub fn children_of(&self, name: &str) -> Vec<&str> {
        let mut children: Vec<&str> = self
            .neighbors(name, Direction::Outgoing)
            .into_iter()
            .map(|node| node.name.as_str())
            .collect();
        children.sort_unstable();
        children
    }

    /// Components that render `name`, in index order.
    pub fn used_by(&self, name: &str) -> Vec<&str> {
        self.neighbors(name, Direction::Incoming)
            .into_iter()
            .map(|node| node.name.as_str())
            .collect()
    }

    /// Returns true if at least one component renders `name`.
    pub fn is_used(&self, name: &str) -> bool {
        self.node_indices.get(name).is_some_and(|&idx| {
            self.graph
                .edges_directed(idx, Direction::Incoming)
                .next()
                .is_some()
        })
    }

    /// Returns true if `consumer` imports `child` as well as rendering it.
    pub fn is_imported(&self, consumer: &str, child: &str) -> bool {
        let (Some(&from), Some(&to)) = (self.node_indices.get(consumer), self.node_indices.get(child))
        else {
            return false;
        };
        self.graph
            .find_edge(from, to)
            .and_then(|e| self.graph.edge_weight(e))
            .is_some_and(|edge| edge.imported)
    }

    /// The reverse usage index: every used component with its consumers.
    ///
    /// Components nobody renders are absent, mirroring a map that only
    /// gains a key when a consumer is recorded. Entries are in index order.
    pub fn usage_map(&self) -> Vec<(&str, Vec<&str>)> {
        self.graph
            .node_indices()
            .filter_map(|idx| {
                let node = &self.graph[idx];
                let consumers = self.used_by(&node.name);
                (!consumers.is_empty()).then_some((node.name.as_str(), consumers))
            })
            .collect()
    }

    /// Components rendered by more than one consumer, in index order.
    pub fn shared_components(&self) -> Vec<(&str, Vec<&str>)> {
        self.usage_map()
            .into_iter()
            .filter(|(_, consumers)| consumers.len() > 1)
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains(&self, name: &str) -> bool {
        self.node_indices.contains_key(name)
    }

    /// Neighbor nodes in one direction, ordered by node index.
    fn neighbors(&self, name: &str, direction: Direction) -> Vec<&ComponentNode> {
        let Some(&idx) = self.node_indices.get(name) else {
            return Vec::new();
        };

        let mut indices: Vec<NodeIndex> = self
            .graph
            .edges_directed(idx, direction)
            .map(|edge| match direction {
                Direction::Outgoing => edge.target(),
                Direction::Incoming => edge.source(),
            })
            .collect();
        indices.sort_unstable();
        indices.dedup();

        indices
            .into_iter()
            .filter_map(|i| self.graph.node_weight(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{ComponentKind, ExtractedFacts, FileFacts};

    fn component(name: &str, tags: &[&str], imports: &[&str]) -> FileFacts {
        FileFacts::new(
            name,
            format!("src/{}.tsx", name),
            ComponentKind::Function,
            ExtractedFacts {
                declared_imports: imports.iter().map(|s| s.to_string()).collect(),
                referenced_tags: tags.iter().map(|s| s.to_string()).collect(),
                declared_params: Vec::new(),
            },
        )
    }

    fn index(components: Vec<FileFacts>) -> ComponentIndex {
        components.into_iter().collect()
    }

    #[test]
    fn test_create_empty_graph() {
        let graph = ComponentGraph::new();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_add_component_is_idempotent() {
        let mut graph = ComponentGraph::new();
        let idx = graph.add_component("Card", "src/Card.tsx");
        let idx2 = graph.add_component("Card", "other/Card.tsx");

        assert_eq!(idx, idx2);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.get_node("Card").unwrap().relative_path, "src/Card.tsx");
    }

    #[test]
    fn test_add_usage_requires_both_nodes() {
        let mut graph = ComponentGraph::new();
        graph.add_component("App", "App.tsx");

        assert!(!graph.add_usage("App", "Missing"));
        assert!(!graph.add_usage("Missing", "App"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_repeated_usage_is_one_edge() {
        let mut graph = ComponentGraph::new();
        graph.add_component("App", "App.tsx");
        graph.add_component("Nav", "Nav.tsx");

        graph.add_usage("App", "Nav");
        graph.add_usage("App", "Nav");
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_build_app_header_footer() {
        let idx = index(vec![
            component("App", &["Header", "Footer"], &["Header", "Footer"]),
            component("Header", &[], &[]),
            component("Footer", &[], &[]),
        ]);
        let graph = ComponentGraph::build(&idx);

        assert_eq!(graph.used_by("Header"), vec!["App"]);
        assert_eq!(graph.used_by("Footer"), vec!["App"]);
        assert!(!graph.is_used("App"));
        assert_eq!(graph.children_of("App"), vec!["Footer", "Header"]);
        assert!(graph.shared_components().is_empty());

        let usage_keys: Vec<&str> = graph.usage_map().into_iter().map(|(k, _)| k).collect();
        assert_eq!(usage_keys, vec!["Header", "Footer"]);
    }

    #[test]
    fn test_unresolved_tags_are_dropped() {
        let idx = index(vec![component("Page", &["Layout", "ThirdPartyIcon"], &[])]);
        let graph = ComponentGraph::build(&idx);

        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.contains("ThirdPartyIcon"));
        assert!(graph.children_of("Page").is_empty());
        assert!(graph.usage_map().is_empty());
    }

    #[test]
    fn test_usage_keys_exist_in_index() {
        let idx = index(vec![
            component("A", &["B", "Ghost"], &[]),
            component("B", &["A", "Phantom"], &[]),
        ]);
        let graph = ComponentGraph::build(&idx);

        for (name, consumers) in graph.usage_map() {
            assert!(idx.contains(name));
            for consumer in consumers {
                assert!(idx.contains(consumer));
            }
        }
    }

    #[test]
    fn test_self_reference_is_recorded() {
        let idx = index(vec![component("Tree", &["Tree"], &[])]);
        let graph = ComponentGraph::build(&idx);

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.used_by("Tree"), vec!["Tree"]);
        assert!(graph.is_used("Tree"));
    }

    #[test]
    fn test_shared_components_in_index_order() {
        let idx = index(vec![
            component("Page", &["Button", "Icon"], &[]),
            component("Dialog", &["Button", "Icon"], &[]),
            component("Icon", &[], &[]),
            component("Button", &["Icon"], &[]),
        ]);
        let graph = ComponentGraph::build(&idx);

        let shared = graph.shared_components();
        assert_eq!(shared.len(), 2);
        assert_eq!(shared[0].0, "Icon");
        assert_eq!(shared[0].1, vec!["Page", "Dialog", "Button"]);
        assert_eq!(shared[1].0, "Button");
        assert_eq!(shared[1].1, vec!["Page", "Dialog"]);
    }

    #[test]
    fn test_imported_edge_metadata() {
        let idx = index(vec![
            component("App", &["Nav", "Footer"], &["Nav"]),
            component("Nav", &[], &[]),
            component("Footer", &[], &[]),
        ]);
        let graph = ComponentGraph::build(&idx);

        assert!(graph.is_imported("App", "Nav"));
        assert!(!graph.is_imported("App", "Footer"));
        assert!(!graph.is_imported("Nav", "App"));
    }
}
