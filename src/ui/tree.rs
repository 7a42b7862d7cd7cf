//! Tree data structures for component visualization
//!
//! Provides `TreeNode` for the who-renders-whom hierarchy and
//! `FlattenedNode` for rendering the tree as a scrollable list in the TUI.

use std::collections::{HashMap, HashSet};

use crate::analysis::Analysis;
use crate::graph::ComponentGraph;
use crate::issues::IssueKind;

/// Expansion stops below this depth even without recursion.
pub const MAX_TREE_DEPTH: usize = 16;

/// Markers shown next to a component name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeBadges {
    /// Reported as an orphan component
    pub orphan: bool,
    /// Reported for prop drilling
    pub prop_drilling: bool,
    /// Rendered by more than one consumer
    pub shared: bool,
    /// Already rendered higher up on this path; not expanded again
    pub recursive: bool,
    /// Subtree is expanded at an earlier occurrence in the tree
    pub repeated: bool,
    /// Rendered by its parent without a relative import
    pub unimported: bool,
}

impl NodeBadges {
    /// Returns true if any badge is set
    pub fn any(&self) -> bool {
        self.orphan
            || self.prop_drilling
            || self.shared
            || self.recursive
            || self.repeated
            || self.unimported
    }
}

/// A node in the component tree
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Component name
    pub name: String,
    /// Location relative to the project root
    pub path: String,
    /// Components this one renders
    pub children: Vec<TreeNode>,
    /// Whether this node is expanded in the UI
    pub expanded: bool,
    /// Depth in the tree (0 = root)
    pub depth: usize,
    pub badges: NodeBadges,
}

impl TreeNode {
    /// Create a new tree node
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            children: Vec::new(),
            expanded: false,
            depth: 0,
            badges: NodeBadges::default(),
        }
    }

    /// Create a new tree node carrying badges
    pub fn with_badges(name: impl Into<String>, path: impl Into<String>, badges: NodeBadges) -> Self {
        Self {
            badges,
            ..Self::new(name, path)
        }
    }

    /// Add a child node, fixing up depths of its whole subtree
    pub fn add_child(&mut self, mut child: TreeNode) {
        child.set_depth(self.depth + 1);
        self.children.push(child);
    }

    fn set_depth(&mut self, depth: usize) {
        self.depth = depth;
        for child in &mut self.children {
            child.set_depth(depth + 1);
        }
    }

    /// Toggle the expanded state
    pub fn toggle_expanded(&mut self) {
        if !self.children.is_empty() {
            self.expanded = !self.expanded;
        }
    }

    /// Check if this node has children
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Total number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }

    /// Flatten the tree into a list for rendering
    ///
    /// Only includes nodes that are visible (i.e., all ancestors are expanded)
    pub fn flatten(&self) -> Vec<FlattenedNode> {
        let mut result = Vec::new();
        self.flatten_recursive(&mut result, true);
        result
    }

    fn flatten_recursive(&self, result: &mut Vec<FlattenedNode>, is_last: bool) {
        result.push(FlattenedNode {
            name: self.name.clone(),
            path: self.path.clone(),
            position: result.len(),
            depth: self.depth,
            is_expanded: self.expanded,
            has_children: self.has_children(),
            is_last_child: is_last,
            badges: self.badges,
        });

        if self.expanded {
            let last = self.children.len().saturating_sub(1);
            for (i, child) in self.children.iter().enumerate() {
                child.flatten_recursive(result, i == last);
            }
        }
    }

    /// Find a node at a given flattened index and toggle its expansion
    ///
    /// Returns true if the toggle was successful
    pub fn toggle_at_index(&mut self, target_index: usize) -> bool {
        let mut current_index = 0;
        self.toggle_at_index_recursive(target_index, &mut current_index)
    }

    fn toggle_at_index_recursive(&mut self, target_index: usize, current_index: &mut usize) -> bool {
        if *current_index == target_index {
            self.toggle_expanded();
            return true;
        }
        *current_index += 1;

        if self.expanded {
            for child in &mut self.children {
                if child.toggle_at_index_recursive(target_index, current_index) {
                    return true;
                }
            }
        }
        false
    }
}

/// A flattened representation of a tree node for rendering
#[derive(Debug, Clone)]
pub struct FlattenedNode {
    pub name: String,
    pub path: String,
    /// Index of this node in the unfiltered flattened list
    pub position: usize,
    pub depth: usize,
    pub is_expanded: bool,
    pub has_children: bool,
    /// Whether this is the last child of its parent
    pub is_last_child: bool,
    pub badges: NodeBadges,
}

impl FlattenedNode {
    /// Get the expansion indicator character
    pub fn expansion_indicator(&self) -> &'static str {
        if !self.has_children {
            "  "
        } else if self.is_expanded {
            "▼ "
        } else {
            "▶ "
        }
    }

    /// Short badge labels in display order
    pub fn badge_labels(&self) -> Vec<&'static str> {
        let b = &self.badges;
        [
            (b.recursive, "[R]"),
            (b.prop_drilling, "[P]"),
            (b.orphan, "[O]"),
            (b.shared, "[S]"),
            (b.repeated, "[=]"),
            (b.unimported, "[U]"),
        ]
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, label)| *label)
        .collect()
    }
}

/// Per-component badges derived from the analysis results.
pub fn component_badges(analysis: &Analysis) -> HashMap<String, NodeBadges> {
    let mut by_path: HashMap<&str, NodeBadges> = HashMap::new();
    for issue in &analysis.issues {
        let badges = by_path.entry(issue.location.as_str()).or_default();
        match issue.kind {
            IssueKind::OrphanComponent => badges.orphan = true,
            IssueKind::PropDrilling => badges.prop_drilling = true,
        }
    }

    analysis
        .index
        .iter()
        .map(|facts| {
            let mut badges = by_path
                .get(facts.relative_path.as_str())
                .copied()
                .unwrap_or_default();
            badges.shared = analysis.graph.used_by(&facts.name).len() > 1;
            (facts.name.clone(), badges)
        })
        .collect()
}

struct TreeBuilder<'a> {
    analysis: &'a Analysis,
    badges: HashMap<String, NodeBadges>,
    /// Components that appear anywhere in the tree
    visited: HashSet<String>,
    /// Components whose subtree has been built once
    expanded: HashSet<String>,
}

impl<'a> TreeBuilder<'a> {
    fn node(&mut self, name: &str, parent: Option<&str>, ancestors: &mut Vec<String>) -> TreeNode {
        self.visited.insert(name.to_string());
        let graph: &'a ComponentGraph = &self.analysis.graph;
        let path = graph
            .get_node(name)
            .map(|node| node.relative_path.clone())
            .unwrap_or_default();
        let mut badges = self.badges.get(name).copied().unwrap_or_default();
        badges.unimported = parent.is_some_and(|p| !graph.is_imported(p, name));

        if ancestors.iter().any(|a| a == name) {
            badges.recursive = true;
            return TreeNode::with_badges(name, path, badges);
        }

        let children: Vec<&'a str> = graph.children_of(name);
        if self.expanded.contains(name) {
            badges.repeated = !children.is_empty();
            return TreeNode::with_badges(name, path, badges);
        }

        let mut node = TreeNode::with_badges(name, path, badges);
        if ancestors.len() >= MAX_TREE_DEPTH {
            return node;
        }

        self.expanded.insert(name.to_string());
        ancestors.push(name.to_string());
        for child in children {
            let child_node = self.node(child, Some(name), ancestors);
            node.add_child(child_node);
        }
        ancestors.pop();

        node
    }
}

/// Build the component tree for an analyzed project.
///
/// The root is the project itself. Its children are the components nothing
/// renders, in index order. Components only reachable through a cycle of
/// renders are appended afterwards so every component appears somewhere.
/// Each component's subtree is built once; later occurrences are leaves
/// marked `repeated`, which keeps the tree linear in the size of the graph.
pub fn build_component_tree(project_name: &str, analysis: &Analysis) -> TreeNode {
    let mut builder = TreeBuilder {
        analysis,
        badges: component_badges(analysis),
        visited: HashSet::new(),
        expanded: HashSet::new(),
    };
    let mut root = TreeNode::new(project_name, "");
    root.expanded = true;

    let entry_points: Vec<&str> = analysis
        .index
        .names()
        .filter(|name| !analysis.graph.is_used(name))
        .collect();
    for name in entry_points {
        let node = builder.node(name, None, &mut Vec::new());
        root.add_child(node);
    }

    for name in analysis.index.names() {
        if !builder.visited.contains(name) {
            let node = builder.node(name, None, &mut Vec::new());
            root.add_child(node);
        }
    }

    log::debug!("Built component tree with {} nodes", root.node_count());
    root
}
