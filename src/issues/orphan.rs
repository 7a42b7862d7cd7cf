use super::{Issue, IssueKind, IssuePass};
use crate::analysis::ComponentIndex;
use crate::graph::ComponentGraph;

/// Entry-point names that are never reported as orphans.
pub const ROOT_COMPONENTS: &[&str] = &["App", "index", "main", "Root"];

/// Flags components that no other component renders.
#[derive(Debug, Clone)]
pub struct OrphanPass {
    /// Names exempt from the check
    pub allowlist: Vec<String>,
}

impl Default for OrphanPass {
    fn default() -> Self {
        Self {
            allowlist: ROOT_COMPONENTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl OrphanPass {
    fn is_root(&self, name: &str) -> bool {
        self.allowlist.iter().any(|root| root == name)
    }
}

impl IssuePass for OrphanPass {
    fn detect(&self, index: &ComponentIndex, graph: &ComponentGraph) -> Vec<Issue> {
        index
            .iter()
            .filter(|component| !graph.is_used(&component.name) && !self.is_root(&component.name))
            .map(|component| {
                Issue::new(
                    IssueKind::OrphanComponent,
                    &component.relative_path,
                    format!("{} is not used by any other component", component.name),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::FileFacts;

    fn index_of(sources: &[(&str, &str)]) -> ComponentIndex {
        sources
            .iter()
            .filter_map(|(path, text)| FileFacts::from_source(path, text))
            .collect()
    }

    #[test]
    fn test_unused_component_is_orphan() {
        let index = index_of(&[
            ("src/App.tsx", "function App() { return <div />; }"),
            ("src/widgets/Widget.tsx", "function Widget() { return <span />; }"),
        ]);
        let graph = ComponentGraph::build(&index);

        let issues = OrphanPass::default().detect(&index, &graph);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::OrphanComponent);
        assert_eq!(issues[0].location, "src/widgets/Widget.tsx");
        assert_eq!(issues[0].message, "Widget is not used by any other component");
    }

    #[test]
    fn test_allowlisted_roots_are_never_orphans() {
        let index = index_of(&[
            ("App.tsx", "function App() { return <div />; }"),
            ("pages/index.jsx", "function index() { return <div />; }"),
            ("main.jsx", "const main = () => { return <div /> }"),
            ("Root.tsx", "function Root() { return <div />; }"),
        ]);
        let graph = ComponentGraph::build(&index);

        assert!(OrphanPass::default().detect(&index, &graph).is_empty());
    }

    #[test]
    fn test_used_components_are_not_orphans() {
        let index = index_of(&[
            ("App.tsx", "function App() { return <Shell />; }"),
            ("Shell.tsx", "function Shell() { return <main />; }"),
        ]);
        let graph = ComponentGraph::build(&index);

        assert!(OrphanPass::default().detect(&index, &graph).is_empty());
    }

    #[test]
    fn test_self_reference_counts_as_use() {
        let index = index_of(&[(
            "Tree.tsx",
            "function Tree({ nodes }) { return <ul>{nodes.map(n => <Tree nodes={n.children} />)}</ul>; }",
        )]);
        let graph = ComponentGraph::build(&index);

        assert!(OrphanPass::default().detect(&index, &graph).is_empty());
    }
}
