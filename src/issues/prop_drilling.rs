use super::{Issue, IssueKind, IssuePass};
use crate::analysis::ComponentIndex;
use crate::graph::ComponentGraph;

/// Components destructuring more than this many props are flagged.
pub const PROP_DRILLING_THRESHOLD: usize = 5;

/// Flags components that receive too many props directly.
#[derive(Debug, Clone, Copy)]
pub struct PropDrillingPass {
    /// Prop counts strictly above this are reported
    pub threshold: usize,
}

impl Default for PropDrillingPass {
    fn default() -> Self {
        Self {
            threshold: PROP_DRILLING_THRESHOLD,
        }
    }
}

impl IssuePass for PropDrillingPass {
    fn detect(&self, index: &ComponentIndex, _graph: &ComponentGraph) -> Vec<Issue> {
        index
            .iter()
            .filter(|component| component.prop_count() > self.threshold)
            .map(|component| {
                Issue::new(
                    IssueKind::PropDrilling,
                    &component.relative_path,
                    format!(
                        "{} receives {} props - consider Context or composition",
                        component.name,
                        component.prop_count()
                    ),
                )
            })
            .collect()
    }
}
