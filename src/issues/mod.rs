//! Structural issue detection over an analyzed project.
//!
//! Each check is an independent [`IssuePass`] with the same
//! `(index, graph) -> issues` shape. [`detect_issues`] runs the default
//! passes in a fixed order so the output is deterministic for a given index.

mod orphan;
mod prop_drilling;

pub use orphan::{OrphanPass, ROOT_COMPONENTS};
pub use prop_drilling::{PropDrillingPass, PROP_DRILLING_THRESHOLD};

use serde::Serialize;
use std::fmt;

use crate::analysis::ComponentIndex;
use crate::graph::ComponentGraph;

/// The category of a structural finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A component destructures more props than the threshold allows
    PropDrilling,
    /// A component nothing renders and that is not an expected entry point
    OrphanComponent,
}

impl IssueKind {
    /// Returns the identifier used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            IssueKind::PropDrilling => "prop_drilling",
            IssueKind::OrphanComponent => "orphan_component",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single structural finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    /// Relative path of the component the issue is about
    pub location: String,
    #[serde(rename = "details")]
    pub message: String,
}

impl Issue {
    pub fn new(kind: IssueKind, location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.location, self.message)
    }
}

/// A check over the whole analyzed project.
pub trait IssuePass {
    /// Emits this pass's findings, in index order.
    fn detect(&self, index: &ComponentIndex, graph: &ComponentGraph) -> Vec<Issue>;
}

/// Runs the default passes: prop drilling first, then orphans.
pub fn detect_issues(index: &ComponentIndex, graph: &ComponentGraph) -> Vec<Issue> {
    let passes: [&dyn IssuePass; 2] = [&PropDrillingPass::default(), &OrphanPass::default()];
    run_passes(&passes, index, graph)
}

/// Runs the given passes in order and concatenates their findings.
pub fn run_passes(
    passes: &[&dyn IssuePass],
    index: &ComponentIndex,
    graph: &ComponentGraph,
) -> Vec<Issue> {
    passes
        .iter()
        .flat_map(|pass| pass.detect(index, graph))
        .collect()
}
