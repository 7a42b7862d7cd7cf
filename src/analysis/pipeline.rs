//! The three-stage analysis run: index, graph, issues.
//!
//! Each stage is total before the next one starts. The graph builder needs
//! the final index to resolve references, so nothing is streamed.

use std::path::Path;

use super::index::{ComponentIndex, FileFacts};
use super::scan::{read_sources, AnalysisResult, ScanOptions, SourceFile};
use crate::graph::ComponentGraph;
use crate::issues::{detect_issues, Issue};

/// The finished result of one analysis run.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// All classified components
    pub index: ComponentIndex,
    /// Who-renders-whom graph over the index
    pub graph: ComponentGraph,
    /// Structural findings, prop drilling first, then orphans
    pub issues: Vec<Issue>,
}

impl Analysis {
    /// Runs the graph and issue stages over a finished index.
    pub fn from_index(index: ComponentIndex) -> Self {
        let graph = ComponentGraph::build(&index);
        let issues = detect_issues(&index, &graph);

        log::debug!(
            "Analyzed {} components, {} usage edges, {} issues",
            index.len(),
            graph.edge_count(),
            issues.len()
        );

        Self {
            index,
            graph,
            issues,
        }
    }

    /// Runs the full pipeline over in-memory sources.
    ///
    /// # Example
    ///
    /// ```
    /// use compscope::analysis::{Analysis, SourceFile};
    ///
    /// let analysis = Analysis::from_sources(vec![
    ///     SourceFile::new("App.tsx", "function App() { return <Header />; }"),
    ///     SourceFile::new("Header.tsx", "function Header() { return <h1 />; }"),
    /// ]);
    ///
    /// assert_eq!(analysis.index.len(), 2);
    /// assert_eq!(analysis.graph.used_by("Header"), vec!["App"]);
    /// assert!(analysis.issues.is_empty());
    /// ```
    pub fn from_sources<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = SourceFile>,
    {
        Self::from_index(build_index(sources))
    }
}

/// Classifies and extracts every source, keeping only components.
pub fn build_index<I>(sources: I) -> ComponentIndex
where
    I: IntoIterator<Item = SourceFile>,
{
    let mut index = ComponentIndex::new();

    for source in sources {
        match FileFacts::from_source(&source.relative_path, &source.text) {
            Some(facts) => {
                index.insert(facts);
            }
            None => log::trace!("Not a component: {}", source.relative_path),
        }
    }

    index
}

/// Analyzes the project rooted at `root`.
///
/// Fails only if `root` does not exist; unreadable files are skipped.
pub fn analyze_project(root: &Path, options: &ScanOptions) -> AnalysisResult<Analysis> {
    let sources = read_sources(root, options)?;
    Ok(Analysis::from_sources(sources))
}
