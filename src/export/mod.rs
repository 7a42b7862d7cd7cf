//! Export functionality for component analysis results.
//!
//! This module assembles a [`ComponentReport`] from a finished analysis and
//! provides exporters for it in various formats: JSON, CSV, and Markdown.
//! Display limits live here, not in the analysis.

pub mod csv;
pub mod json;
pub mod markdown;

use crate::analysis::Analysis;
use crate::issues::{Issue, IssueKind};
use serde::Serialize;
use std::io::{self, Write};

/// Default number of components listed in a report.
pub const DEFAULT_COMPONENT_LIMIT: usize = 30;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// JSON format - machine-readable, full data
    #[default]
    Json,
    /// CSV format - spreadsheet-friendly
    Csv,
    /// Markdown format - documentation/reporting
    Markdown,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: json, csv, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Options controlling what a report includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Maximum number of components listed, in index order
    pub component_limit: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            component_limit: DEFAULT_COMPONENT_LIMIT,
        }
    }
}

/// One component row of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentEntry {
    pub name: String,
    /// Location relative to the project root
    #[serde(skip)]
    pub path: String,
    /// Components this one renders
    pub children: Vec<String>,
    /// Destructured prop names
    pub props_received: Vec<String>,
    /// Components rendering this one
    pub used_by: Vec<String>,
}

/// A component rendered by more than one consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedComponent {
    pub name: String,
    pub used_by: Vec<String>,
}

/// The structured summary of one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentReport {
    /// Project name, shown in human-readable formats
    #[serde(skip)]
    pub project_name: String,
    /// Total number of components found, before truncation
    pub component_count: usize,
    /// The first `component_limit` components
    pub components: Vec<ComponentEntry>,
    pub shared_components: Vec<SharedComponent>,
    pub issues: Vec<Issue>,
}

impl ComponentReport {
    /// Create a report from analysis results.
    pub fn new(project_name: impl Into<String>, analysis: &Analysis, options: &ReportOptions) -> Self {
        let graph = &analysis.graph;
        let to_owned = |names: Vec<&str>| names.into_iter().map(str::to_string).collect();

        let components = analysis
            .index
            .iter()
            .take(options.component_limit)
            .map(|facts| ComponentEntry {
                name: facts.name.clone(),
                path: facts.relative_path.clone(),
                children: to_owned(graph.children_of(&facts.name)),
                props_received: facts.declared_params.clone(),
                used_by: to_owned(graph.used_by(&facts.name)),
            })
            .collect();

        let shared_components = graph
            .shared_components()
            .into_iter()
            .map(|(name, consumers)| SharedComponent {
                name: name.to_string(),
                used_by: to_owned(consumers),
            })
            .collect();

        Self {
            project_name: project_name.into(),
            component_count: analysis.index.len(),
            components,
            shared_components,
            issues: analysis.issues.clone(),
        }
    }

    /// Returns true if the component list was cut short.
    pub fn is_truncated(&self) -> bool {
        self.components.len() < self.component_count
    }

    /// Get count of issues of one kind
    pub fn issue_count(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|i| i.kind == kind).count()
    }

    /// Issues reported at a given location.
    pub fn issues_at<'a>(&'a self, location: &'a str) -> impl Iterator<Item = &'a Issue> + 'a {
        self.issues.iter().filter(move |i| i.location == location)
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the report to the given writer.
    fn export<W: Write>(&self, report: &ComponentReport, writer: &mut W) -> io::Result<()>;
}

/// Export a report in the specified format.
pub fn export<W: Write>(
    format: ExportFormat,
    report: &ComponentReport,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Json => json::JsonExporter.export(report, writer),
        ExportFormat::Csv => csv::CsvExporter.export(report, writer),
        ExportFormat::Markdown => markdown::MarkdownExporter.export(report, writer),
    }
}

/// Export a report to a string.
pub fn export_to_string(format: ExportFormat, report: &ComponentReport) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, report, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
