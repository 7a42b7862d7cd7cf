//! Markdown export implementation.
//!
//! Renders the component report for code review notes and documentation.

use super::{ComponentReport, Exporter};
use crate::issues::IssueKind;
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

fn list_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

impl MarkdownExporter {
    fn write_issue_section<W: Write>(
        report: &ComponentReport,
        kind: IssueKind,
        title: &str,
        writer: &mut W,
    ) -> io::Result<()> {
        let issues: Vec<_> = report.issues.iter().filter(|i| i.kind == kind).collect();
        if issues.is_empty() {
            return Ok(());
        }

        writeln!(writer, "### {} ({})", title, issues.len())?;
        writeln!(writer)?;
        for issue in issues {
            writeln!(writer, "- `{}`: {}", issue.location, issue.message)?;
        }
        writeln!(writer)
    }
}

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, report: &ComponentReport, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "# Component Analysis Report")?;
        writeln!(writer)?;
        writeln!(writer, "**Project:** {}", report.project_name)?;
        writeln!(writer)?;

        writeln!(writer, "## Summary")?;
        writeln!(writer)?;
        writeln!(writer, "| Metric | Count |")?;
        writeln!(writer, "|--------|-------|")?;
        writeln!(writer, "| Components | {} |", report.component_count)?;
        writeln!(
            writer,
            "| Shared Components | {} |",
            report.shared_components.len()
        )?;
        writeln!(
            writer,
            "| Prop Drilling | {} |",
            report.issue_count(IssueKind::PropDrilling)
        )?;
        writeln!(
            writer,
            "| Orphan Components | {} |",
            report.issue_count(IssueKind::OrphanComponent)
        )?;
        writeln!(writer)?;

        writeln!(writer, "## Components")?;
        writeln!(writer)?;
        if report.is_truncated() {
            writeln!(
                writer,
                "Showing the first {} of {} components.",
                report.components.len(),
                report.component_count
            )?;
            writeln!(writer)?;
        }
        writeln!(writer, "| Component | Path | Renders | Props | Used By |")?;
        writeln!(writer, "|-----------|------|---------|-------|---------|")?;
        for component in &report.components {
            writeln!(
                writer,
                "| {} | {} | {} | {} | {} |",
                component.name,
                component.path,
                list_or_dash(&component.children),
                list_or_dash(&component.props_received),
                list_or_dash(&component.used_by)
            )?;
        }
        writeln!(writer)?;

        if !report.shared_components.is_empty() {
            writeln!(writer, "## Shared Components")?;
            writeln!(writer)?;
            for shared in &report.shared_components {
                writeln!(
                    writer,
                    "- **{}** used by {}",
                    shared.name,
                    shared.used_by.join(", ")
                )?;
            }
            writeln!(writer)?;
        }

        if !report.issues.is_empty() {
            writeln!(writer, "## Issues")?;
            writeln!(writer)?;
            Self::write_issue_section(report, IssueKind::PropDrilling, "Prop Drilling", writer)?;
            Self::write_issue_section(
                report,
                IssueKind::OrphanComponent,
                "Orphan Components",
                writer,
            )?;
        }

        writeln!(writer, "---")?;
        writeln!(writer, "*Generated by compscope*")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Analysis, SourceFile};
    use crate::export::test_support::sample_analysis;
    use crate::export::ReportOptions;

    fn render(analysis: &Analysis, options: ReportOptions) -> String {
        let report = ComponentReport::new("demo", analysis, &options);
        let mut output = Vec::new();
        MarkdownExporter.export(&report, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_markdown_export_summary() {
        let md = render(&sample_analysis(), ReportOptions::default());

        assert!(md.contains("# Component Analysis Report"));
        assert!(md.contains("**Project:** demo"));
        assert!(md.contains("| Components | 6 |"));
        assert!(md.contains("| Shared Components | 1 |"));
        assert!(md.contains("| Prop Drilling | 1 |"));
        assert!(md.contains("| Orphan Components | 2 |"));
    }

    #[test]
    fn test_markdown_component_table() {
        let md = render(&sample_analysis(), ReportOptions::default());

        assert!(md.contains("| App | src/App.tsx | Footer, Header | - | - |"));
        assert!(md.contains("| Logo | src/Logo.tsx | - | small | Header, Footer |"));
        assert!(!md.contains("Showing the first"));
    }

    #[test]
    fn test_markdown_shared_and_issues() {
        let md = render(&sample_analysis(), ReportOptions::default());

        assert!(md.contains("## Shared Components"));
        assert!(md.contains("- **Logo** used by Header, Footer"));
        assert!(md.contains("### Prop Drilling (1)"));
        assert!(md.contains("### Orphan Components (2)"));
        assert!(md.contains("- `src/Widget.tsx`: Widget is not used by any other component"));
    }

    #[test]
    fn test_markdown_truncation_note() {
        let md = render(&sample_analysis(), ReportOptions { component_limit: 2 });
        assert!(md.contains("Showing the first 2 of 6 components."));
    }

    #[test]
    fn test_markdown_no_issue_sections_when_clean() {
        let analysis = Analysis::from_sources(vec![
            SourceFile::new("App.tsx", "function App() { return <Nav />; }"),
            SourceFile::new("Nav.tsx", "function Nav() { return <nav />; }"),
        ]);
        let md = render(&analysis, ReportOptions::default());

        assert!(!md.contains("## Issues"));
        assert!(!md.contains("## Shared Components"));
        assert!(md.contains("*Generated by compscope*"));
    }
}
