//! CSV export implementation.
//!
//! One row per listed component, for spreadsheet use. List-valued columns
//! are joined with `;`.

use super::{ComponentReport, Exporter};
use std::io::{self, Write};

/// CSV exporter implementation.
pub struct CsvExporter;

impl CsvExporter {
    /// Escape a field value for CSV format.
    ///
    /// Wraps the value in quotes if it contains commas, quotes, or newlines.
    fn escape_field(value: &str) -> String {
        if value.contains(',') || value.contains('"') || value.contains('\n') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }

    fn join_field(values: &[String]) -> String {
        Self::escape_field(&values.join(";"))
    }
}

impl Exporter for CsvExporter {
    fn export<W: Write>(&self, report: &ComponentReport, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "name,path,prop_count,children,used_by,shared,issues")?;

        for component in &report.components {
            let shared = component.used_by.len() > 1;
            let issues: Vec<String> = report
                .issues_at(&component.path)
                .map(|issue| issue.kind.label().to_string())
                .collect();

            writeln!(
                writer,
                "{},{},{},{},{},{},{}",
                Self::escape_field(&component.name),
                Self::escape_field(&component.path),
                component.props_received.len(),
                Self::join_field(&component.children),
                Self::join_field(&component.used_by),
                shared,
                Self::join_field(&issues)
            )?;
        }

        Ok(())
    }
}
