//! JSON export implementation.
//!
//! Writes the component report as a pretty-printed JSON document with the
//! keys `component_count`, `components`, `shared_components` and `issues`.

use super::{ComponentReport, Exporter};
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Document emitted in place of a report when analysis cannot start.
#[derive(Debug, Serialize)]
struct ErrorDocument<'a> {
    error: &'a str,
}

fn write_pretty<W: Write, T: Serialize>(value: &T, writer: &mut W) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    writeln!(writer, "{}", json)
}

/// Write `{"error": message}` to the given writer.
pub fn write_error<W: Write>(message: &str, writer: &mut W) -> io::Result<()> {
    write_pretty(&ErrorDocument { error: message }, writer)
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, report: &ComponentReport, writer: &mut W) -> io::Result<()> {
        write_pretty(report, writer)
    }
}
