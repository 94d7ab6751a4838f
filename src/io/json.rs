use std::io::{self, Write};
use std::path::Path;

use crate::sim::Report;

/// Write the end-of-session report as pretty JSON.
pub fn write_report<W: Write>(writer: &mut W, report: &Report) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)
}

/// Write the report JSON to a file.
pub fn write_report_file(path: impl AsRef<Path>, report: &Report) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_report(&mut file, report)
}
