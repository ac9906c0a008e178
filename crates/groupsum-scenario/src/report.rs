//! CSV export for sweep reports.

use std::fmt::{self, Write as _};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::result::SweepReport;

/// CSV exporter for sweep reports.
///
/// One line per scenario with vertex values, targets, common sum, solution
/// count and skip reason. Lists inside a cell are space-separated.
///
/// # Example
///
/// ```
/// use groupsum_scenario::{CsvExporter, SweepReport};
///
/// let csv = CsvExporter::to_string(&SweepReport::default());
/// assert!(csv.starts_with("row,vertices,targets,common_sum,solutions,skip_reason"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports a sweep report to a CSV string.
    pub fn to_string(report: &SweepReport) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = Self::write_rows(report, &mut output);
        output
    }

    /// Exports a sweep report to a CSV file.
    pub fn to_file(report: &SweepReport, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(report))
    }

    /// Writes a sweep report as CSV to a writer.
    pub fn write<W: Write>(report: &SweepReport, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(report).as_bytes())
    }

    fn write_rows(report: &SweepReport, out: &mut String) -> fmt::Result {
        writeln!(out, "row,vertices,targets,common_sum,solutions,skip_reason")?;
        for (i, row) in report.rows.iter().enumerate() {
            let scenario = &row.scenario;
            writeln!(
                out,
                "{},{},{},{},{},{}",
                i + 1,
                join(&scenario.vertex_values),
                scenario.targets().map(join).unwrap_or_default(),
                scenario
                    .common_sum()
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
                row.solutions().map(|n| n.to_string()).unwrap_or_default(),
                row.skip_reason()
                    .map(|r| r.to_string())
                    .unwrap_or_default(),
            )?;
        }
        Ok(())
    }
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
