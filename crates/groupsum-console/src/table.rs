//! Plain-text rendering of sweep reports and solution lists.

use std::fmt::{self, Write as _};

use groupsum_core::CanonicalSolution;
use groupsum_scenario::SweepReport;
use num_format::{Locale, ToFormattedString};

const HEADERS: [&str; 6] = ["#", "vertices", "targets", "S", "solutions", "note"];

/// Renders a sweep report as a table with 1-based row numbers, followed by
/// a summary line.
///
/// # Example
///
/// ```
/// use groupsum_console::render_table;
/// use groupsum_scenario::SweepReport;
///
/// let text = render_table(&SweepReport::default());
/// assert!(text.contains("No scenarios were run"));
/// ```
pub fn render_table(report: &SweepReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_table(report, &mut out);
    out
}

fn write_table(report: &SweepReport, out: &mut String) -> fmt::Result {
    if report.rows.is_empty() {
        writeln!(out, "No scenarios were run.")?;
        return Ok(());
    }

    let cells: Vec<[String; 6]> = report
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let scenario = &row.scenario;
            [
                (i + 1).to_string(),
                tuple(&scenario.vertex_values),
                scenario.targets().map(tuple).unwrap_or_else(|| "-".to_string()),
                scenario
                    .common_sum()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                row.solutions()
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                row.skip_reason().map(|r| r.to_string()).unwrap_or_default(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let show_note = cells.iter().any(|row| !row[5].is_empty());
    let columns = if show_note { 6 } else { 5 };
    let line_width: usize = widths[..columns].iter().sum::<usize>() + 2 * (columns - 1);
    let rule = "=".repeat(line_width);

    writeln!(
        out,
        "RESULTS SUMMARY: {} scenarios",
        report.rows.len().to_formatted_string(&Locale::en)
    )?;
    writeln!(out, "{}", rule)?;
    write_line(out, &HEADERS.map(String::from), &widths, columns)?;
    writeln!(out, "{}", "-".repeat(line_width))?;
    for row in &cells {
        write_line(out, row, &widths, columns)?;
    }
    writeln!(out, "{}", rule)?;
    writeln!(
        out,
        "{} counted │ {} skipped │ {} solvable │ {} solutions │ {:.3}s",
        report.counted_count().to_formatted_string(&Locale::en),
        report.skipped_count().to_formatted_string(&Locale::en),
        report.solvable_count().to_formatted_string(&Locale::en),
        report.total_solutions().to_formatted_string(&Locale::en),
        report.elapsed.as_secs_f64(),
    )
}

// Numbers right-aligned, text left-aligned.
fn write_line(out: &mut String, row: &[String; 6], widths: &[usize; 6], columns: usize) -> fmt::Result {
    let mut line = String::new();
    for (i, (cell, &width)) in row.iter().zip(widths).take(columns).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        match i {
            0 | 3 | 4 => write!(line, "{:>width$}", cell, width = width)?,
            _ => write!(line, "{:<width$}", cell, width = width)?,
        }
    }
    writeln!(out, "{}", line.trim_end())
}

fn tuple(values: &[i64]) -> String {
    let inner: Vec<String> = values.iter().map(i64::to_string).collect();
    format!("({})", inner.join(", "))
}

/// Renders one canonical solution per line, numbered from 1.
///
/// ```
/// use groupsum_console::render_solutions;
/// use groupsum_core::CanonicalSolution;
///
/// let solutions = vec![CanonicalSolution::from_arrangement(&[4, 1], [2])];
/// assert_eq!(render_solutions(&solutions), "1: {1, 4}\n");
/// ```
pub fn render_solutions(solutions: &[CanonicalSolution]) -> String {
    let width = solutions.len().to_string().len();
    solutions
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{:>width$}: {}\n", i + 1, s, width = width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use groupsum_scenario::{Scenario, ScenarioRow, RowResult, SkipReason};
    use groupsum_scenario::EdgeTargets;
    use groupsum_core::SearchStats;

    fn counted(index: usize, vertices: Vec<i64>, targets: Vec<i64>, solutions: usize) -> ScenarioRow {
        ScenarioRow {
            scenario: Scenario {
                index,
                vertex_values: vertices,
                pool: Vec::new(),
                plan: Ok(EdgeTargets {
                    common_sum: 17,
                    targets,
                }),
            },
            result: RowResult::Counted {
                solutions,
                stats: SearchStats::default(),
            },
        }
    }

    #[test]
    fn test_table_rows_and_summary() {
        let report = SweepReport {
            group_sizes: vec![2, 2, 2],
            rows: vec![
                counted(0, vec![1, 2, 3], vec![14, 13, 12], 2),
                counted(1, vec![1, 2, 6], vec![15, 11, 10], 0),
            ],
            elapsed: Default::default(),
        };

        let text = render_table(&report);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "RESULTS SUMMARY: 2 scenarios");
        assert!(lines[2].starts_with("#  vertices "));
        assert!(!lines[2].contains("note"));
        assert_eq!(lines[4], "1  (1, 2, 3)  (14, 13, 12)  17          2");
        assert_eq!(lines[5], "2  (1, 2, 6)  (15, 11, 10)  17          0");
        assert!(lines[7].starts_with("2 counted │ 0 skipped │ 1 solvable │ 2 solutions"));
    }

    #[test]
    fn test_skipped_rows_show_reason() {
        let skipped = ScenarioRow {
            scenario: Scenario {
                index: 1,
                vertex_values: vec![1, 2, 4],
                pool: Vec::new(),
                plan: Err(SkipReason::NonIntegralSum {
                    numerator: 52,
                    edges: 3,
                }),
            },
            result: RowResult::Skipped {
                reason: SkipReason::NonIntegralSum {
                    numerator: 52,
                    edges: 3,
                },
            },
        };
        let report = SweepReport {
            group_sizes: vec![2, 2, 2],
            rows: vec![counted(0, vec![1, 2, 3], vec![14, 13, 12], 2), skipped],
            elapsed: Default::default(),
        };

        let text = render_table(&report);
        assert!(text.lines().nth(2).is_some_and(|l| l.ends_with("note")));
        assert!(text.contains("S = 52/3 is not an integer"));
        assert!(text.contains("1 skipped"));
    }

    #[test]
    fn test_render_solutions_pads_numbers() {
        let solutions: Vec<CanonicalSolution> = (0..10)
            .map(|i| CanonicalSolution::from_arrangement(&[i, i + 1], [1, 1]))
            .collect();
        let text = render_solutions(&solutions);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], " 1: {0} | {1}");
        assert_eq!(lines[9], "10: {9} | {10}");
    }

    #[test]
    fn test_render_no_solutions() {
        assert_eq!(render_solutions(&[]), "");
    }
}
