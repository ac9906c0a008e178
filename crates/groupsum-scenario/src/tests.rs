//! Tests for sweep running and export.

use groupsum_config::{SweepConfig, ThreadCount};
use groupsum_test::puzzle_sweep;

use super::*;

fn run(config: SweepConfig) -> SweepReport {
    SweepRunner::new(config).unwrap().run().unwrap()
}

#[test]
fn test_default_sweep_counts() {
    let report = run(SweepConfig::default());
    let expected = puzzle_sweep();

    assert_eq!(report.rows.len(), 27);
    assert_eq!(report.skipped_count(), 0);
    assert_eq!(report.counted_count(), 27);
    for (row, fixture) in report.rows.iter().zip(&expected) {
        assert_eq!(row.scenario.vertex_values, fixture.vertices.to_vec());
        assert_eq!(row.solutions(), Some(fixture.solutions));
    }
    assert_eq!(report.total_solutions(), 12);
    assert_eq!(report.solvable_count(), 7);
    assert_eq!(report.group_sizes, vec![2, 2, 2]);
}

#[test]
fn test_thread_counts_agree() {
    let counts = |threads| -> Vec<Option<usize>> {
        run(SweepConfig::default().with_thread_count(threads))
            .rows
            .iter()
            .map(ScenarioRow::solutions)
            .collect()
    };

    let sequential = counts(ThreadCount::None);
    assert_eq!(counts(ThreadCount::Auto), sequential);
    assert_eq!(counts(ThreadCount::Count(2)), sequential);
    assert_eq!(counts(ThreadCount::Count(1)), sequential);
}

#[test]
fn test_rows_keep_generation_order() {
    let report = run(SweepConfig::default());
    let indices: Vec<usize> = report.rows.iter().map(|r| r.scenario.index).collect();
    assert_eq!(indices, (0..27).collect::<Vec<_>>());
}

#[test]
fn test_pool_too_small_is_skipped() {
    // Two vertices and one edge needing 8 interior values out of 7.
    let config = SweepConfig::default()
        .without_layout()
        .with_vertex_class([1])
        .with_vertex_class([2])
        .with_edge(0, 1, 8);

    let report = run(config);
    assert_eq!(report.rows.len(), 1);
    assert_eq!(
        report.rows[0].skip_reason(),
        Some(SkipReason::PoolTooSmall {
            available: 7,
            required: 8
        })
    );
    assert_eq!(report.rows[0].solutions(), None);
    assert_eq!(report.total_solutions(), 0);
}

#[test]
fn test_non_integral_scenarios_are_skipped_not_counted() {
    let config = SweepConfig::default()
        .without_layout()
        .with_vertex_class([1, 2, 3])
        .with_vertex_class([4])
        .with_vertex_class([5])
        .with_edge(0, 1, 2)
        .with_edge(0, 2, 2)
        .with_edge(2, 1, 2)
        .with_thread_count(ThreadCount::None);

    let report = run(config);
    // 45 + a + 9 divisible by 3 only for a = 3
    assert_eq!(report.rows.len(), 3);
    assert_eq!(report.skipped_count(), 2);
    assert_eq!(report.counted_count(), 1);
    assert_eq!(report.rows[2].scenario.common_sum(), Some(19));
}

#[test]
fn test_repeated_vertex_value_row_is_skipped() {
    let config = SweepConfig::default()
        .without_layout()
        .with_vertex_class([1, 2])
        .with_vertex_class([2, 3])
        .with_edge(0, 1, 3)
        .with_thread_count(ThreadCount::None);

    let report = run(config);
    assert_eq!(report.rows.len(), 4);
    assert_eq!(
        report.rows[2].skip_reason(),
        Some(SkipReason::RepeatedVertexValue { value: 2 })
    );
    assert_eq!(report.rows[2].scenario.vertex_values, vec![2, 2]);
    assert_eq!(report.skipped_count(), 1);
    assert_eq!(report.counted_count(), 3);
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = SweepConfig::default();
    config.group_sizes.push(2);
    assert!(matches!(
        SweepRunner::new(config),
        Err(ScenarioError::Config(_))
    ));
}

#[test]
fn test_run_scenario_directly() {
    let runner = SweepRunner::new(SweepConfig::default()).unwrap();
    let scenario = ScenarioGenerator::new(runner.config()).unwrap().next().unwrap();
    let row = runner.run_scenario(scenario).unwrap();

    match row.result {
        RowResult::Counted { solutions, stats } => {
            assert_eq!(solutions, 2);
            assert!(stats.slices_checked > 0);
            assert!(stats.matching_arrangements >= 2);
        }
        RowResult::Skipped { reason } => panic!("unexpected skip: {reason}"),
    }
}

#[test]
fn test_csv_export() {
    let report = run(SweepConfig::default());
    let csv = CsvExporter::to_string(&report);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 28);
    assert_eq!(lines[0], "row,vertices,targets,common_sum,solutions,skip_reason");
    assert_eq!(lines[1], "1,1 2 3,14 13 12,17,2,");

    let mut buffer = Vec::new();
    CsvExporter::write(&report, &mut buffer).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), csv);
}

#[test]
fn test_report_serializes_to_json() {
    let report = run(SweepConfig::default().with_thread_count(ThreadCount::None));
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["rows"].as_array().map(Vec::len), Some(27));
    assert_eq!(json["rows"][0]["result"]["outcome"], "counted");
    assert_eq!(json["rows"][0]["result"]["solutions"], 2);
    assert_eq!(json["rows"][0]["scenario"]["vertex_values"][2], 3);
}
