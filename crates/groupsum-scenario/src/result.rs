//! Sweep result types.

use std::time::Duration;

use groupsum_core::SearchStats;
use serde::Serialize;

use crate::generator::{Scenario, SkipReason};

/// What happened to one scenario.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RowResult {
    /// The counter ran to completion.
    Counted { solutions: usize, stats: SearchStats },
    /// The scenario was not handed to the counter.
    Skipped { reason: SkipReason },
}

/// One row of a sweep: the scenario and its result.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioRow {
    pub scenario: Scenario,
    pub result: RowResult,
}

impl ScenarioRow {
    /// Solution count, `None` when skipped.
    pub fn solutions(&self) -> Option<usize> {
        match self.result {
            RowResult::Counted { solutions, .. } => Some(solutions),
            RowResult::Skipped { .. } => None,
        }
    }

    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self.result {
            RowResult::Counted { .. } => None,
            RowResult::Skipped { reason } => Some(reason),
        }
    }
}

/// Results of a whole sweep, in generation order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SweepReport {
    /// Group sizes shared by every scenario.
    pub group_sizes: Vec<usize>,
    pub rows: Vec<ScenarioRow>,
    /// Wall time of the sweep.
    pub elapsed: Duration,
}

impl SweepReport {
    /// Rows that were counted.
    pub fn counted(&self) -> impl Iterator<Item = &ScenarioRow> {
        self.rows.iter().filter(|r| r.solutions().is_some())
    }

    /// Rows that were skipped.
    pub fn skipped(&self) -> impl Iterator<Item = &ScenarioRow> {
        self.rows.iter().filter(|r| r.skip_reason().is_some())
    }

    pub fn counted_count(&self) -> usize {
        self.counted().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped().count()
    }

    /// Counted scenarios with at least one solution.
    pub fn solvable_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.solutions().is_some_and(|n| n > 0))
            .count()
    }

    /// Sum of solution counts over counted scenarios.
    pub fn total_solutions(&self) -> usize {
        self.rows.iter().filter_map(ScenarioRow::solutions).sum()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }
}
