//! Sweep runner.
//!
//! Logging levels:
//! - **INFO**: Sweep start/end with totals
//! - **WARN**: Skipped scenarios
//! - **DEBUG**: Per-scenario counts

use std::time::Instant;

use groupsum_config::{SweepConfig, ThreadCount};
use groupsum_core::{ConstrainedSumCounter, CountStatus, SumSystem};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::{Result, ScenarioError};
use crate::generator::{Scenario, ScenarioGenerator, SkipReason};
use crate::result::{RowResult, ScenarioRow, SweepReport};

/// Generates every scenario of a [`SweepConfig`] and counts each one.
///
/// Scenarios are independent, so they are counted concurrently unless the
/// configuration asks for [`ThreadCount::None`]. Rows keep generation order
/// either way.
///
/// # Examples
///
/// ```
/// use groupsum_config::{SweepConfig, ThreadCount};
/// use groupsum_scenario::SweepRunner;
///
/// let config = SweepConfig::default().with_thread_count(ThreadCount::None);
/// let report = SweepRunner::new(config).unwrap().run().unwrap();
///
/// assert_eq!(report.rows.len(), 27);
/// assert_eq!(report.total_solutions(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct SweepRunner {
    config: SweepConfig,
}

impl SweepRunner {
    /// Creates a runner after validating `config`.
    pub fn new(config: SweepConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Runs the sweep.
    ///
    /// # Errors
    ///
    /// [`ScenarioError::ThreadPool`] when a dedicated pool cannot be built,
    /// [`ScenarioError::Count`] when a generated system is rejected.
    pub fn run(&self) -> Result<SweepReport> {
        let start = Instant::now();
        let scenarios: Vec<Scenario> = ScenarioGenerator::new(&self.config)?.collect();
        let thread_count = self.config.execution.thread_count;

        info!(
            event = "sweep_start",
            scenario_count = scenarios.len(),
            group_count = self.config.group_sizes.len(),
            variable_count = self.required(),
            threads = ?thread_count,
        );

        let rows = if !self.config.execution.is_parallel() {
            scenarios
                .into_iter()
                .map(|s| self.run_scenario(s))
                .collect::<Result<Vec<_>>>()?
        } else if let ThreadCount::Count(n) = thread_count {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ScenarioError::ThreadPool(e.to_string()))?;
            pool.install(|| self.run_parallel(scenarios))?
        } else {
            self.run_parallel(scenarios)?
        };

        let report = SweepReport {
            group_sizes: self.config.group_sizes.clone(),
            rows,
            elapsed: start.elapsed(),
        };

        info!(
            event = "sweep_end",
            counted = report.counted_count(),
            skipped = report.skipped_count(),
            solvable = report.solvable_count(),
            total_solutions = report.total_solutions(),
            duration_ms = report.elapsed_ms(),
        );
        Ok(report)
    }

    fn run_parallel(&self, scenarios: Vec<Scenario>) -> Result<Vec<ScenarioRow>> {
        scenarios
            .into_par_iter()
            .map(|s| self.run_scenario(s))
            .collect()
    }

    fn required(&self) -> usize {
        self.config.group_sizes.iter().sum()
    }

    /// Counts one scenario, or records why it was skipped.
    pub fn run_scenario(&self, scenario: Scenario) -> Result<ScenarioRow> {
        let targets = match &scenario.plan {
            Ok(plan) => plan.targets.clone(),
            Err(reason) => {
                let reason = *reason;
                return Ok(skip(scenario, reason));
            }
        };

        let required = self.required();
        if scenario.pool.len() < required {
            let reason = SkipReason::PoolTooSmall {
                available: scenario.pool.len(),
                required,
            };
            return Ok(skip(scenario, reason));
        }

        let system = SumSystem::new(&targets, &self.config.group_sizes)?;
        let outcome = ConstrainedSumCounter::new(system).count_with_outcome(&scenario.pool);

        let result = match outcome.status {
            CountStatus::Exhausted => RowResult::Counted {
                solutions: outcome.count,
                stats: outcome.stats,
            },
            CountStatus::PoolTooSmall {
                available,
                required,
            } => {
                return Ok(skip(
                    scenario,
                    SkipReason::PoolTooSmall {
                        available,
                        required,
                    },
                ))
            }
        };

        debug!(
            event = "scenario_counted",
            index = scenario.index,
            vertices = ?scenario.vertex_values,
            targets = ?targets,
            solutions = outcome.count,
        );
        Ok(ScenarioRow { scenario, result })
    }
}

fn skip(scenario: Scenario, reason: SkipReason) -> ScenarioRow {
    warn!(
        event = "scenario_skipped",
        index = scenario.index,
        vertices = ?scenario.vertex_values,
        reason = %reason,
    );
    ScenarioRow {
        scenario,
        result: RowResult::Skipped { reason },
    }
}
