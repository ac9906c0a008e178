//! GroupSum - counting distinct-value solutions of partitioned sum equations
//!
//! Given a pool of distinct integers, an ordered list of group sizes and one
//! target sum per group, count the ways to fill every group with unused pool
//! values so that each group hits its target. Reordering values inside a
//! group is the same solution; swapping groups is not.
//!
//! # Example
//!
//! ```rust
//! use groupsum::prelude::*;
//!
//! assert_eq!(count(&[7, 7], &[2, 2], &[1, 2, 3, 4, 5, 6]).unwrap(), 6);
//!
//! let report = SweepRunner::new(SweepConfig::default()).unwrap().run().unwrap();
//! assert_eq!(report.rows.len(), 27);
//! ```

// Counting core
pub use groupsum_core::{
    count, count_with_outcome, solutions, CanonicalSolution, ConstrainedSumCounter, CountError,
    CountOutcome, CountStatus, Group, SearchStats, SumSystem,
};

// Sweep configuration
pub use groupsum_config::{ConfigError, ExecutionConfig, SweepConfig, ThreadCount};

// Scenario sweeps
pub use groupsum_scenario::{
    CsvExporter, RowResult, Scenario, ScenarioError, ScenarioGenerator, ScenarioRow, SkipReason,
    SweepReport, SweepRunner,
};

/// Console output, enabled by the `console` feature.
#[cfg(feature = "console")]
pub mod console {
    pub use groupsum_console::{init, init_with_level, print_banner, render_solutions, render_table};
}

pub mod prelude {
    pub use super::{count, count_with_outcome, solutions};
    pub use super::{CanonicalSolution, ConstrainedSumCounter, CountStatus, SumSystem};
    pub use super::{SweepConfig, SweepReport, SweepRunner, ThreadCount};
}
