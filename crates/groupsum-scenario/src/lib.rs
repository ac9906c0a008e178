//! Scenario sweeps for GroupSum.
//!
//! Derives counting problems from a polygon puzzle layout and hands each one
//! to the constrained-sum counter:
//!
//! - [`ScenarioGenerator`] - one [`Scenario`] per choice of vertex values
//! - [`SweepRunner`] - counts every scenario, in parallel with rayon
//! - [`SweepReport`] - rows in generation order, with totals
//! - [`CsvExporter`] - CSV export of a report
//!
//! # Example
//!
//! ```
//! use groupsum_config::SweepConfig;
//! use groupsum_scenario::SweepRunner;
//!
//! let report = SweepRunner::new(SweepConfig::default()).unwrap().run().unwrap();
//! assert_eq!(report.solvable_count(), 7);
//! ```

mod error;
mod generator;
mod report;
mod result;
mod runner;

#[cfg(test)]
mod tests;

pub use error::{Result, ScenarioError};
pub use generator::{EdgeTargets, Scenario, ScenarioGenerator, SkipReason};
pub use report::CsvExporter;
pub use result::{RowResult, ScenarioRow, SweepReport};
pub use runner::SweepRunner;
