//! GroupSum Core - constrained-sum counting
//!
//! Counts the distinct ways to assign distinct pool values to the variables
//! of an ordered system of sum equations, where reordering values within one
//! equation does not make a new solution but equation order does.
//!
//! - [`SumSystem`] pairs group sizes with target sums
//! - [`ConstrainedSumCounter`] enumerates assignments and deduplicates them
//!   by [`CanonicalSolution`]
//! - [`count`] is the one-call entry point
//!
//! # Example
//!
//! ```
//! use groupsum_core::{count_with_outcome, CountStatus};
//!
//! let outcome = count_with_outcome(&[7, 7], &[2, 2], &[1, 2, 3, 4, 5, 6]).unwrap();
//! assert_eq!(outcome.count, 6);
//! assert_eq!(outcome.status, CountStatus::Exhausted);
//! ```

pub mod canonical;
pub mod counter;
pub mod error;
pub mod stats;
pub mod system;


pub use canonical::{CanonicalGroup, CanonicalSolution};
pub use counter::{
    count, count_with_outcome, solutions, ConstrainedSumCounter, CountOutcome, CountStatus,
};
pub use error::{CountError, Result};
pub use stats::SearchStats;
pub use system::{Group, SumSystem};
