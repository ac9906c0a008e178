//! Shared test fixtures for GroupSum crates.
//!
//! This crate provides plain data and pure functions for testing. It does
//! NOT depend on `groupsum-core`, so the fixtures can be used from the core's
//! own unit tests without pulling in a second copy of its types.
//!
//! - [`golden`] - Hand-checked counting cases and the default puzzle sweep
//! - [`reference`] - Independent combination-based counter for cross-checks
//! - [`random`] - Seeded random systems and pools
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! groupsum-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use groupsum_test::golden::golden_cases;
//! use groupsum_test::reference::reference_count;
//! ```

pub mod golden;
pub mod random;
pub mod reference;

pub use golden::{golden_cases, puzzle_sweep, GoldenCase, PuzzleRow};
pub use random::{random_case, RandomCase};
pub use reference::reference_count;
