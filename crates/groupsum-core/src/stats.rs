//! Search statistics.
//!
//! Stack-allocated counters describing one counting run.

use std::time::{Duration, Instant};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Statistics for a single counting run.
///
/// # Example
///
/// ```
/// use groupsum_core::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_slice(true);
/// stats.record_slice(false);
/// stats.record_match(true);
/// stats.finish();
///
/// assert_eq!(stats.slices_checked, 2);
/// assert_eq!(stats.slices_rejected, 1);
/// assert_eq!(stats.matching_arrangements, 1);
/// assert_eq!(stats.unique_solutions, 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchStats {
    #[cfg_attr(feature = "serde", serde(skip))]
    start_time: Option<Instant>,
    /// Wall time of the run, set by [`SearchStats::finish`].
    pub duration: Duration,
    /// Completed slices whose sum was compared with its target.
    pub slices_checked: u64,
    /// Slices whose sum missed the target; the arrangement was abandoned.
    pub slices_rejected: u64,
    /// Full arrangements whose every slice matched.
    pub matching_arrangements: u64,
    /// Matching arrangements that produced a new canonical solution.
    pub unique_solutions: u64,
}

impl SearchStats {
    /// Marks the start of the search.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Freezes the elapsed time into `duration`.
    pub fn finish(&mut self) {
        self.duration = self.elapsed();
    }

    /// Elapsed time since [`SearchStats::start`].
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration.as_millis() as u64
    }

    /// Records a completed slice and whether it hit its target.
    pub fn record_slice(&mut self, matched: bool) {
        self.slices_checked += 1;
        if !matched {
            self.slices_rejected += 1;
        }
    }

    /// Records a fully matching arrangement and whether its canonical form
    /// was new.
    pub fn record_match(&mut self, new_solution: bool) {
        self.matching_arrangements += 1;
        if new_solution {
            self.unique_solutions += 1;
        }
    }

    /// Matching arrangements that collapsed onto an already seen solution.
    pub fn duplicates_collapsed(&self) -> u64 {
        self.matching_arrangements - self.unique_solutions
    }
}

/// Number of ordered selections of `length` distinct items out of `pool_size`,
/// `pool_size! / (pool_size - length)!`.
///
/// Returns `None` on overflow, `Some(0)` when `length > pool_size`.
///
/// ```
/// use groupsum_core::stats::arrangement_count;
///
/// assert_eq!(arrangement_count(9, 6), Some(60_480));
/// assert_eq!(arrangement_count(4, 0), Some(1));
/// assert_eq!(arrangement_count(3, 4), Some(0));
/// ```
pub fn arrangement_count(pool_size: usize, length: usize) -> Option<u128> {
    if length > pool_size {
        return Some(0);
    }
    ((pool_size - length + 1)..=pool_size).try_fold(1u128, |acc, n| acc.checked_mul(n as u128))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_collapsed() {
        let mut stats = SearchStats::default();
        stats.record_match(true);
        stats.record_match(false);
        stats.record_match(false);

        assert_eq!(stats.matching_arrangements, 3);
        assert_eq!(stats.unique_solutions, 1);
        assert_eq!(stats.duplicates_collapsed(), 2);
    }

    #[test]
    fn test_elapsed_without_start_is_zero() {
        let mut stats = SearchStats::default();
        stats.finish();
        assert_eq!(stats.duration, Duration::ZERO);
    }

    #[test]
    fn test_arrangement_count() {
        assert_eq!(arrangement_count(4, 2), Some(12));
        assert_eq!(arrangement_count(6, 4), Some(360));
        assert_eq!(arrangement_count(0, 0), Some(1));
        assert_eq!(arrangement_count(200, 100), None);
    }
}
