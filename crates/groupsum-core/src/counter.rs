//! Exhaustive constrained-sum counting.
//!
//! Every ordered selection of `N = Σ group sizes` distinct pool values is
//! sliced into consecutive groups in equation order. A selection is a match
//! when each slice sums to its target; matches are collapsed into canonical
//! solutions (groups sorted, equation order kept) and the distinct ones are
//! counted.
//!
//! Selections are built depth-first with a used marker per pool index. A
//! slice is checked as soon as it is complete, so a failing slice abandons
//! every selection sharing that prefix and later slices are never summed.
//!
//! Logging levels:
//! - **WARN**: Pool too small for the system
//! - **DEBUG**: Count start/end with search statistics, duplicate pool values

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::canonical::CanonicalSolution;
use crate::error::Result;
use crate::stats::{arrangement_count, SearchStats};
use crate::system::{Group, SumSystem};

/// Why a count has the value it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "snake_case"))]
pub enum CountStatus {
    /// The whole search space was explored.
    Exhausted,
    /// The pool holds fewer values than the system has variables; nothing
    /// was enumerated and the count is zero.
    PoolTooSmall { available: usize, required: usize },
}

/// A count together with how it was obtained.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CountOutcome {
    /// Number of distinct canonical solutions.
    pub count: usize,
    pub status: CountStatus,
    pub stats: SearchStats,
}

impl CountOutcome {
    pub fn is_pool_too_small(&self) -> bool {
        matches!(self.status, CountStatus::PoolTooSmall { .. })
    }
}

/// Counts canonical solutions of a fixed [`SumSystem`] against any pool.
///
/// # Examples
///
/// ```
/// use groupsum_core::{ConstrainedSumCounter, SumSystem};
///
/// let system = SumSystem::new(&[7, 7], &[2, 2]).unwrap();
/// let counter = ConstrainedSumCounter::new(system);
///
/// assert_eq!(counter.count(&[1, 2, 3, 4, 5, 6]), 6);
/// assert_eq!(counter.count(&[1, 2, 3]), 0);
/// ```
#[derive(Debug, Clone)]
pub struct ConstrainedSumCounter {
    system: SumSystem,
}

impl ConstrainedSumCounter {
    pub fn new(system: SumSystem) -> Self {
        Self { system }
    }

    pub fn system(&self) -> &SumSystem {
        &self.system
    }

    /// Number of distinct canonical solutions drawn from `pool`.
    ///
    /// Pool values are assumed distinct. Duplicates are not removed; they are
    /// treated as separate positions.
    pub fn count(&self, pool: &[i64]) -> usize {
        self.count_with_outcome(pool).count
    }

    /// Like [`count`](Self::count), but also reports whether the pool was too
    /// small and how much of the search space was visited.
    pub fn count_with_outcome(&self, pool: &[i64]) -> CountOutcome {
        match self.search(pool) {
            Ok((seen, stats)) => CountOutcome {
                count: seen.len(),
                status: CountStatus::Exhausted,
                stats,
            },
            Err(status) => CountOutcome {
                count: 0,
                status,
                stats: SearchStats::default(),
            },
        }
    }

    /// The distinct canonical solutions drawn from `pool`, sorted.
    ///
    /// Empty when the pool is too small.
    pub fn solutions(&self, pool: &[i64]) -> Vec<CanonicalSolution> {
        let mut solutions: Vec<_> = match self.search(pool) {
            Ok((seen, _)) => seen.into_iter().collect(),
            Err(_) => Vec::new(),
        };
        solutions.sort_unstable();
        solutions
    }

    fn search(
        &self,
        pool: &[i64],
    ) -> std::result::Result<(HashSet<CanonicalSolution>, SearchStats), CountStatus> {
        let required = self.system.total_variables();
        if pool.len() < required {
            warn!(
                event = "pool_too_small",
                available = pool.len(),
                required,
                "Pool size ({}) is too small. Need {} unique numbers.",
                pool.len(),
                required
            );
            return Err(CountStatus::PoolTooSmall {
                available: pool.len(),
                required,
            });
        }

        if has_duplicates(pool) {
            debug!(event = "duplicate_pool_values", pool_size = pool.len());
        }

        debug!(
            event = "count_start",
            group_count = self.system.len(),
            variable_count = required,
            pool_size = pool.len(),
            search_space = ?arrangement_count(pool.len(), required),
        );

        let mut search = Search::new(pool, self.system.groups());
        search.stats.start();
        search.extend(0, 0, 0);
        search.stats.finish();

        let Search { seen, stats, .. } = search;
        debug!(
            event = "count_end",
            count = seen.len(),
            slices_checked = stats.slices_checked,
            slices_rejected = stats.slices_rejected,
            matching_arrangements = stats.matching_arrangements,
            duration_ms = stats.duration_ms(),
        );
        Ok((seen, stats))
    }
}

/// Counts distinct canonical solutions of the system `targets`/`group_sizes`
/// drawn from `pool`.
///
/// A pool smaller than the total number of variables yields `Ok(0)` and a
/// WARN event.
///
/// # Errors
///
/// Returns an error when `targets` and `group_sizes` differ in length or a
/// group size is zero.
///
/// # Examples
///
/// ```
/// use groupsum_core::count;
///
/// // {1, 4} and {2, 3}
/// assert_eq!(count(&[5], &[2], &[1, 2, 3, 4]).unwrap(), 2);
/// assert!(count(&[5, 5], &[2], &[1, 2, 3, 4]).is_err());
/// ```
pub fn count(targets: &[i64], group_sizes: &[usize], pool: &[i64]) -> Result<usize> {
    let system = SumSystem::new(targets, group_sizes)?;
    Ok(ConstrainedSumCounter::new(system).count(pool))
}

/// [`count`] with status and statistics.
pub fn count_with_outcome(
    targets: &[i64],
    group_sizes: &[usize],
    pool: &[i64],
) -> Result<CountOutcome> {
    let system = SumSystem::new(targets, group_sizes)?;
    Ok(ConstrainedSumCounter::new(system).count_with_outcome(pool))
}

/// The distinct canonical solutions, sorted.
pub fn solutions(
    targets: &[i64],
    group_sizes: &[usize],
    pool: &[i64],
) -> Result<Vec<CanonicalSolution>> {
    let system = SumSystem::new(targets, group_sizes)?;
    Ok(ConstrainedSumCounter::new(system).solutions(pool))
}

fn has_duplicates(pool: &[i64]) -> bool {
    let mut seen = HashSet::with_capacity(pool.len());
    !pool.iter().all(|v| seen.insert(*v))
}

// Depth-first construction of ordered selections.
struct Search<'a> {
    pool: &'a [i64],
    groups: &'a [Group],
    used: Vec<bool>,
    arrangement: Vec<i64>,
    seen: HashSet<CanonicalSolution>,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    fn new(pool: &'a [i64], groups: &'a [Group]) -> Self {
        let total = groups.iter().map(|g| g.size).sum();
        Self {
            pool,
            groups,
            used: vec![false; pool.len()],
            arrangement: Vec::with_capacity(total),
            seen: HashSet::new(),
            stats: SearchStats::default(),
        }
    }

    /// Extends the current prefix. `group_start` is where group
    /// `group_index` begins in the arrangement; `partial_sum` is the sum of
    /// its values placed so far.
    fn extend(&mut self, group_index: usize, group_start: usize, partial_sum: i128) {
        let Some(group) = self.groups.get(group_index).copied() else {
            self.record_match();
            return;
        };

        for i in 0..self.pool.len() {
            if self.used[i] {
                continue;
            }
            let value = self.pool[i];
            let sum = partial_sum + i128::from(value);

            self.used[i] = true;
            self.arrangement.push(value);

            if self.arrangement.len() - group_start == group.size {
                let matched = sum == i128::from(group.target);
                self.stats.record_slice(matched);
                if matched {
                    self.extend(group_index + 1, self.arrangement.len(), 0);
                }
            } else {
                self.extend(group_index, group_start, sum);
            }

            self.arrangement.pop();
            self.used[i] = false;
        }
    }

    fn record_match(&mut self) {
        let solution = CanonicalSolution::from_arrangement(
            &self.arrangement,
            self.groups.iter().map(|g| g.size),
        );
        let new_solution = self.seen.insert(solution);
        self.stats.record_match(new_solution);
    }
}
