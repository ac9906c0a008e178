//! Seeded random counting problems.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A randomly generated counting problem with a distinct-valued pool.
#[derive(Debug, Clone)]
pub struct RandomCase {
    pub targets: Vec<i64>,
    pub group_sizes: Vec<usize>,
    pub pool: Vec<i64>,
}

/// Builds a small problem from `seed`.
///
/// Pools hold at most 8 values drawn from `-4..=12`. Most targets are taken
/// from a random arrangement of the pool so that solutions usually exist;
/// some are shifted so that they usually do not. Occasionally the system
/// needs one value more than the pool holds.
pub fn random_case(seed: u64) -> RandomCase {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut universe: Vec<i64> = (-4..=12).collect();
    universe.shuffle(&mut rng);
    let pool_size = rng.random_range(2..=8);
    let pool: Vec<i64> = universe[..pool_size].to_vec();

    let group_count = rng.random_range(1..=3);
    let mut group_sizes = Vec::with_capacity(group_count);
    let mut total = 0;
    for _ in 0..group_count {
        let size = rng.random_range(1..=3);
        if total + size > pool_size + 1 {
            break;
        }
        group_sizes.push(size);
        total += size;
    }
    if group_sizes.is_empty() {
        group_sizes.push(1);
    }

    let mut arrangement = pool.clone();
    arrangement.shuffle(&mut rng);
    let mut targets = Vec::with_capacity(group_sizes.len());
    let mut start = 0;
    for &size in &group_sizes {
        let end = (start + size).min(arrangement.len());
        let mut target: i64 = arrangement[start.min(end)..end].iter().sum();
        if rng.random_bool(0.25) {
            target += rng.random_range(-3..=3);
        }
        targets.push(target);
        start = end;
    }

    RandomCase {
        targets,
        group_sizes,
        pool,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_case() {
        let a = random_case(17);
        let b = random_case(17);
        assert_eq!(a.targets, b.targets);
        assert_eq!(a.group_sizes, b.group_sizes);
        assert_eq!(a.pool, b.pool);
    }

    #[test]
    fn test_pool_is_distinct_and_aligned() {
        for seed in 0..64 {
            let case = random_case(seed);
            let mut sorted = case.pool.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), case.pool.len());
            assert_eq!(case.targets.len(), case.group_sizes.len());
            assert!(case.group_sizes.iter().all(|&s| s > 0));
        }
    }
}
