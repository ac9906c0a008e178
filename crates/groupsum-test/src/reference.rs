//! Combination-based reference counter.
//!
//! Chooses, equation by equation, an unordered subset of the still-unused
//! pool positions whose values hit the target. With distinct pool values each
//! sequence of chosen subsets is exactly one canonical solution, so the
//! number of sequences is the count. Shares no code with the
//! permutation-based counter.

/// Counts canonical solutions by choosing disjoint index subsets.
///
/// Assumes `targets.len() == group_sizes.len()` and distinct pool values.
pub fn reference_count(targets: &[i64], group_sizes: &[usize], pool: &[i64]) -> usize {
    assert_eq!(targets.len(), group_sizes.len(), "misaligned fixture");
    if pool.len() < group_sizes.iter().sum::<usize>() {
        return 0;
    }
    let mut used = vec![false; pool.len()];
    count_groups(targets, group_sizes, pool, &mut used)
}

fn count_groups(targets: &[i64], sizes: &[usize], pool: &[i64], used: &mut [bool]) -> usize {
    let (Some(&target), Some(&size)) = (targets.first(), sizes.first()) else {
        return 1;
    };
    let mut total = 0;
    choose(pool, used, 0, size, target, &mut |used| {
        total += count_groups(&targets[1..], &sizes[1..], pool, used);
    });
    total
}

// Visits every increasing index subset of unused positions from `from` on
// with `remaining` elements summing to `target`.
fn choose(
    pool: &[i64],
    used: &mut [bool],
    from: usize,
    remaining: usize,
    target: i64,
    visit: &mut dyn FnMut(&mut [bool]),
) {
    if remaining == 0 {
        if target == 0 {
            visit(used);
        }
        return;
    }
    for i in from..pool.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        choose(pool, used, i + 1, remaining - 1, target - pool[i], visit);
        used[i] = false;
    }
}
