//! Counting cases with known answers.

/// One counting problem and its expected result.
#[derive(Debug, Clone)]
pub struct GoldenCase {
    pub name: &'static str,
    pub targets: Vec<i64>,
    pub group_sizes: Vec<usize>,
    pub pool: Vec<i64>,
    pub expected: usize,
}

impl GoldenCase {
    fn new(
        name: &'static str,
        targets: &[i64],
        group_sizes: &[usize],
        pool: &[i64],
        expected: usize,
    ) -> Self {
        Self {
            name,
            targets: targets.to_vec(),
            group_sizes: group_sizes.to_vec(),
            pool: pool.to_vec(),
            expected,
        }
    }

    /// Whether the pool cannot cover every variable.
    pub fn pool_too_small(&self) -> bool {
        self.pool.len() < self.group_sizes.iter().sum::<usize>()
    }
}

/// Cases whose counts were verified by hand.
pub fn golden_cases() -> Vec<GoldenCase> {
    vec![
        // {1, 4} and {2, 3}
        GoldenCase::new("single_pair", &[5], &[2], &[1, 2, 3, 4], 2),
        // {1, 2} is the only pair summing to 3
        GoldenCase::new("no_second_pair", &[3, 3], &[2, 2], &[1, 2, 3, 4], 0),
        // Ordered choice of two of {1, 6}, {2, 5}, {3, 4}
        GoldenCase::new("two_sevens", &[7, 7], &[2, 2], &[1, 2, 3, 4, 5, 6], 6),
        GoldenCase::new("pool_too_small", &[4, 4], &[2, 2], &[1, 2, 3], 0),
        // One empty solution
        GoldenCase::new("empty_system", &[], &[], &[1, 2], 1),
        // {1, 2, 3}
        GoldenCase::new("single_triple", &[6], &[3], &[1, 2, 3, 4, 5], 1),
        // {1, 4, 5} | {2, 3} and {2, 3, 5} | {1, 4}
        GoldenCase::new("triple_then_pair", &[10, 5], &[3, 2], &[1, 2, 3, 4, 5, 6, 7], 2),
        // {3} | {1}
        GoldenCase::new("singletons", &[3, 1], &[1, 1], &[1, 2, 3], 1),
        // {-2, 2} | {5} and {-1, 1} | {5}
        GoldenCase::new("negative_values", &[0, 5], &[2, 1], &[-2, -1, 1, 2, 5], 2),
    ]
}

/// One scenario of the default magic-triangle sweep.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleRow {
    pub vertices: [i64; 3],
    pub targets: [i64; 3],
    pub common_sum: i64,
    pub solutions: usize,
}

const fn row(vertices: [i64; 3], targets: [i64; 3], common_sum: i64, solutions: usize) -> PuzzleRow {
    PuzzleRow {
        vertices,
        targets,
        common_sum,
        solutions,
    }
}

/// Expected rows of the default sweep (universe 1..=9, vertex classes
/// `{1,4,7}`, `{2,5,8}`, `{3,6,9}`, three edges of two interior values), in
/// generation order.
pub fn puzzle_sweep() -> Vec<PuzzleRow> {
    vec![
        row([1, 2, 3], [14, 13, 12], 17, 2),
        row([1, 2, 6], [15, 11, 10], 18, 0),
        row([1, 2, 9], [16, 9, 8], 19, 0),
        row([1, 5, 3], [12, 14, 10], 18, 0),
        row([1, 5, 6], [13, 12, 8], 19, 0),
        row([1, 5, 9], [14, 10, 6], 20, 1),
        row([1, 8, 3], [10, 15, 8], 19, 0),
        row([1, 8, 6], [11, 13, 6], 20, 0),
        row([1, 8, 9], [12, 11, 4], 21, 0),
        row([4, 2, 3], [12, 11, 13], 18, 0),
        row([4, 2, 6], [13, 9, 11], 19, 0),
        row([4, 2, 9], [14, 7, 9], 20, 0),
        row([4, 5, 3], [10, 12, 11], 19, 0),
        row([4, 5, 6], [11, 10, 9], 20, 2),
        row([4, 5, 9], [12, 8, 7], 21, 0),
        row([4, 8, 3], [8, 13, 9], 20, 0),
        row([4, 8, 6], [9, 11, 7], 21, 0),
        row([4, 8, 9], [10, 9, 5], 22, 0),
        row([7, 2, 3], [10, 9, 14], 19, 2),
        row([7, 2, 6], [11, 7, 12], 20, 0),
        row([7, 2, 9], [12, 5, 10], 21, 0),
        row([7, 5, 3], [8, 10, 12], 20, 1),
        row([7, 5, 6], [9, 8, 10], 21, 0),
        row([7, 5, 9], [10, 6, 8], 22, 0),
        row([7, 8, 3], [6, 11, 10], 21, 2),
        row([7, 8, 6], [7, 9, 8], 22, 0),
        row([7, 8, 9], [8, 7, 6], 23, 2),
    ]
}
