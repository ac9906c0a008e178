//! Scenario generation for polygon puzzles.
//!
//! A polygon puzzle places one value on each vertex and `group_sizes[e]`
//! values on the interior of each edge `e`, using every universe value once,
//! so that all edges have the same sum `S`. Fixing the vertex values leaves a
//! pool of interior values and one target per edge:
//!
//! ```text
//! S * |edges| = Σ universe + Σ_v (deg(v) - 1) * value(v)
//! target(e = (i, j)) = S - value(i) - value(j)
//! ```

use std::fmt;

use groupsum_config::{ConfigError, SweepConfig};
use groupsum_core::{Result as CountResult, SumSystem};
use serde::Serialize;

/// Why a scenario was not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// Two vertices took the same value.
    RepeatedVertexValue { value: i64 },
    /// The common edge sum is not an integer.
    NonIntegralSum { numerator: i64, edges: usize },
    /// Fewer interior values than interior variables.
    PoolTooSmall { available: usize, required: usize },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::RepeatedVertexValue { value } => {
                write!(f, "vertex value {} used twice", value)
            }
            SkipReason::NonIntegralSum { numerator, edges } => {
                write!(f, "S = {}/{} is not an integer", numerator, edges)
            }
            SkipReason::PoolTooSmall {
                available,
                required,
            } => write!(
                f,
                "pool size ({}) too small, need {}",
                available, required
            ),
        }
    }
}

/// Targets of a scenario that can be counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeTargets {
    /// Common edge sum.
    pub common_sum: i64,
    /// One target per edge, in equation order.
    pub targets: Vec<i64>,
}

/// One choice of vertex values and the counting problem it leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    /// Position in generation order (0-based).
    pub index: usize,
    /// Chosen value per vertex.
    pub vertex_values: Vec<i64>,
    /// Universe minus vertex values, in universe order.
    pub pool: Vec<i64>,
    /// Targets, or why there are none.
    pub plan: std::result::Result<EdgeTargets, SkipReason>,
}

impl Scenario {
    pub fn targets(&self) -> Option<&[i64]> {
        self.plan.as_ref().ok().map(|p| p.targets.as_slice())
    }

    pub fn common_sum(&self) -> Option<i64> {
        self.plan.as_ref().ok().map(|p| p.common_sum)
    }

    /// The equation system of this scenario, if it has targets.
    pub fn system(&self, group_sizes: &[usize]) -> Option<CountResult<SumSystem>> {
        self.targets()
            .map(|targets| SumSystem::new(targets, group_sizes))
    }
}

/// Iterates over every vertex value combination of a [`SweepConfig`].
///
/// Combinations are produced in cartesian-product order with the last vertex
/// varying fastest. The configuration is validated up front, so every edge
/// references an existing vertex and the edge count is never zero.
///
/// # Examples
///
/// ```
/// use groupsum_config::SweepConfig;
/// use groupsum_scenario::ScenarioGenerator;
///
/// let config = SweepConfig::default();
/// let scenarios: Vec<_> = ScenarioGenerator::new(&config).unwrap().collect();
///
/// assert_eq!(scenarios.len(), 27);
/// assert_eq!(scenarios[0].vertex_values, vec![1, 2, 3]);
/// assert_eq!(scenarios[0].pool, vec![4, 5, 6, 7, 8, 9]);
/// assert_eq!(scenarios[0].targets(), Some(&[14, 13, 12][..]));
/// ```
pub struct ScenarioGenerator<'a> {
    config: &'a SweepConfig,
    cursor: Vec<usize>,
    index: usize,
    done: bool,
}

impl<'a> ScenarioGenerator<'a> {
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] when `config` fails
    /// [`SweepConfig::validate`].
    pub fn new(config: &'a SweepConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            cursor: vec![0; config.vertex_classes.len()],
            index: 0,
            done: false,
        })
    }

    fn current(&self) -> Scenario {
        let vertex_values: Vec<i64> = self
            .cursor
            .iter()
            .zip(&self.config.vertex_classes)
            .map(|(&i, class)| class[i])
            .collect();
        let pool: Vec<i64> = self
            .config
            .universe
            .iter()
            .copied()
            .filter(|v| !vertex_values.contains(v))
            .collect();
        let plan = plan_targets(self.config, &vertex_values);

        Scenario {
            index: self.index,
            vertex_values,
            pool,
            plan,
        }
    }

    // Odometer step; returns false after the last combination.
    fn advance(&mut self) -> bool {
        for pos in (0..self.cursor.len()).rev() {
            self.cursor[pos] += 1;
            if self.cursor[pos] < self.config.vertex_classes[pos].len() {
                return true;
            }
            self.cursor[pos] = 0;
        }
        false
    }
}

impl Iterator for ScenarioGenerator<'_> {
    type Item = Scenario;

    fn next(&mut self) -> Option<Scenario> {
        if self.done {
            return None;
        }
        let scenario = self.current();
        self.index += 1;
        self.done = !self.advance();
        Some(scenario)
    }
}

fn plan_targets(
    config: &SweepConfig,
    vertex_values: &[i64],
) -> std::result::Result<EdgeTargets, SkipReason> {
    for (i, value) in vertex_values.iter().enumerate() {
        if vertex_values[..i].contains(value) {
            return Err(SkipReason::RepeatedVertexValue { value: *value });
        }
    }

    let universe_sum: i64 = config.universe.iter().sum();
    let shared: i64 = vertex_values
        .iter()
        .enumerate()
        .map(|(v, value)| (config.degree(v) as i64 - 1) * value)
        .sum();
    let numerator = universe_sum + shared;
    let edges = config.edges.len();
    if numerator % edges as i64 != 0 {
        return Err(SkipReason::NonIntegralSum { numerator, edges });
    }

    let common_sum = numerator / edges as i64;
    let targets = config
        .edges
        .iter()
        .map(|&[a, b]| common_sum - vertex_values[a] - vertex_values[b])
        .collect();

    Ok(EdgeTargets {
        common_sum,
        targets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use groupsum_test::puzzle_sweep;

    #[test]
    fn test_default_sweep_matches_fixture() {
        let config = SweepConfig::default();
        let scenarios: Vec<_> = ScenarioGenerator::new(&config).unwrap().collect();
        let expected = puzzle_sweep();

        assert_eq!(scenarios.len(), expected.len());
        for (scenario, row) in scenarios.iter().zip(&expected) {
            assert_eq!(scenario.vertex_values, row.vertices.to_vec());
            assert_eq!(scenario.targets(), Some(&row.targets[..]));
            assert_eq!(scenario.common_sum(), Some(row.common_sum));
            assert_eq!(scenario.pool.len(), 6);
        }
        assert_eq!(scenarios.last().map(|s| s.index), Some(26));
    }

    #[test]
    fn test_last_vertex_varies_fastest() {
        let config = SweepConfig::default();
        let firsts: Vec<Vec<i64>> = ScenarioGenerator::new(&config)
            .unwrap()
            .take(4)
            .map(|s| s.vertex_values)
            .collect();
        assert_eq!(
            firsts,
            vec![vec![1, 2, 3], vec![1, 2, 6], vec![1, 2, 9], vec![1, 5, 3]]
        );
    }

    #[test]
    fn test_non_integral_sum_is_skipped() {
        // Universe sum 45; S * 3 = 45 + a + b + c
        let config = SweepConfig::default().without_layout();
        let config = config
            .with_vertex_class([1])
            .with_vertex_class([2])
            .with_vertex_class([4])
            .with_edge(0, 1, 2)
            .with_edge(0, 2, 2)
            .with_edge(2, 1, 2);

        let scenario = ScenarioGenerator::new(&config).unwrap().next().unwrap();
        assert_eq!(
            scenario.plan,
            Err(SkipReason::NonIntegralSum {
                numerator: 52,
                edges: 3
            })
        );
        assert_eq!(scenario.targets(), None);
    }

    #[test]
    fn test_repeated_vertex_value_is_skipped() {
        let config = SweepConfig::default()
            .without_layout()
            .with_vertex_class([1, 2])
            .with_vertex_class([2, 3])
            .with_edge(0, 1, 3);

        let plans: Vec<_> = ScenarioGenerator::new(&config)
            .unwrap()
            .map(|s| s.plan)
            .collect();
        assert_eq!(plans.len(), 4);
        assert_eq!(plans[2], Err(SkipReason::RepeatedVertexValue { value: 2 }));
    }

    #[test]
    fn test_square_layout() {
        // Square over 1..=8: vertices 1, 2, 3, 4; one interior value per edge.
        let config = SweepConfig::default()
            .without_layout()
            .with_universe(1..=8)
            .with_vertex_class([1])
            .with_vertex_class([2])
            .with_vertex_class([3])
            .with_vertex_class([4])
            .with_edge(0, 1, 1)
            .with_edge(1, 2, 1)
            .with_edge(2, 3, 1)
            .with_edge(3, 0, 1);

        let scenario = ScenarioGenerator::new(&config).unwrap().next().unwrap();
        // (36 + 10) / 4 is not integral
        assert!(scenario.plan.is_err());

        let config = SweepConfig {
            vertex_classes: vec![vec![1], vec![2], vec![3], vec![6]],
            ..config
        };
        let scenario = ScenarioGenerator::new(&config).unwrap().next().unwrap();
        // (36 + 12) / 4 = 12
        assert_eq!(scenario.common_sum(), Some(12));
        assert_eq!(scenario.targets(), Some(&[9, 7, 3, 5][..]));
        assert_eq!(scenario.pool, vec![4, 5, 7, 8]);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = SweepConfig::default();
        config.vertex_classes[1].clear();
        assert!(matches!(
            ScenarioGenerator::new(&config),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_out_of_range_edge_is_rejected() {
        let config = SweepConfig::default().with_edge(0, 3, 1);
        assert!(ScenarioGenerator::new(&config).is_err());
    }

    #[test]
    fn test_layout_without_edges_is_rejected() {
        let config = SweepConfig::default()
            .without_layout()
            .with_vertex_class([1])
            .with_vertex_class([2]);
        assert!(ScenarioGenerator::new(&config).is_err());
    }

    #[test]
    fn test_system_pairs_targets_with_sizes() {
        let config = SweepConfig::default();
        let scenario = ScenarioGenerator::new(&config).unwrap().next().unwrap();
        let system = scenario.system(&config.group_sizes).unwrap().unwrap();
        assert_eq!(system.total_variables(), 6);
        assert_eq!(system.targets().collect::<Vec<_>>(), vec![14, 13, 12]);
    }

    #[test]
    fn test_skip_reason_display() {
        let reason = SkipReason::PoolTooSmall {
            available: 5,
            required: 6,
        };
        assert_eq!(reason.to_string(), "pool size (5) too small, need 6");
    }
}
