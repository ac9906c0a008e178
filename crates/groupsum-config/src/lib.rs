//! Configuration system for GroupSum.
//!
//! Load sweep configuration from TOML or YAML files to describe the puzzle
//! layout and execution settings without code changes. Every field has a
//! default; the defaults describe the magic triangle over the digits 1-9.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use groupsum_config::{SweepConfig, ThreadCount};
//!
//! let config = SweepConfig::from_toml_str(r#"
//!     universe = [1, 2, 3, 4, 5, 6, 7, 8, 9]
//!     group_sizes = [2, 2, 2]
//!     vertex_classes = [[1, 4, 7], [2, 5, 8], [3, 6, 9]]
//!     edges = [[0, 1], [0, 2], [2, 1]]
//!
//!     [execution]
//!     thread_count = { count = 4 }
//! "#).unwrap();
//!
//! assert_eq!(config.execution.thread_count, ThreadCount::Count(4));
//! assert_eq!(config.scenario_count(), 27);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use groupsum_config::SweepConfig;
//!
//! let config = SweepConfig::load("groupsum.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Polygon-puzzle sweep configuration.
///
/// Each vertex of the polygon takes one value from its class; each edge
/// joins two vertices and carries `group_sizes[e]` interior variables. All
/// edges share one common sum, and every universe value is used once.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SweepConfig {
    /// All values of the puzzle, in pool order.
    pub universe: Vec<i64>,

    /// Interior variable count per edge, in equation order.
    pub group_sizes: Vec<usize>,

    /// Candidate values per vertex.
    pub vertex_classes: Vec<Vec<i64>>,

    /// Vertex index pairs, one per equation.
    pub edges: Vec<[usize; 2]>,

    /// Execution settings.
    pub execution: ExecutionConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            universe: (1..=9).collect(),
            group_sizes: vec![2, 2, 2],
            vertex_classes: vec![vec![1, 4, 7], vec![2, 5, 8], vec![3, 6, 9]],
            edges: vec![[0, 1], [0, 2], [2, 1]],
            execution: ExecutionConfig::default(),
        }
    }
}

impl SweepConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML or YAML file.
    ///
    /// Files ending in `.yaml` or `.yml` are read as YAML, anything else as
    /// TOML.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, does not parse, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml" | "yml")
        );
        let config = if is_yaml {
            Self::from_yaml_file(path)?
        } else {
            Self::from_toml_file(path)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Serializes the configuration to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Sets the universe of values.
    pub fn with_universe(mut self, universe: impl IntoIterator<Item = i64>) -> Self {
        self.universe = universe.into_iter().collect();
        self
    }

    /// Adds a vertex with its candidate values.
    pub fn with_vertex_class(mut self, class: impl IntoIterator<Item = i64>) -> Self {
        self.vertex_classes.push(class.into_iter().collect());
        self
    }

    /// Adds an edge between two vertices carrying `size` interior variables.
    pub fn with_edge(mut self, from: usize, to: usize, size: usize) -> Self {
        self.edges.push([from, to]);
        self.group_sizes.push(size);
        self
    }

    /// Sets the worker thread count.
    pub fn with_thread_count(mut self, thread_count: ThreadCount) -> Self {
        self.execution.thread_count = thread_count;
        self
    }

    /// Removes every vertex and edge, keeping universe and execution.
    pub fn without_layout(mut self) -> Self {
        self.vertex_classes.clear();
        self.edges.clear();
        self.group_sizes.clear();
        self
    }

    /// Number of vertex value combinations, i.e. scenarios in the sweep.
    pub fn scenario_count(&self) -> usize {
        self.vertex_classes.iter().map(Vec::len).product()
    }

    /// How many edges meet at `vertex`.
    pub fn degree(&self, vertex: usize) -> usize {
        self.edges
            .iter()
            .map(|[a, b]| usize::from(*a == vertex) + usize::from(*b == vertex))
            .sum()
    }

    /// Checks structural consistency.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] when there are no edges, edges and group
    /// sizes are misaligned, a group size is zero, an edge references a
    /// missing vertex or loops, a vertex class is empty or names a value
    /// outside the universe, or the universe repeats a value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.edges.is_empty() {
            return Err(ConfigError::Invalid("layout has no edges".to_string()));
        }
        if self.edges.len() != self.group_sizes.len() {
            return Err(ConfigError::Invalid(format!(
                "{} edges but {} group sizes",
                self.edges.len(),
                self.group_sizes.len()
            )));
        }
        if let Some(i) = self.group_sizes.iter().position(|&s| s == 0) {
            return Err(ConfigError::Invalid(format!("group size {} is zero", i)));
        }

        let mut seen = HashSet::with_capacity(self.universe.len());
        for value in &self.universe {
            if !seen.insert(*value) {
                return Err(ConfigError::Invalid(format!(
                    "universe repeats value {}",
                    value
                )));
            }
        }

        for (i, class) in self.vertex_classes.iter().enumerate() {
            if class.is_empty() {
                return Err(ConfigError::Invalid(format!("vertex class {} is empty", i)));
            }
            if let Some(value) = class.iter().find(|v| !seen.contains(*v)) {
                return Err(ConfigError::Invalid(format!(
                    "vertex class {} value {} is not in the universe",
                    i, value
                )));
            }
        }

        let vertex_count = self.vertex_classes.len();
        for (i, [a, b]) in self.edges.iter().enumerate() {
            if *a >= vertex_count || *b >= vertex_count {
                return Err(ConfigError::Invalid(format!(
                    "edge {} references vertex outside 0..{}",
                    i, vertex_count
                )));
            }
            if a == b {
                return Err(ConfigError::Invalid(format!("edge {} is a loop", i)));
            }
        }

        Ok(())
    }
}

/// Execution configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ExecutionConfig {
    /// Number of threads counting scenarios concurrently.
    pub thread_count: ThreadCount,
}

impl ExecutionConfig {
    pub fn is_parallel(&self) -> bool {
        !matches!(self.thread_count, ThreadCount::None | ThreadCount::Count(0 | 1))
    }
}

/// Scenario thread count configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadCount {
    /// Use the global rayon pool.
    #[default]
    Auto,

    /// Count scenarios one after another on the calling thread.
    None,

    /// Specific number of threads.
    Count(usize),
}
