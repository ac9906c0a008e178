//! Error types for scenario sweeps

use groupsum_config::ConfigError;
use groupsum_core::CountError;
use thiserror::Error;

/// Main error type for scenario sweeps
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The sweep configuration is inconsistent
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A generated equation system was rejected by the counter
    #[error("Counting error: {0}")]
    Count(#[from] CountError),

    /// The worker pool could not be built
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

/// Result type alias for scenario operations
pub type Result<T> = std::result::Result<T, ScenarioError>;
