//! Error types for GroupSum counting

use thiserror::Error;

/// Rejected equation systems.
///
/// A pool that is too small is not an error: it is reported through
/// `tracing` and yields a count of zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountError {
    /// Targets and group sizes are not positionally aligned
    #[error("Length mismatch: {targets} targets for {groups} group sizes")]
    LengthMismatch { targets: usize, groups: usize },

    /// A group with no variables
    #[error("Group {index} has size 0; group sizes must be positive")]
    EmptyGroup { index: usize },
}

/// Result type alias for counting operations
pub type Result<T> = std::result::Result<T, CountError>;
