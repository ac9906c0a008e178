//! Equation systems: ordered groups of variables with target sums.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CountError, Result};

/// One equation: `size` distinct variables that must sum to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Group {
    /// Number of variables in the equation.
    pub size: usize,
    /// Required sum of the variables.
    pub target: i64,
}

impl Group {
    pub fn new(size: usize, target: i64) -> Self {
        Self { size, target }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vars = {}", self.size, self.target)
    }
}

/// A validated, ordered system of sum equations.
///
/// Equation order is significant and preserved. Every group has at least
/// one variable.
///
/// # Examples
///
/// ```
/// use groupsum_core::SumSystem;
///
/// let system = SumSystem::new(&[7, 7], &[2, 2]).unwrap();
/// assert_eq!(system.len(), 2);
/// assert_eq!(system.total_variables(), 4);
///
/// assert!(SumSystem::new(&[7, 7], &[2]).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SumSystem {
    groups: Vec<Group>,
}

impl SumSystem {
    /// Pairs `targets[i]` with `group_sizes[i]`.
    ///
    /// # Errors
    ///
    /// [`CountError::LengthMismatch`] when the slices differ in length,
    /// [`CountError::EmptyGroup`] when a size is zero.
    pub fn new(targets: &[i64], group_sizes: &[usize]) -> Result<Self> {
        if targets.len() != group_sizes.len() {
            return Err(CountError::LengthMismatch {
                targets: targets.len(),
                groups: group_sizes.len(),
            });
        }

        let groups = group_sizes
            .iter()
            .zip(targets)
            .map(|(&size, &target)| Group::new(size, target))
            .collect();
        Self::from_groups(groups)
    }

    /// Builds a system from already-paired groups.
    pub fn from_groups(groups: Vec<Group>) -> Result<Self> {
        if let Some(index) = groups.iter().position(|g| g.size == 0) {
            return Err(CountError::EmptyGroup { index });
        }
        Ok(Self { groups })
    }

    /// Groups in equation order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Number of equations.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of variables, i.e. distinct pool values consumed by one
    /// solution.
    pub fn total_variables(&self) -> usize {
        self.groups.iter().map(|g| g.size).sum()
    }

    pub fn targets(&self) -> impl Iterator<Item = i64> + '_ {
        self.groups.iter().map(|g| g.target)
    }

    pub fn group_sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.groups.iter().map(|g| g.size)
    }
}

impl fmt::Display for SumSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", group)?;
        }
        Ok(())
    }
}
