//! Canonical solution form.
//!
//! A solution is an ordered list of groups, one per equation. Values inside a
//! group are sorted so that reorderings within an equation compare equal,
//! while equation order is kept as-is.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Sorted values assigned to one equation.
pub type CanonicalGroup = SmallVec<[i64; 4]>;

/// Equation-ordered, group-sorted representation of an assignment.
///
/// # Examples
///
/// ```
/// use groupsum_core::CanonicalSolution;
///
/// let a = CanonicalSolution::from_arrangement(&[6, 1, 5, 2], [2, 2]);
/// let b = CanonicalSolution::from_arrangement(&[1, 6, 2, 5], [2, 2]);
/// let swapped = CanonicalSolution::from_arrangement(&[2, 5, 1, 6], [2, 2]);
///
/// assert_eq!(a, b);
/// assert_ne!(a, swapped);
/// assert_eq!(a.to_string(), "{1, 6} | {2, 5}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CanonicalSolution {
    groups: Vec<CanonicalGroup>,
}

impl CanonicalSolution {
    /// Slices `arrangement` into consecutive groups of `group_sizes` and sorts
    /// each slice.
    ///
    /// # Panics
    ///
    /// Panics if the sizes add up to more than `arrangement.len()`.
    pub fn from_arrangement<I>(arrangement: &[i64], group_sizes: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut groups = Vec::new();
        let mut start = 0;
        for size in group_sizes {
            let mut group: CanonicalGroup = arrangement[start..start + size].iter().copied().collect();
            group.sort_unstable();
            groups.push(group);
            start += size;
        }
        Self { groups }
    }

    /// Groups in equation order.
    pub fn groups(&self) -> &[CanonicalGroup] {
        &self.groups
    }

    pub fn group(&self, index: usize) -> Option<&[i64]> {
        self.groups.get(index).map(|g| g.as_slice())
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// All assigned values, group by group.
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.groups.iter().flat_map(|g| g.iter().copied())
    }
}

impl fmt::Display for CanonicalSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{{")?;
            for (j, value) in group.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "}}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_within_groups_only() {
        let solution = CanonicalSolution::from_arrangement(&[9, 3, 8, 1, 2], [3, 2]);

        assert_eq!(solution.len(), 2);
        assert_eq!(solution.group(0), Some(&[3, 8, 9][..]));
        assert_eq!(solution.group(1), Some(&[1, 2][..]));
        assert_eq!(solution.values().collect::<Vec<_>>(), vec![3, 8, 9, 1, 2]);
    }

    #[test]
    fn test_reordering_within_group_is_equal() {
        let a = CanonicalSolution::from_arrangement(&[1, 4, 2, 3], [2, 2]);
        let b = CanonicalSolution::from_arrangement(&[4, 1, 3, 2], [2, 2]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_equation_order_is_significant() {
        let a = CanonicalSolution::from_arrangement(&[1, 4, 2, 3], [2, 2]);
        let b = CanonicalSolution::from_arrangement(&[2, 3, 1, 4], [2, 2]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_ignores_trailing_values() {
        let solution = CanonicalSolution::from_arrangement(&[5, 1, 7], [2]);
        assert_eq!(solution.group(0), Some(&[1, 5][..]));
        assert_eq!(solution.group(1), None);
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(CanonicalSolution::default().to_string(), "");
    }
}
