//! Errors reported by [`Tree`][crate::Tree] operations.

use std::fmt;

use thiserror::Error;

/// Which end of the ordering a lookup was asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extremum {
    /// The smallest value in the tree.
    Minimum,
    /// The largest value in the tree.
    Maximum,
}

impl fmt::Display for Extremum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minimum => f.write_str("minimum"),
            Self::Maximum => f.write_str("maximum"),
        }
    }
}

/// Everything that can go wrong when asking a [`Tree`][crate::Tree] for a value.
///
/// Lookups that can simply miss (`search`, `delete`) report that with a `bool` instead.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TreeError {
    /// The tree has no nodes so there is nothing to return.
    #[error("cannot find {0} in empty tree")]
    EmptyTree(Extremum),
}
