//! Error type shared by all algorithms in this crate.

use thiserror::Error;

/// Errors reported by the Pareto filter and the step-search optimizer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A candidate's criterion count differs from the one it is compared with.
    ///
    /// `index` is the position of the offending candidate in the input
    /// collection, or `1` for a direct pairwise comparison (the right operand).
    #[error("candidate {index} has {found} criteria, expected {expected}")]
    ArityMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// The difference at `position` does not fit in the criterion type.
    #[error("criterion difference at position {position} overflows")]
    DifferenceOverflow { position: usize },

    /// Both compared candidates have no criteria.
    #[error("cannot take a pairwise difference of empty candidates")]
    EmptyCandidate,

    /// The step search was started from a zero-dimensional point.
    #[error("starting point must have at least one coordinate")]
    EmptyStart,

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
