//! Criterion values, candidates and the dominance relation.

use rust_decimal::Decimal;
use std::fmt::Debug;

/// A numeric value of a single criterion.
///
/// The reference type is [`Decimal`]: fixed-precision decimal arithmetic
/// keeps values like `0.1 + 0.2` exact, so two candidates that tie on paper
/// also tie in the comparison. Signed integers are exact as well. `f64` is
/// supported for convenience but inherits binary rounding.
pub trait Criterion: Copy + PartialOrd + Debug {
    /// Computes `self - other`, or `None` if the result is not representable.
    fn checked_difference(self, other: Self) -> Option<Self>;
}

impl Criterion for Decimal {
    fn checked_difference(self, other: Self) -> Option<Self> {
        self.checked_sub(other)
    }
}

macro_rules! impl_criterion_for_int {
    ($($t:ty),*) => {
        $(
            impl Criterion for $t {
                fn checked_difference(self, other: Self) -> Option<Self> {
                    self.checked_sub(other)
                }
            }
        )*
    };
}

impl_criterion_for_int!(i32, i64, i128);

impl Criterion for f64 {
    fn checked_difference(self, other: Self) -> Option<Self> {
        let diff = self - other;
        if diff.is_finite() || !(self.is_finite() && other.is_finite()) {
            Some(diff)
        } else {
            None
        }
    }
}

/// One decision: its criterion values in a fixed order.
pub type Candidate<C> = Vec<C>;

/// Outcome of comparing two candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dominance {
    /// Left is at least as good as right on every criterion (ties included).
    Dominates,
    /// Right is at least as good as left on every criterion, and strictly
    /// better on at least one.
    Dominated,
    /// Each is better somewhere, or the two cannot be compared.
    Incomparable,
}

/// Optimization direction applied to every criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sense {
    /// Larger values are better.
    #[default]
    Maximize,
    /// Smaller values are better.
    Minimize,
}

impl Sense {
    /// Returns `true` if `a` is at least as good as `b` under this sense.
    ///
    /// Unordered values (NaN) are never at least as good.
    #[inline]
    pub(crate) fn at_least_as_good<C: Criterion>(self, a: C, b: C) -> bool {
        match self {
            Sense::Maximize => a >= b,
            Sense::Minimize => a <= b,
        }
    }
}

/// Handling of candidates whose criterion count differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArityPolicy {
    /// Reject the collection with [`Error::ArityMismatch`](crate::Error::ArityMismatch).
    #[default]
    Strict,
    /// Treat mismatched pairs as [`Dominance::Incomparable`].
    ///
    /// Dominated candidates may then survive if their only dominator has a
    /// different arity.
    Permissive,
}
