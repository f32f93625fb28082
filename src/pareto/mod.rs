//! Pareto-optimal filtering.
//!
//! Reduces a collection of multi-criteria candidates to the subset that no
//! other candidate dominates. A candidate dominates another when it is at
//! least as good on every criterion; equality on all criteria counts, so of
//! several identical optimal candidates only the first is kept.
//!
//! # Key Types
//!
//! - [`Criterion`]: numeric criterion value ([`rust_decimal::Decimal`],
//!   signed integers, `f64`)
//! - [`ParetoConfig`]: optimization sense and arity policy
//! - [`ParetoFilter`]: runs the filter, by value or in place
//! - [`ParetoResult`]: surviving candidates with retained/removed indices
//! - [`Dominance`]: outcome of a pairwise comparison
//!
//! # References
//!
//! - Pareto (1906), *Manuale di economia politica*
//! - Ehrgott (2005), *Multicriteria Optimization*, ch. 2

mod config;
mod filter;
mod types;

pub use config::ParetoConfig;
pub use filter::{dominance, min_pairwise_difference, pareto_front, ParetoFilter, ParetoResult};
pub use types::{ArityPolicy, Candidate, Criterion, Dominance, Sense};
