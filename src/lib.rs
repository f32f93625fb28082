//! Pareto-optimal decision filtering.
//!
//! Provides:
//!
//! - **Pareto filter**: reduces a collection of multi-criteria candidates
//!   to the subset no other candidate dominates, with exact decimal
//!   arithmetic via [`rust_decimal::Decimal`].
//! - **Step search**: a derivative-free coordinate maximizer for smooth or
//!   bounded single-objective functions.
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use u_pareto::pareto::{ParetoConfig, ParetoFilter};
//!
//! let d = |v: i64| Decimal::new(v, 0);
//! let candidates = vec![
//!     vec![d(3), d(3)],
//!     vec![d(1), d(1)],
//!     vec![d(2), d(4)],
//!     vec![d(4), d(2)],
//! ];
//!
//! let result = ParetoFilter::new(ParetoConfig::default()).filter(&candidates)?;
//! assert_eq!(result.retained, vec![0, 2, 3]);
//! # Ok::<(), u_pareto::Error>(())
//! ```
//!
//! # Architecture
//!
//! Each algorithm lives in its own module with a `Config`, a runner and
//! the core types. Errors are reported through the crate-wide [`Error`].
//! The crate emits `tracing` events and never installs a subscriber.

mod error;
pub mod pareto;
pub mod step_search;

pub use error::{Error, Result};
