//! Coordinate step search.
//!
//! A derivative-free local maximizer. Each coordinate is moved in turn by a
//! fixed step while the objective improves; the step shrinks geometrically
//! once no coordinate move helps, and the search ends when the step drops
//! below the tolerance.
//!
//! # References
//!
//! - Hooke & Jeeves (1961), "Direct Search Solution of Numerical and
//!   Statistical Problems"
//! - Wright (2015), "Coordinate Descent Algorithms"

mod config;
mod runner;
mod types;

pub use config::StepSearchConfig;
pub use runner::{StepSearchResult, StepSearchRunner};
pub use types::StepSearchProblem;
