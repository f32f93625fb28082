//! Step-search configuration.

use crate::error::{Error, Result};

/// Configuration for the coordinate step search.
///
/// # Examples
///
/// ```
/// use u_pareto::step_search::StepSearchConfig;
///
/// let config = StepSearchConfig::default()
///     .with_initial_step(0.5)
///     .with_shrink_factor(2.4)
///     .with_tolerance(1e-10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepSearchConfig {
    /// Divisor applied to the step after a sweep without improvement.
    ///
    /// Must be greater than 1.
    pub shrink_factor: f64,

    /// Step length of the first sweep.
    pub initial_step: f64,

    /// The search stops once the step falls below this value.
    pub tolerance: f64,

    /// Maximum objective evaluations (hard budget). 0 = no limit.
    pub max_evaluations: usize,
}

impl Default for StepSearchConfig {
    fn default() -> Self {
        Self {
            shrink_factor: 2.0,
            initial_step: 1.0,
            tolerance: 1e-9,
            max_evaluations: 100_000,
        }
    }
}

impl StepSearchConfig {
    pub fn with_shrink_factor(mut self, factor: f64) -> Self {
        self.shrink_factor = factor;
        self
    }

    pub fn with_initial_step(mut self, step: f64) -> Self {
        self.initial_step = step;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_evaluations(mut self, n: usize) -> Self {
        self.max_evaluations = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.shrink_factor.is_finite() || self.shrink_factor <= 1.0 {
            return Err(Error::InvalidConfig(format!(
                "shrink_factor must be finite and greater than 1, got {}",
                self.shrink_factor
            )));
        }
        if !self.initial_step.is_finite() || self.initial_step <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "initial_step must be finite and positive, got {}",
                self.initial_step
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "tolerance must be finite and positive, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}
