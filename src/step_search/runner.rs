//! Step-search execution loop.

use super::config::StepSearchConfig;
use super::types::StepSearchProblem;
use crate::error::{Error, Result};
use tracing::debug;

/// Result of a step-search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepSearchResult {
    /// The best point found.
    pub best: Vec<f64>,

    /// Objective value at `best`.
    pub best_value: f64,

    /// Total objective evaluations, including the starting point.
    pub evaluations: usize,

    /// Number of full coordinate sweeps.
    pub sweeps: usize,

    /// Step length when the search stopped.
    pub final_step: f64,

    /// Whether the evaluation budget ran out before the step fell below
    /// the tolerance.
    pub budget_exhausted: bool,
}

/// Executes the coordinate step search.
///
/// Each sweep visits the coordinates in order. A coordinate is pushed by
/// `+step` for as long as the objective strictly improves; if the first
/// `+step` move fails, `-step` is tried the same way. A sweep with no
/// improvement divides the step by the shrink factor.
pub struct StepSearchRunner;

impl StepSearchRunner {
    /// Runs the search from `start`.
    ///
    /// # Example
    ///
    /// ```
    /// use u_pareto::step_search::{StepSearchConfig, StepSearchRunner};
    ///
    /// let peak = |x: &[f64]| -((x[0] - 1.0).powi(2) + (x[1] + 2.0).powi(2));
    /// let result = StepSearchRunner::run(&peak, &[0.0, 0.0], &StepSearchConfig::default()).unwrap();
    ///
    /// assert!((result.best[0] - 1.0).abs() < 1e-6);
    /// assert!((result.best[1] + 2.0).abs() < 1e-6);
    /// ```
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidConfig`] if `config` fails validation
    /// - [`Error::EmptyStart`] if `start` is empty
    pub fn run<P: StepSearchProblem + ?Sized>(
        problem: &P,
        start: &[f64],
        config: &StepSearchConfig,
    ) -> Result<StepSearchResult> {
        config.validate()?;
        if start.is_empty() {
            return Err(Error::EmptyStart);
        }

        let mut current = start.to_vec();
        let mut current_value = problem.objective(&current);
        let mut evaluations = 1usize;
        let mut sweeps = 0usize;
        let mut step = config.initial_step;
        let mut budget_exhausted = false;

        let budget_left =
            |evaluations: usize| config.max_evaluations == 0 || evaluations < config.max_evaluations;

        'search: while step >= config.tolerance {
            let mut improved = false;

            for k in 0..current.len() {
                for direction in [1.0, -1.0] {
                    let mut moved = false;
                    loop {
                        if !budget_left(evaluations) {
                            budget_exhausted = true;
                            break 'search;
                        }
                        let mut trial = current.clone();
                        trial[k] += direction * step;
                        let trial_value = problem.objective(&trial);
                        evaluations += 1;

                        if trial_value > current_value {
                            current = trial;
                            current_value = trial_value;
                            moved = true;
                        } else {
                            break;
                        }
                    }
                    if moved {
                        improved = true;
                        break;
                    }
                }
            }

            sweeps += 1;
            if !improved {
                step /= config.shrink_factor;
                debug!(step, value = current_value, sweeps, "step shrunk");
            }
        }

        debug!(
            evaluations,
            sweeps,
            best_value = current_value,
            budget_exhausted,
            "step search finished"
        );

        Ok(StepSearchResult {
            best: current,
            best_value: current_value,
            evaluations,
            sweeps,
            final_step: step,
            budget_exhausted,
        })
    }
}
