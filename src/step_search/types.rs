//! Core trait for the coordinate step search.

/// Defines a step-search problem over real-valued coordinates.
///
/// # Maximization
///
/// The search maximizes the objective. For minimization, negate it.
///
/// Any `Fn(&[f64]) -> f64` closure is a problem:
///
/// ```
/// use u_pareto::step_search::StepSearchProblem;
///
/// let paraboloid = |x: &[f64]| -(x[0] * x[0] + x[1] * x[1]);
/// assert_eq!(paraboloid.objective(&[0.0, 0.0]), 0.0);
/// ```
pub trait StepSearchProblem {
    /// Evaluates the objective at `x`. Higher is better.
    fn objective(&self, x: &[f64]) -> f64;
}

impl<F> StepSearchProblem for F
where
    F: Fn(&[f64]) -> f64,
{
    fn objective(&self, x: &[f64]) -> f64 {
        self(x)
    }
}
