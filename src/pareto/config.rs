//! Filter configuration.

use super::types::{ArityPolicy, Sense};

/// Configuration for [`ParetoFilter`](super::ParetoFilter).
///
/// # Examples
///
/// ```
/// use u_pareto::pareto::{ArityPolicy, ParetoConfig, Sense};
///
/// let config = ParetoConfig::default()
///     .with_sense(Sense::Minimize)
///     .with_arity_policy(ArityPolicy::Permissive);
/// assert_eq!(config.sense, Sense::Minimize);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParetoConfig {
    /// Whether criteria are maximized (default) or minimized.
    pub sense: Sense,

    /// How candidates of differing arity are handled.
    pub arity_policy: ArityPolicy,
}

impl ParetoConfig {
    /// Reference behaviour: maximize, mismatched arities are incomparable.
    pub fn permissive() -> Self {
        Self {
            sense: Sense::Maximize,
            arity_policy: ArityPolicy::Permissive,
        }
    }

    pub fn with_sense(mut self, sense: Sense) -> Self {
        self.sense = sense;
        self
    }

    pub fn with_arity_policy(mut self, policy: ArityPolicy) -> Self {
        self.arity_policy = policy;
        self
    }
}
