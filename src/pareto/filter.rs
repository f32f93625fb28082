//! Dominance filter.

use super::config::ParetoConfig;
use super::types::{ArityPolicy, Candidate, Criterion, Dominance, Sense};
use crate::error::{Error, Result};
use tracing::{debug, trace};

/// Result of a filtering pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParetoResult<C> {
    /// The non-dominated candidates, in input order.
    pub front: Vec<Candidate<C>>,

    /// Input indices of the candidates in `front` (ascending).
    pub retained: Vec<usize>,

    /// Input indices of the removed candidates (ascending).
    pub removed: Vec<usize>,

    /// Number of pairwise dominance tests performed.
    pub comparisons: usize,
}

/// Reduces a collection of candidates to its Pareto-optimal subset.
///
/// A candidate is removed when another candidate is at least as good on
/// every criterion. Of several identical optimal candidates only the first
/// is kept.
///
/// # Complexity
///
/// O(m * n²) where m = number of criteria, n = number of candidates
///
/// # Example
///
/// ```
/// use u_pareto::pareto::{ParetoConfig, ParetoFilter};
///
/// let candidates = vec![
///     vec![3, 3],
///     vec![1, 1], // dominated by [3, 3]
///     vec![2, 4],
///     vec![4, 2],
/// ];
///
/// let result = ParetoFilter::new(ParetoConfig::default())
///     .filter(&candidates)
///     .unwrap();
///
/// assert_eq!(result.front, vec![vec![3, 3], vec![2, 4], vec![4, 2]]);
/// assert_eq!(result.removed, vec![1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParetoFilter {
    config: ParetoConfig,
}

impl ParetoFilter {
    pub fn new(config: ParetoConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParetoConfig {
        &self.config
    }

    /// Returns the Pareto-optimal subset as a new collection.
    ///
    /// The input is only read.
    ///
    /// # Errors
    ///
    /// [`Error::ArityMismatch`] under [`ArityPolicy::Strict`] if any
    /// candidate's length differs from the first candidate's.
    pub fn filter<C: Criterion>(&self, candidates: &[Candidate<C>]) -> Result<ParetoResult<C>> {
        self.validate(candidates)?;
        let (keep, comparisons) = self.survivor_mask(candidates);

        let mut front = Vec::new();
        let mut retained = Vec::new();
        let mut removed = Vec::new();
        for (index, (candidate, &kept)) in candidates.iter().zip(&keep).enumerate() {
            if kept {
                front.push(candidate.clone());
                retained.push(index);
            } else {
                removed.push(index);
            }
        }

        Ok(ParetoResult {
            front,
            retained,
            removed,
            comparisons,
        })
    }

    /// Removes every dominated candidate from `candidates`.
    ///
    /// Survivors keep their relative order. Returns the number of removed
    /// candidates. On error the collection is left untouched.
    pub fn filter_in_place<C: Criterion>(&self, candidates: &mut Vec<Candidate<C>>) -> Result<usize> {
        self.validate(candidates)?;
        let (keep, _) = self.survivor_mask(candidates);

        let before = candidates.len();
        let mut index = 0;
        candidates.retain(|_| {
            let kept = keep[index];
            index += 1;
            kept
        });
        Ok(before - candidates.len())
    }

    fn validate<C>(&self, candidates: &[Candidate<C>]) -> Result<()> {
        match self.config.arity_policy {
            ArityPolicy::Strict => check_uniform_arity(candidates),
            ArityPolicy::Permissive => Ok(()),
        }
    }

    /// Marks each candidate as kept (`true`) or dominated.
    ///
    /// For a pair `i < j`, a weak dominance of `i` over `j` removes `j`,
    /// which also settles exact ties in favour of the earlier candidate.
    /// `i` is removed only when `j` is strictly better. Weak dominance is
    /// transitive, so pairs of already-removed candidates are skipped.
    fn survivor_mask<C: Criterion>(&self, candidates: &[Candidate<C>]) -> (Vec<bool>, usize) {
        let n = candidates.len();
        let sense = self.config.sense;
        let mut keep = vec![true; n];
        let mut comparisons = 0usize;

        for i in 0..n {
            for j in (i + 1)..n {
                if !keep[i] && !keep[j] {
                    continue;
                }
                comparisons += 1;
                match dominance(&candidates[i], &candidates[j], sense) {
                    Dominance::Dominates => {
                        if keep[j] {
                            trace!(removed = j, by = i, "candidate dominated");
                        }
                        keep[j] = false;
                    }
                    Dominance::Dominated => {
                        if keep[i] {
                            trace!(removed = i, by = j, "candidate dominated");
                        }
                        keep[i] = false;
                    }
                    Dominance::Incomparable => {}
                }
            }
        }

        debug!(
            candidates = n,
            survivors = keep.iter().filter(|&&k| k).count(),
            comparisons,
            "pareto filter finished"
        );
        (keep, comparisons)
    }
}

/// Reduces `candidates` to their Pareto front, maximizing every criterion.
///
/// Candidates of different lengths never dominate each other. Use
/// [`ParetoFilter`] with [`ArityPolicy::Strict`] to reject such input instead.
///
/// ```
/// use u_pareto::pareto::pareto_front;
///
/// let front = pareto_front(&[vec![1, 2], vec![1, 2, 3], vec![0, 1]]);
/// assert_eq!(front, vec![vec![1, 2], vec![1, 2, 3]]);
/// ```
pub fn pareto_front<C: Criterion>(candidates: &[Candidate<C>]) -> Vec<Candidate<C>> {
    let filter = ParetoFilter::new(ParetoConfig::permissive());
    let (keep, _) = filter.survivor_mask(candidates);
    candidates
        .iter()
        .zip(keep)
        .filter_map(|(candidate, kept)| kept.then(|| candidate.clone()))
        .collect()
}

/// Compares two candidates for Pareto dominance.
///
/// `Dominates` means `a` is at least as good as `b` on every criterion; two
/// identical candidates dominate each other and report `Dominates`.
/// Candidates of different lengths are `Incomparable`.
///
/// The test is equivalent to `min_pairwise_difference(a, b) >= 0` but
/// compares values directly, so it cannot overflow.
pub fn dominance<C: Criterion>(a: &[C], b: &[C], sense: Sense) -> Dominance {
    if a.len() != b.len() {
        return Dominance::Incomparable;
    }

    let covers = |x: &[C], y: &[C]| {
        x.iter()
            .zip(y)
            .all(|(&vx, &vy)| sense.at_least_as_good(vx, vy))
    };

    if covers(a, b) {
        Dominance::Dominates
    } else if covers(b, a) {
        Dominance::Dominated
    } else {
        Dominance::Incomparable
    }
}

/// Smallest criterion-wise difference `a[k] - b[k]`.
///
/// Non-negative exactly when `a` is at least as large as `b` on every
/// criterion.
///
/// ```
/// use rust_decimal::Decimal;
/// use u_pareto::pareto::min_pairwise_difference;
///
/// let a = [Decimal::new(35, 1), Decimal::new(20, 1)]; // 3.5, 2.0
/// let b = [Decimal::new(10, 1), Decimal::new(25, 1)]; // 1.0, 2.5
/// assert_eq!(min_pairwise_difference(&a, &b).unwrap(), Decimal::new(-5, 1));
/// ```
///
/// # Errors
///
/// - [`Error::ArityMismatch`] if the lengths differ
/// - [`Error::EmptyCandidate`] if both are empty
/// - [`Error::DifferenceOverflow`] if a difference is not representable
pub fn min_pairwise_difference<C: Criterion>(a: &[C], b: &[C]) -> Result<C> {
    if a.len() != b.len() {
        return Err(Error::ArityMismatch {
            index: 1,
            expected: a.len(),
            found: b.len(),
        });
    }

    let mut min: Option<C> = None;
    for (position, (&va, &vb)) in a.iter().zip(b).enumerate() {
        let diff = va
            .checked_difference(vb)
            .ok_or(Error::DifferenceOverflow { position })?;
        min = Some(match min {
            Some(m) if diff < m => diff,
            Some(m) => m,
            None => diff,
        });
    }

    min.ok_or(Error::EmptyCandidate)
}

fn check_uniform_arity<C>(candidates: &[Candidate<C>]) -> Result<()> {
    let Some(first) = candidates.first() else {
        return Ok(());
    };
    let expected = first.len();

    match candidates
        .iter()
        .enumerate()
        .find(|(_, candidate)| candidate.len() != expected)
    {
        Some((index, candidate)) => Err(Error::ArityMismatch {
            index,
            expected,
            found: candidate.len(),
        }),
        None => Ok(()),
    }
}

// ============================================================================
// Tests
// ============================================================================
