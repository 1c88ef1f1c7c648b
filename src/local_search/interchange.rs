//! First-improvement interchange (swap) local search.
//!
//! # Algorithm
//!
//! A move swaps one median `out` for one non-median `in`. Its cost change
//! is evaluated in O(n) from the nearest/second-nearest assignment:
//!
//! ```text
//! new_i = min(d(i, second(i)), d(i, in))   if closest(i) == out
//!         min(d(i, closest(i)), d(i, in))  otherwise
//! delta = Σ_i (new_i - d(i, closest(i)))
//! ```
//!
//! Medians are scanned in solution order, non-medians in ascending index
//! order. The first move with `delta < -1e-9` is applied in place, the
//! assignment is rebuilt, and the scan restarts. The search stops when a
//! full scan finds no improving move.
//!
//! After each move the incrementally updated cost is compared with the
//! rebuilt cost and replaced by it when they differ by more than `1e-5`.
//!
//! # Complexity
//!
//! O(p·(n-p)·n) per scan, O(n·p) per rebuild.
//!
//! # Reference
//!
//! Teitz, M.B. & Bart, P. (1968). "Heuristic Methods for Estimating the
//! Generalized Vertex Median of a Weighted Graph", *Operations Research*
//! 16(5), 955-961.

use crate::distance::DistanceMatrix;
use crate::error::{PMedianError, Result};
use crate::evaluation::Assignment;
use crate::models::{MedianSet, Solution};

/// A move is accepted only if it lowers the cost by more than this.
pub const IMPROVEMENT_EPSILON: f64 = 1e-9;

/// Largest tolerated gap between the incremental and rebuilt cost.
pub const DRIFT_TOLERANCE: f64 = 1e-5;

/// A single median interchange.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapMove {
    /// Position of `out` in the median ordering.
    pub position: usize,
    /// Median leaving the solution.
    pub out: usize,
    /// Node entering the solution.
    pub inn: usize,
    /// Cost change of the move.
    pub delta: f64,
}

/// Result of an interchange local search.
#[derive(Debug, Clone)]
pub struct LocalSearchOutcome {
    /// Locally optimal solution.
    pub solution: Solution,
    /// Number of accepted swaps.
    pub swaps: usize,
    /// Number of times the incremental cost was replaced by the rebuilt one.
    pub drift_corrections: usize,
}

/// Improves a median set with first-improvement swaps until no single swap
/// lowers the cost.
///
/// The number of medians never changes. The returned cost is never above
/// the cost of `initial`.
///
/// # Errors
///
/// [`PMedianError::InvalidSolution`] if `initial` is empty, holds an index
/// outside `0..n`, or repeats an index.
///
/// # Examples
///
/// ```
/// use u_pmedian::distance::DistanceMatrix;
/// use u_pmedian::local_search::interchange_improve;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 4.0, 6.0],
///     vec![1.0, 0.0, 3.0, 5.0],
///     vec![4.0, 3.0, 0.0, 2.0],
///     vec![6.0, 5.0, 2.0, 0.0],
/// ])
/// .expect("square");
///
/// let outcome = interchange_improve(&[0, 1], &dm).expect("valid start");
/// assert!((outcome.solution.cost() - 3.0).abs() < 1e-10);
/// assert_eq!(outcome.swaps, 1);
/// ```
pub fn interchange_improve(
    initial: &[usize],
    distances: &DistanceMatrix,
) -> Result<LocalSearchOutcome> {
    if initial.is_empty() {
        return Err(PMedianError::invalid_solution("no medians to improve"));
    }
    let medians = MedianSet::from_indices(distances.size(), initial)?;
    let assignment = Assignment::rebuild(medians.as_slice(), distances);
    let cost = assignment.cost();
    Ok(search(medians, assignment, cost, distances))
}

/// Runs the swap loop from `cost`, which is reconciled against a rebuild
/// after every accepted move.
fn search(
    mut medians: MedianSet,
    mut assignment: Assignment,
    mut cost: f64,
    distances: &DistanceMatrix,
) -> LocalSearchOutcome {
    let mut swaps = 0;
    let mut drift_corrections = 0;

    tracing::debug!(cost, p = medians.len(), "interchange search started");

    while let Some(mv) = first_improving_swap(&medians, &assignment, distances) {
        medians.replace_at(mv.position, mv.inn);
        cost += mv.delta;
        swaps += 1;

        tracing::debug!(out = mv.out, inn = mv.inn, delta = mv.delta, cost, "swap accepted");

        assignment = Assignment::rebuild(medians.as_slice(), distances);
        if let Some(rebuilt) = reconcile_cost(cost, assignment.cost()) {
            tracing::warn!(incremental = cost, rebuilt, "cost drift corrected");
            cost = rebuilt;
            drift_corrections += 1;
        }
    }

    tracing::info!(cost, swaps, "local optimum reached");

    LocalSearchOutcome {
        solution: Solution::new(medians.into_vec(), cost),
        swaps,
        drift_corrections,
    }
}

/// Scans swaps in order and returns the first one that improves the cost.
///
/// `assignment` must have been rebuilt for the current `medians`.
pub fn first_improving_swap(
    medians: &MedianSet,
    assignment: &Assignment,
    distances: &DistanceMatrix,
) -> Option<SwapMove> {
    for (position, &out) in medians.as_slice().iter().enumerate() {
        for inn in medians.complement() {
            let delta = swap_delta(assignment, distances, out, inn);
            if delta < -IMPROVEMENT_EPSILON {
                return Some(SwapMove {
                    position,
                    out,
                    inn,
                    delta,
                });
            }
        }
    }
    None
}

/// Cost change of replacing median `out` with node `inn`. O(n).
pub fn swap_delta(
    assignment: &Assignment,
    distances: &DistanceMatrix,
    out: usize,
    inn: usize,
) -> f64 {
    let mut delta = 0.0;
    for (i, row) in distances.rows().enumerate() {
        let current = assignment.closest(i).map_or(f64::INFINITY, |m| row[m]);
        let kept = if assignment.closest(i) == Some(out) {
            assignment.second_closest(i).map_or(f64::INFINITY, |m| row[m])
        } else {
            current
        };
        delta += kept.min(row[inn]) - current;
    }
    delta
}

/// Returns the rebuilt cost when the incremental one has drifted past
/// [`DRIFT_TOLERANCE`].
fn reconcile_cost(incremental: f64, rebuilt: f64) -> Option<f64> {
    ((incremental - rebuilt).abs() > DRIFT_TOLERANCE).then_some(rebuilt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::total_cost;

    fn line4() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 4.0, 6.0],
            vec![1.0, 0.0, 3.0, 5.0],
            vec![4.0, 3.0, 0.0, 2.0],
            vec![6.0, 5.0, 2.0, 0.0],
        ])
        .expect("valid")
    }

    fn points(xs: &[f64]) -> DistanceMatrix {
        let n = xs.len();
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                dm.set(i, j, (xs[i] - xs[j]).abs());
            }
        }
        dm
    }

    #[test]
    fn test_worked_example_already_optimal() {
        let dm = line4();
        let outcome = interchange_improve(&[1, 2], &dm).expect("valid");
        assert_eq!(outcome.solution.medians(), &[1, 2]);
        assert!((outcome.solution.cost() - 3.0).abs() < 1e-10);
        assert_eq!(outcome.swaps, 0);
        assert_eq!(outcome.drift_corrections, 0);
    }

    #[test]
    fn test_swap_replaces_in_place() {
        let dm = line4();
        let outcome = interchange_improve(&[0, 1], &dm).expect("valid");
        // 0 -> 2 is the first improving swap, after which nothing improves
        assert_eq!(outcome.solution.medians(), &[2, 1]);
        assert!((outcome.solution.cost() - 3.0).abs() < 1e-10);
        assert_eq!(outcome.swaps, 1);
    }

    #[test]
    fn test_first_improvement_not_best() {
        let dm = points(&[0.0, 1.0, 2.0, 10.0, 11.0, 30.0]);
        let medians = MedianSet::from_indices(6, &[0, 1]).expect("valid");
        let assignment = Assignment::rebuild(medians.as_slice(), &dm);
        let mv = first_improving_swap(&medians, &assignment, &dm).expect("improvable");
        assert_eq!((mv.position, mv.out, mv.inn), (0, 0, 2));
        assert!((mv.delta + 3.0).abs() < 1e-10);
        // the best swap (0 -> 5) would save 28
        assert!((swap_delta(&assignment, &dm, 0, 5) + 28.0).abs() < 1e-10);
    }

    #[test]
    fn test_converges_from_poor_start() {
        let dm = points(&[0.0, 1.0, 2.0, 10.0, 11.0, 30.0]);
        let outcome = interchange_improve(&[0, 1], &dm).expect("valid");
        assert_eq!(outcome.solution.medians(), &[5, 2]);
        assert!((outcome.solution.cost() - 20.0).abs() < 1e-10);
        assert_eq!(outcome.swaps, 5);
    }

    #[test]
    fn test_single_median() {
        let dm = line4();
        let outcome = interchange_improve(&[3], &dm).expect("valid");
        assert_eq!(outcome.solution.medians(), &[1]);
        assert!((outcome.solution.cost() - 9.0).abs() < 1e-10);
        assert_eq!(outcome.swaps, 2);
    }

    #[test]
    fn test_all_nodes_selected() {
        let dm = line4();
        let outcome = interchange_improve(&[3, 0, 2, 1], &dm).expect("valid");
        assert_eq!(outcome.solution.medians(), &[3, 0, 2, 1]);
        assert_eq!(outcome.solution.cost(), 0.0);
        assert_eq!(outcome.swaps, 0);
    }

    #[test]
    fn test_delta_matches_recomputation() {
        let dm = points(&[0.0, 3.0, 4.0, 9.0, 15.0, 16.0, 22.0]);
        let start = [1, 4, 6];
        let medians = MedianSet::from_indices(7, &start).expect("valid");
        let assignment = Assignment::rebuild(&start, &dm);
        let before = total_cost(&start, &dm);
        for (pos, &out) in start.iter().enumerate() {
            for inn in medians.complement() {
                let mut swapped = start.to_vec();
                swapped[pos] = inn;
                let expected = total_cost(&swapped, &dm) - before;
                let delta = swap_delta(&assignment, &dm, out, inn);
                assert!((delta - expected).abs() < 1e-10, "out {out} in {inn}");
            }
        }
    }

    #[test]
    fn test_idempotent_at_convergence() {
        let dm = points(&[0.0, 5.0, 6.0, 13.0, 14.0, 20.0, 27.0, 28.0]);
        let first = interchange_improve(&[0, 1, 2], &dm).expect("valid");
        let second = interchange_improve(first.solution.medians(), &dm).expect("valid");
        assert_eq!(second.swaps, 0);
        assert_eq!(second.solution, first.solution);
    }

    #[test]
    fn test_reconcile_cost() {
        assert_eq!(reconcile_cost(10.0, 10.0), None);
        assert_eq!(reconcile_cost(10.0 + 1e-7, 10.0), None);
        assert_eq!(reconcile_cost(10.001, 10.0), Some(10.0));
        assert_eq!(reconcile_cost(9.0, 10.0), Some(10.0));
    }

    #[test]
    fn test_drifted_cost_is_replaced_after_swap() {
        let dm = line4();
        let medians = MedianSet::from_indices(4, &[0, 1]).expect("valid");
        let assignment = Assignment::rebuild(medians.as_slice(), &dm);
        // true cost is 8; start half a unit off
        let outcome = search(medians, assignment, 8.5, &dm);
        assert_eq!(outcome.swaps, 1);
        assert_eq!(outcome.drift_corrections, 1);
        assert!((outcome.solution.cost() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_small_drift_is_tolerated() {
        let dm = line4();
        let medians = MedianSet::from_indices(4, &[0, 1]).expect("valid");
        let assignment = Assignment::rebuild(medians.as_slice(), &dm);
        let outcome = search(medians, assignment, 8.0 + 1e-7, &dm);
        assert_eq!(outcome.drift_corrections, 0);
        assert!((outcome.solution.cost() - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_start() {
        let dm = line4();
        assert!(interchange_improve(&[], &dm).is_err());
        assert!(interchange_improve(&[0, 4], &dm).is_err());
        assert!(interchange_improve(&[2, 2], &dm).is_err());
    }
}
