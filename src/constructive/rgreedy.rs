//! Greedy-randomized construction with a restricted candidate list.
//!
//! # Algorithm
//!
//! Keep `min_dist[i]`, the distance from node `i` to its nearest selected
//! median (initially `+inf`). Each round scores every unselected node `c`
//! by the total cost the partial solution would have with `c` added:
//!
//! ```text
//! cost(c) = Σ_i min(min_dist[i], d(i, c))
//! ```
//!
//! Candidates are sorted ascending by that cost (stable, so ties keep
//! ascending node order), the first `k` form the RCL, and one RCL entry is
//! drawn uniformly at random. The chosen node is added and `min_dist` is
//! tightened against it. After `p` rounds the last chosen score is exactly
//! the cost of the full solution.
//!
//! # Complexity
//!
//! O(p·n²) time, O(n) extra space.
//!
//! # Reference
//!
//! Feo, T.A. & Resende, M.G.C. (1995). "Greedy Randomized Adaptive Search
//! Procedures", *Journal of Global Optimization* 6, 109-133.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::{check_median_count, PMedianError, Result};
use crate::models::{CandidateScore, MedianSet, Solution};

/// Result of a greedy-randomized construction.
#[derive(Debug, Clone)]
pub struct Construction {
    /// The constructed solution, medians in selection order.
    pub solution: Solution,
    /// The score of the candidate chosen in each round, in round order.
    pub rounds: Vec<CandidateScore>,
}

/// Builds a solution of exactly `p` medians by greedy-randomized selection.
///
/// # Arguments
///
/// * `distances` — Distance matrix over all `n` nodes
/// * `p` — Number of medians, `1..=n`
/// * `rcl_size` — Restricted candidate list size `k >= 1`; `k = 1` is pure
///   greedy, `k >= n` draws uniformly among all remaining nodes
/// * `rng` — The only source of randomness in the solver
///
/// # Errors
///
/// [`PMedianError::InvalidMedianCount`] or [`PMedianError::InvalidRclSize`]
/// before any work is done.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_pmedian::constructive::rgreedy;
/// use u_pmedian::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 4.0, 6.0],
///     vec![1.0, 0.0, 3.0, 5.0],
///     vec![4.0, 3.0, 0.0, 2.0],
///     vec![6.0, 5.0, 2.0, 0.0],
/// ])
/// .expect("square");
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let built = rgreedy(&dm, 2, 1, &mut rng).expect("valid parameters");
/// assert_eq!(built.solution.medians(), &[1, 2]);
/// assert!((built.solution.cost() - 3.0).abs() < 1e-10);
/// ```
pub fn rgreedy<R: Rng + ?Sized>(
    distances: &DistanceMatrix,
    p: usize,
    rcl_size: usize,
    rng: &mut R,
) -> Result<Construction> {
    let n = distances.size();
    check_median_count(p, n)?;
    if rcl_size == 0 {
        return Err(PMedianError::InvalidRclSize);
    }

    let mut selected = MedianSet::new(n);
    let mut min_dist = vec![f64::INFINITY; n];
    let mut rounds = Vec::with_capacity(p);
    let mut cost = f64::INFINITY;

    for round in 0..p {
        let mut scores: Vec<CandidateScore> = selected
            .complement()
            .map(|node| CandidateScore {
                cost: hypothetical_cost(&min_dist, distances, node),
                node,
            })
            .collect();

        // stable: equal costs stay in ascending node order
        scores.sort_by(|a, b| a.cost.total_cmp(&b.cost));

        let rcl_len = rcl_size.min(scores.len());
        let chosen = scores[rng.random_range(0..rcl_len)];

        selected.insert(chosen.node);
        for (i, d) in min_dist.iter_mut().enumerate() {
            *d = d.min(distances.get(i, chosen.node));
        }
        cost = chosen.cost;
        rounds.push(chosen);

        tracing::debug!(
            round = round + 1,
            node = chosen.node,
            rcl = rcl_len,
            cost,
            "median selected"
        );
    }

    tracing::info!(p, rcl_size, cost, "construction finished");

    Ok(Construction {
        solution: Solution::new(selected.into_vec(), cost),
        rounds,
    })
}

/// Total cost if `candidate` joined the medians behind `min_dist`.
fn hypothetical_cost(min_dist: &[f64], distances: &DistanceMatrix, candidate: usize) -> f64 {
    min_dist
        .iter()
        .enumerate()
        .map(|(i, &d)| d.min(distances.get(i, candidate)))
        .sum()
}
