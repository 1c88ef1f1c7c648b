//! Solution and candidate score records.

use serde::{Deserialize, Serialize};

/// A set of selected medians together with its total assignment cost.
///
/// # Examples
///
/// ```
/// use u_pmedian::models::Solution;
///
/// let sol = Solution::new(vec![4, 1], 12.5);
/// assert_eq!(sol.num_medians(), 2);
/// assert_eq!(sol.sorted_medians(), vec![1, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    medians: Vec<usize>,
    cost: f64,
}

impl Solution {
    /// Creates a solution from medians (in selection order) and their cost.
    pub fn new(medians: Vec<usize>, cost: f64) -> Self {
        Self { medians, cost }
    }

    /// Medians in the order the solver holds them.
    pub fn medians(&self) -> &[usize] {
        &self.medians
    }

    /// Medians in ascending index order.
    pub fn sorted_medians(&self) -> Vec<usize> {
        let mut sorted = self.medians.clone();
        sorted.sort_unstable();
        sorted
    }

    /// Total assignment cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of medians.
    pub fn num_medians(&self) -> usize {
        self.medians.len()
    }
}

/// Hypothetical total cost of adding `node` to a partial solution.
///
/// Produced and ranked within a single construction round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateScore {
    /// Total cost if `node` were added.
    pub cost: f64,
    /// Candidate node index.
    pub node: usize,
}
