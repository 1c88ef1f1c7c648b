//! Nearest and second-nearest median per node.

use crate::distance::DistanceMatrix;

/// For a fixed median set: each node's nearest and second-nearest median
/// and the resulting total cost.
///
/// Rebuilt from scratch by [`Assignment::rebuild`]; incremental cost
/// tracking elsewhere is checked against it.
///
/// # Examples
///
/// ```
/// use u_pmedian::distance::DistanceMatrix;
/// use u_pmedian::evaluation::Assignment;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 4.0],
///     vec![1.0, 0.0, 3.0],
///     vec![4.0, 3.0, 0.0],
/// ])
/// .expect("square");
/// let a = Assignment::rebuild(&[0, 2], &dm);
/// assert_eq!(a.closest(1), Some(0));
/// assert_eq!(a.second_closest(1), Some(2));
/// assert!((a.cost() - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Assignment {
    closest: Vec<Option<usize>>,
    second_closest: Vec<Option<usize>>,
    cost: f64,
}

impl Assignment {
    /// Scans every median once per node keeping the running best two.
    ///
    /// A strictly smaller distance than the current best demotes the best to
    /// second; otherwise a strictly smaller distance than the second replaces
    /// it. Ties keep the earlier median. O(n·p).
    pub fn rebuild(medians: &[usize], distances: &DistanceMatrix) -> Self {
        let n = distances.size();
        let mut closest = Vec::with_capacity(n);
        let mut second_closest = Vec::with_capacity(n);
        let mut cost = 0.0;

        for row in distances.rows() {
            let mut d1 = f64::INFINITY;
            let mut d2 = f64::INFINITY;
            let mut m1 = None;
            let mut m2 = None;

            for &m in medians {
                let d = row[m];
                if d < d1 {
                    d2 = d1;
                    m2 = m1;
                    d1 = d;
                    m1 = Some(m);
                } else if d < d2 {
                    d2 = d;
                    m2 = Some(m);
                }
            }

            closest.push(m1);
            second_closest.push(m2);
            cost += d1;
        }

        Self {
            closest,
            second_closest,
            cost,
        }
    }

    /// Nearest median of node `i`, `None` only for an empty median set.
    #[inline]
    pub fn closest(&self, i: usize) -> Option<usize> {
        self.closest[i]
    }

    /// Second-nearest median of node `i`, `None` with fewer than two medians.
    #[inline]
    pub fn second_closest(&self, i: usize) -> Option<usize> {
        self.second_closest[i]
    }

    /// Sum of every node's distance to its nearest median.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of nodes covered.
    pub fn len(&self) -> usize {
        self.closest.len()
    }

    /// Returns `true` for a zero-node instance.
    pub fn is_empty(&self) -> bool {
        self.closest.is_empty()
    }
}
