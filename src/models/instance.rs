//! p-median problem instance.

use crate::distance::DistanceMatrix;
use crate::error::{check_median_count, Result};

/// A p-median instance: `n` nodes, their distance matrix and the number of
/// medians to select.
///
/// Construction checks `0 < p <= n`. Symmetry and a zero diagonal are left
/// to the caller.
///
/// # Examples
///
/// ```
/// use u_pmedian::distance::DistanceMatrix;
/// use u_pmedian::models::Instance;
///
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 1.0, 1.0, 0.0]).expect("square");
/// let instance = Instance::new(dm.clone(), 1).expect("valid p");
/// assert_eq!(instance.num_nodes(), 2);
/// assert!(Instance::new(dm, 3).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    distances: DistanceMatrix,
    p: usize,
}

impl Instance {
    /// Creates an instance, failing if `p` is not in `1..=n`.
    pub fn new(distances: DistanceMatrix, p: usize) -> Result<Self> {
        check_median_count(p, distances.size())?;
        Ok(Self { distances, p })
    }

    /// The distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Number of nodes `n`.
    pub fn num_nodes(&self) -> usize {
        self.distances.size()
    }

    /// Number of medians `p` to select.
    pub fn num_medians(&self) -> usize {
        self.p
    }
}
