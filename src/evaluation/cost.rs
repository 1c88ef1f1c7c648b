//! Total assignment cost of a median set.

use crate::distance::DistanceMatrix;

/// Sum over all nodes of the distance to the nearest median in `medians`.
///
/// Returns `f64::INFINITY` for an empty median set, so any real cost
/// compares as an improvement over it. O(n·|medians|).
///
/// # Examples
///
/// ```
/// use u_pmedian::distance::DistanceMatrix;
/// use u_pmedian::evaluation::total_cost;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 4.0],
///     vec![1.0, 0.0, 3.0],
///     vec![4.0, 3.0, 0.0],
/// ])
/// .expect("square");
/// assert!((total_cost(&[1], &dm) - 4.0).abs() < 1e-10);
/// assert_eq!(total_cost(&[], &dm), f64::INFINITY);
/// ```
pub fn total_cost(medians: &[usize], distances: &DistanceMatrix) -> f64 {
    if medians.is_empty() {
        return f64::INFINITY;
    }
    distances
        .rows()
        .map(|row| {
            medians
                .iter()
                .map(|&m| row[m])
                .fold(f64::INFINITY, f64::min)
        })
        .sum()
}
