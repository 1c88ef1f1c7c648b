//! Random instance generator.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::{check_median_count, PMedianError, Result};
use crate::models::Instance;

/// Generates a random symmetric instance.
///
/// Off-diagonal distances are integers drawn uniformly from `1..=max_dist`
/// for `i < j` and mirrored to `j, i`; the diagonal is zero.
///
/// # Errors
///
/// [`PMedianError::InvalidMedianCount`] unless `0 < p <= n`, and
/// [`PMedianError::InvalidParameter`] if `max_dist` is zero.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_pmedian::io::generate_instance;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let instance = generate_instance(10, 3, 100, &mut rng).expect("valid");
/// assert!(instance.distances().is_symmetric(0.0));
/// assert!(instance.distances().has_zero_diagonal(0.0));
/// ```
pub fn generate_instance<R: Rng + ?Sized>(
    n: usize,
    p: usize,
    max_dist: u32,
    rng: &mut R,
) -> Result<Instance> {
    check_median_count(p, n)?;
    if max_dist == 0 {
        return Err(PMedianError::InvalidParameter {
            name: "max_dist",
            message: "must be at least 1".to_string(),
        });
    }

    let mut dm = DistanceMatrix::new(n);
    for i in 0..n {
        for j in (i + 1)..n {
            let d = f64::from(rng.random_range(1..=max_dist));
            dm.set(i, j, d);
            dm.set(j, i, d);
        }
    }

    tracing::debug!(n, p, max_dist, "instance generated");
    Instance::new(dm, p)
}
