//! Construction followed by local search.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::constructive::rgreedy;
use crate::error::{PMedianError, Result};
use crate::local_search::interchange_improve;
use crate::models::{Instance, Solution};

/// Solver parameters.
///
/// # Examples
///
/// ```
/// use u_pmedian::solver::SolverConfig;
///
/// let config = SolverConfig::default().with_rcl_size(5).with_seed(42);
/// assert_eq!(config.rcl_size, 5);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Restricted candidate list size for construction.
    pub rcl_size: usize,
    /// Random seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            rcl_size: 3,
            seed: None,
        }
    }
}

impl SolverConfig {
    /// Sets the restricted candidate list size.
    pub fn with_rcl_size(mut self, rcl_size: usize) -> Self {
        self.rcl_size = rcl_size;
        self
    }

    /// Fixes the random seed so runs are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Wall-clock time spent in each phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseTimings {
    /// Greedy-randomized construction.
    pub construction: Duration,
    /// Interchange local search.
    pub local_search: Duration,
    /// Both phases.
    pub total: Duration,
}

/// Everything a solve produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    /// Solution after construction.
    pub constructive: Solution,
    /// Solution after local search.
    pub refined: Solution,
    /// Accepted swaps during local search.
    pub swaps: usize,
    /// Cost drift corrections during local search.
    pub drift_corrections: usize,
    /// Phase timings.
    pub timings: PhaseTimings,
}

impl SolveReport {
    /// Cost reduction achieved by local search.
    pub fn improvement(&self) -> f64 {
        self.constructive.cost() - self.refined.cost()
    }
}

/// Solves an instance with a generator built from `config`.
///
/// # Examples
///
/// ```
/// use u_pmedian::io::parse_instance;
/// use u_pmedian::solver::{solve, SolverConfig};
///
/// let instance = parse_instance("4\n2\n0 1 4 6\n1 0 3 5\n4 3 0 2\n6 5 2 0\n").unwrap();
/// let report = solve(&instance, &SolverConfig::default().with_seed(1)).unwrap();
/// assert!((report.refined.cost() - 3.0).abs() < 1e-10);
/// assert!(report.improvement() >= 0.0);
/// ```
pub fn solve(instance: &Instance, config: &SolverConfig) -> Result<SolveReport> {
    if config.rcl_size == 0 {
        return Err(PMedianError::InvalidRclSize);
    }
    let mut rng = config.rng();
    solve_with_rng(instance, config.rcl_size, &mut rng)
}

/// Solves an instance drawing from the given random generator.
pub fn solve_with_rng<R: Rng + ?Sized>(
    instance: &Instance,
    rcl_size: usize,
    rng: &mut R,
) -> Result<SolveReport> {
    tracing::info!(
        n = instance.num_nodes(),
        p = instance.num_medians(),
        rcl_size,
        "solving"
    );

    let started = Instant::now();
    let built = rgreedy(instance.distances(), instance.num_medians(), rcl_size, rng)?;
    let construction = started.elapsed();

    let ls_started = Instant::now();
    let outcome = interchange_improve(built.solution.medians(), instance.distances())?;
    let local_search = ls_started.elapsed();

    Ok(SolveReport {
        constructive: built.solution,
        refined: outcome.solution,
        swaps: outcome.swaps,
        drift_corrections: outcome.drift_corrections,
        timings: PhaseTimings {
            construction,
            local_search,
            total: started.elapsed(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::total_cost;
    use crate::io::generate_instance;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.rcl_size, 3);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: SolverConfig = serde_json::from_str(r#"{"seed": 7}"#).expect("json");
        assert_eq!(config, SolverConfig::default().with_seed(7));
    }

    #[test]
    fn test_solve_seeded_is_reproducible() {
        let mut rng = StdRng::seed_from_u64(11);
        let inst = generate_instance(25, 5, 100, &mut rng).expect("valid");
        let config = SolverConfig::default().with_seed(3);
        let a = solve(&inst, &config).expect("solve");
        let b = solve(&inst, &config).expect("solve");
        assert_eq!(a.constructive, b.constructive);
        assert_eq!(a.refined, b.refined);
        assert_eq!(a.swaps, b.swaps);
    }

    #[test]
    fn test_solve_report_consistency() {
        let mut rng = StdRng::seed_from_u64(12);
        let inst = generate_instance(30, 4, 50, &mut rng).expect("valid");
        let report = solve(&inst, &SolverConfig::default().with_seed(5)).expect("solve");
        assert_eq!(report.refined.num_medians(), 4);
        assert!(report.improvement() >= 0.0);
        assert!(
            (report.refined.cost() - total_cost(report.refined.medians(), inst.distances())).abs()
                < 1e-6
        );
        assert!(report.timings.total >= report.timings.construction);
    }

    #[test]
    fn test_solve_rejects_zero_rcl() {
        let mut rng = StdRng::seed_from_u64(0);
        let inst = generate_instance(5, 2, 10, &mut rng).expect("valid");
        let err = solve(&inst, &SolverConfig::default().with_rcl_size(0)).unwrap_err();
        assert!(matches!(err, PMedianError::InvalidRclSize));
    }
}
