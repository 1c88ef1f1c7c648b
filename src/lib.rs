//! # u-pmedian
//!
//! Heuristic solver for the p-median facility location problem: pick `p`
//! of `n` nodes as medians so that the sum of every node's distance to its
//! nearest median is as small as possible.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Instance, MedianSet, Solution)
//! - [`distance`] — Dense distance matrix
//! - [`evaluation`] — Total cost and nearest/second-nearest assignment
//! - [`constructive`] — Greedy-randomized construction with a restricted candidate list
//! - [`local_search`] — First-improvement interchange
//! - [`solver`] — Construction followed by local search, with timings
//! - [`io`] — Instance text format and random instance generation
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use u_pmedian::distance::DistanceMatrix;
//! use u_pmedian::models::Instance;
//! use u_pmedian::solver::{solve, SolverConfig};
//!
//! let dm = DistanceMatrix::from_rows(vec![
//!     vec![0.0, 1.0, 4.0, 6.0],
//!     vec![1.0, 0.0, 3.0, 5.0],
//!     vec![4.0, 3.0, 0.0, 2.0],
//!     vec![6.0, 5.0, 2.0, 0.0],
//! ])
//! .expect("square");
//! let instance = Instance::new(dm, 2).expect("valid p");
//!
//! let report = solve(&instance, &SolverConfig::default().with_rcl_size(1)).expect("solve");
//! assert_eq!(report.refined.sorted_medians(), vec![1, 2]);
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod io;
pub mod local_search;
pub mod models;
pub mod solver;

pub use error::{PMedianError, Result};
