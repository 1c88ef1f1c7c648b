//! Domain model types for the p-median problem.
//!
//! Nodes are plain indices in `0..n`. An [`Instance`] pairs a distance
//! matrix with the number of medians to open, a [`MedianSet`] is the mutable
//! working selection, and a [`Solution`] is the finished result.

mod instance;
mod median_set;
mod solution;

pub use instance::Instance;
pub use median_set::MedianSet;
pub use solution::{CandidateScore, Solution};
