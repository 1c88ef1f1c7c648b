//! Constructive heuristics for building initial p-median solutions.
//!
//! - [`rgreedy`] — Greedy-randomized selection with a restricted candidate list, O(p·n²)

mod rgreedy;

pub use rgreedy::{rgreedy, Construction};
