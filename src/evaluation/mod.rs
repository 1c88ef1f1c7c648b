//! Cost evaluation for median sets.
//!
//! - [`total_cost`] — stateless total assignment cost, O(n·p)
//! - [`Assignment`] — per-node nearest and second-nearest median, O(n·p) rebuild

mod assignment;
mod cost;

pub use assignment::Assignment;
pub use cost::total_cost;
