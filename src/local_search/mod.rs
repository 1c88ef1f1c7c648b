//! Local search for improving p-median solutions.
//!
//! - [`interchange_improve`] — First-improvement single swap with O(n) delta evaluation

mod interchange;

pub use interchange::{
    first_improving_swap, interchange_improve, swap_delta, LocalSearchOutcome, SwapMove,
    DRIFT_TOLERANCE, IMPROVEMENT_EPSILON,
};
