//! Distance matrices.
//!
//! Provides the dense n×n table every solver component reads from.

mod matrix;

pub use matrix::DistanceMatrix;
