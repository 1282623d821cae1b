//! Unit shipping costs.
//!
//! Provides a dense source × destination cost matrix together with the
//! first-minimum scans that every cost-aware heuristic relies on.

mod matrix;

pub use matrix::CostMatrix;
