//! Allocation evaluation.
//!
//! Computes the total shipping cost of an allocation and checks it against
//! the supply and demand of a problem.

mod evaluator;

pub(crate) use evaluator::weighted_cost;
pub use evaluator::{total_cost, AllocationEvaluator};
