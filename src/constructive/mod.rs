//! Constructive heuristics for initial transportation allocations.
//!
//! - [`northwest_corner`] — Northwest-Corner rule, O(m + n), cost-blind
//! - [`minimum_cost`] — Global least-cost cell, O(m·n) per step
//! - [`minimum_row_cost`] — Row-by-row least-cost cell, O(n) per step
//! - [`vogel`] — Vogel's approximation (Reinfeld & Vogel, 1958), O(m·n) per step
//!
//! Every heuristic takes a validated [`TransportationProblem`], works on its
//! own copy of supply and demand, and returns a fresh [`Allocation`]. None of
//! them attempts an optimality test or improvement phase.

mod minimum_cost;
mod minimum_row_cost;
mod northwest_corner;
mod residuals;
mod vogel;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::evaluation::weighted_cost;
use crate::models::{Allocation, Method, TransportationProblem};

pub use minimum_cost::minimum_cost;
pub use minimum_row_cost::minimum_row_cost;
pub use northwest_corner::northwest_corner;
pub use vogel::vogel;

/// Runs one heuristic on `problem`.
///
/// # Examples
///
/// ```
/// use u_transport::cost::CostMatrix;
/// use u_transport::models::{Method, TransportationProblem};
/// use u_transport::constructive::solve;
///
/// let costs = CostMatrix::from_rows(vec![vec![8.0, 6.0], vec![4.0, 2.0]]).unwrap();
/// let problem = TransportationProblem::new(vec![20.0, 30.0], vec![10.0, 40.0], costs).unwrap();
///
/// let a = solve(&problem, Method::MinimumCost);
/// assert_eq!(a.row_sums(), vec![20.0, 30.0]);
/// ```
pub fn solve(problem: &TransportationProblem, method: Method) -> Allocation {
    let allocation = match method {
        Method::NorthwestCorner => northwest_corner(problem),
        Method::MinimumCost => minimum_cost(problem),
        Method::MinimumRowCost => minimum_row_cost(problem),
        Method::Vogel => vogel(problem),
    };
    debug!(
        "{method}: {} basic cells, total cost {}",
        allocation.basic_cells().len(),
        weighted_cost(&allocation, problem.costs())
    );
    allocation
}

/// Outcome of one heuristic on a problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodResult {
    /// Heuristic that produced the allocation.
    pub method: Method,
    /// Units shipped per cell.
    pub allocation: Allocation,
    /// Total shipping cost of the allocation.
    pub total_cost: f64,
}

/// Runs every heuristic in [`Method::ALL`] order on the same problem.
///
/// Each run starts from the untouched problem, so results are independent.
pub fn solve_all(problem: &TransportationProblem) -> Vec<MethodResult> {
    Method::ALL
        .iter()
        .map(|&method| {
            let allocation = solve(problem, method);
            let total_cost = weighted_cost(&allocation, problem.costs());
            MethodResult {
                method,
                allocation,
                total_cost,
            }
        })
        .collect()
}

/// Returns the cheapest result; the earliest one wins on ties.
///
/// Returns `None` if `results` is empty.
pub fn best(results: &[MethodResult]) -> Option<&MethodResult> {
    let mut best: Option<&MethodResult> = None;
    for r in results {
        if best.map_or(true, |b| r.total_cost < b.total_cost) {
            best = Some(r);
        }
    }
    best
}
