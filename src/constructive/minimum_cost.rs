//! Minimum-Cost (least-cost cell) method.
//!
//! Repeatedly picks the cheapest cell whose source and destination are both
//! still open and ships as much as possible through it. Cells are scanned in
//! row-major order with a strict comparison, so the first cheapest cell wins.
//!
//! # Complexity
//!
//! O(m·n) per step and at most m + n - 1 steps.

use log::{debug, warn};

use super::residuals::Residuals;
use crate::models::{Allocation, TransportationProblem};

/// Constructs an allocation with the global minimum-cost method.
///
/// # Examples
///
/// ```
/// use u_transport::cost::CostMatrix;
/// use u_transport::models::TransportationProblem;
/// use u_transport::constructive::minimum_cost;
///
/// let costs = CostMatrix::from_rows(vec![vec![8.0, 6.0], vec![4.0, 2.0]]).unwrap();
/// let problem = TransportationProblem::new(vec![20.0, 30.0], vec![10.0, 40.0], costs).unwrap();
///
/// let a = minimum_cost(&problem);
/// assert_eq!(a.get(1, 1), 30.0);
/// ```
pub fn minimum_cost(problem: &TransportationProblem) -> Allocation {
    let costs = problem.costs();
    let mut residuals = Residuals::new(problem);
    let mut allocation = Allocation::new(problem.num_sources(), problem.num_destinations());
    debug!(
        "minimum cost: {}x{}",
        problem.num_sources(),
        problem.num_destinations()
    );

    while residuals.is_open() {
        let open_cols: Vec<usize> = residuals.open_destinations().collect();
        let mut best: Option<(usize, usize, f64)> = None;
        for i in residuals.open_sources() {
            if let Some(j) = costs.cheapest_in_row(i, open_cols.iter().copied()) {
                let c = costs.get(i, j);
                if best.map_or(true, |(_, _, b)| c < b) {
                    best = Some((i, j, c));
                }
            }
        }

        let Some((i, j, _)) = best else {
            warn!("minimum cost: no open cell left, stopping early");
            break;
        };
        residuals.ship(&mut allocation, i, j);
    }

    allocation
}
