//! Minimum-Row-Cost method.
//!
//! Fills sources one at a time in index order. Each source ships to its
//! cheapest open destination until its supply is gone, so later sources only
//! see the demand earlier ones left behind.

use log::{debug, warn};

use super::residuals::Residuals;
use crate::models::{Allocation, TransportationProblem};

/// Constructs an allocation with the row-by-row minimum-cost method.
///
/// # Examples
///
/// ```
/// use u_transport::cost::CostMatrix;
/// use u_transport::models::TransportationProblem;
/// use u_transport::constructive::minimum_row_cost;
///
/// let costs = CostMatrix::from_rows(vec![vec![8.0, 6.0], vec![4.0, 2.0]]).unwrap();
/// let problem = TransportationProblem::new(vec![20.0, 30.0], vec![10.0, 40.0], costs).unwrap();
///
/// let a = minimum_row_cost(&problem);
/// assert_eq!(a.to_rows(), vec![vec![0.0, 20.0], vec![10.0, 20.0]]);
/// ```
pub fn minimum_row_cost(problem: &TransportationProblem) -> Allocation {
    let costs = problem.costs();
    let mut residuals = Residuals::new(problem);
    let mut allocation = Allocation::new(problem.num_sources(), problem.num_destinations());
    debug!(
        "minimum row cost: {}x{}",
        problem.num_sources(),
        problem.num_destinations()
    );

    for i in 0..problem.num_sources() {
        while residuals.supply(i) > 0.0 {
            let Some(j) = costs.cheapest_in_row(i, residuals.open_destinations()) else {
                warn!(
                    "minimum row cost: source {i} keeps {} units with no open destination",
                    residuals.supply(i)
                );
                break;
            };
            residuals.ship(&mut allocation, i, j);
        }
    }

    allocation
}
