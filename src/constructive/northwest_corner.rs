//! Northwest-Corner rule.
//!
//! Starts at the top-left cell and walks towards the bottom-right, shipping
//! as much as possible through each cell. Moves down when the current source
//! is exhausted, otherwise right. Costs are never consulted.
//!
//! # Complexity
//!
//! O(m + n): at most m + n - 1 cells are visited.

use log::debug;

use super::residuals::Residuals;
use crate::models::{Allocation, TransportationProblem};

/// Constructs an allocation with the Northwest-Corner rule.
///
/// # Examples
///
/// ```
/// use u_transport::cost::CostMatrix;
/// use u_transport::models::TransportationProblem;
/// use u_transport::constructive::northwest_corner;
///
/// let costs = CostMatrix::from_rows(vec![vec![8.0, 6.0], vec![4.0, 2.0]]).unwrap();
/// let problem = TransportationProblem::new(vec![20.0, 30.0], vec![10.0, 40.0], costs).unwrap();
///
/// let a = northwest_corner(&problem);
/// assert_eq!(a.to_rows(), vec![vec![10.0, 10.0], vec![0.0, 30.0]]);
/// ```
pub fn northwest_corner(problem: &TransportationProblem) -> Allocation {
    let m = problem.num_sources();
    let n = problem.num_destinations();
    let mut residuals = Residuals::new(problem);
    let mut allocation = Allocation::new(m, n);
    debug!("northwest corner: {m}x{n}");

    let (mut i, mut j) = (0, 0);
    while i < m && j < n {
        residuals.ship(&mut allocation, i, j);
        if residuals.supply(i) == 0.0 {
            i += 1;
        } else {
            j += 1;
        }
    }

    allocation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::CostMatrix;

    fn problem(supply: Vec<f64>, demand: Vec<f64>, rows: Vec<Vec<f64>>) -> TransportationProblem {
        let costs = CostMatrix::from_rows(rows).expect("rectangular");
        TransportationProblem::new(supply, demand, costs).expect("balanced")
    }

    #[test]
    fn test_nw_textbook() {
        let p = problem(
            vec![7.0, 9.0, 18.0],
            vec![5.0, 8.0, 7.0, 14.0],
            vec![
                vec![19.0, 30.0, 50.0, 10.0],
                vec![70.0, 30.0, 40.0, 60.0],
                vec![40.0, 8.0, 70.0, 20.0],
            ],
        );
        let a = northwest_corner(&p);
        assert_eq!(
            a.to_rows(),
            vec![
                vec![5.0, 2.0, 0.0, 0.0],
                vec![0.0, 6.0, 3.0, 0.0],
                vec![0.0, 0.0, 4.0, 14.0],
            ]
        );
    }

    #[test]
    fn test_nw_ignores_costs() {
        let cheap = problem(vec![5.0, 5.0], vec![5.0, 5.0], vec![vec![1.0, 1.0], vec![1.0, 1.0]]);
        let pricey = problem(
            vec![5.0, 5.0],
            vec![5.0, 5.0],
            vec![vec![99.0, 1.0], vec![1.0, 99.0]],
        );
        assert_eq!(northwest_corner(&cheap), northwest_corner(&pricey));
    }

    #[test]
    fn test_nw_simultaneous_exhaustion() {
        // Source 0 and destination 0 run out together: the cursor moves down
        // and ships a zero into (1, 0) before moving right.
        let p = problem(vec![10.0, 20.0], vec![10.0, 20.0], vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let a = northwest_corner(&p);
        assert_eq!(a.to_rows(), vec![vec![10.0, 0.0], vec![0.0, 20.0]]);
        assert!(a.is_degenerate());
    }

    #[test]
    fn test_nw_zero_supply_row() {
        let p = problem(
            vec![0.0, 30.0],
            vec![10.0, 20.0],
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        );
        let a = northwest_corner(&p);
        assert_eq!(a.row_sums(), vec![0.0, 30.0]);
        assert_eq!(a.col_sums(), vec![10.0, 20.0]);
    }

    #[test]
    fn test_nw_empty() {
        let p = TransportationProblem::new(vec![], vec![], CostMatrix::new(0, 0)).expect("empty");
        let a = northwest_corner(&p);
        assert_eq!(a.rows(), 0);
        assert_eq!(a.total_shipped(), 0.0);
    }
}
