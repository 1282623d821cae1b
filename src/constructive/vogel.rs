//! Vogel's approximation method (VAM).
//!
//! Each step computes a penalty for every open row and column: the gap
//! between its two cheapest open cells, or the single remaining cost when
//! only one cell is open. The line with the largest penalty is served next,
//! through its cheapest open cell.
//!
//! Rows are ranked before columns and lower indices before higher ones; only
//! a strictly larger penalty displaces the current leader.
//!
//! # Complexity
//!
//! O(m·n) per step and at most m + n - 1 steps.
//!
//! # Reference
//!
//! Reinfeld & Vogel (1958), "Mathematical Programming". Usually lands much
//! closer to the optimum than the Northwest-Corner or least-cost rules.

use log::{debug, warn};

use super::residuals::Residuals;
use crate::models::{Allocation, TransportationProblem};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Line {
    Row(usize),
    Col(usize),
}

/// Constructs an allocation with Vogel's approximation method.
///
/// # Examples
///
/// ```
/// use u_transport::cost::CostMatrix;
/// use u_transport::models::TransportationProblem;
/// use u_transport::constructive::vogel;
///
/// let costs = CostMatrix::from_rows(vec![vec![8.0, 6.0], vec![4.0, 2.0]]).unwrap();
/// let problem = TransportationProblem::new(vec![20.0, 30.0], vec![10.0, 40.0], costs).unwrap();
///
/// let a = vogel(&problem);
/// assert_eq!(a.to_rows(), vec![vec![0.0, 20.0], vec![10.0, 20.0]]);
/// ```
pub fn vogel(problem: &TransportationProblem) -> Allocation {
    let costs = problem.costs();
    let mut residuals = Residuals::new(problem);
    let mut allocation = Allocation::new(problem.num_sources(), problem.num_destinations());
    debug!(
        "vogel: {}x{}",
        problem.num_sources(),
        problem.num_destinations()
    );

    while residuals.is_open() {
        let open_rows: Vec<usize> = residuals.open_sources().collect();
        let open_cols: Vec<usize> = residuals.open_destinations().collect();

        let row_penalties = open_rows.iter().filter_map(|&i| {
            costs
                .penalty_in_row(i, open_cols.iter().copied())
                .map(|p| (Line::Row(i), p))
        });
        let col_penalties = open_cols.iter().filter_map(|&j| {
            costs
                .penalty_in_col(j, open_rows.iter().copied())
                .map(|p| (Line::Col(j), p))
        });

        let mut leader: Option<(Line, f64)> = None;
        for (line, p) in row_penalties.chain(col_penalties) {
            if leader.map_or(true, |(_, best)| p > best) {
                leader = Some((line, p));
            }
        }

        let cell = match leader {
            Some((Line::Row(i), _)) => costs
                .cheapest_in_row(i, open_cols.iter().copied())
                .map(|j| (i, j)),
            Some((Line::Col(j), _)) => costs
                .cheapest_in_col(j, open_rows.iter().copied())
                .map(|i| (i, j)),
            None => None,
        };

        let Some((i, j)) = cell else {
            warn!("vogel: no open cell left, stopping early");
            break;
        };
        residuals.ship(&mut allocation, i, j);
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
    fn test_vogel_scenario() {
        let p = problem(
            vec![20.0, 30.0],
            vec![10.0, 40.0],
            vec![vec![8.0, 6.0], vec![4.0, 2.0]],
        );
        let a = vogel(&p);
        // Column 0 leads with penalty 4 (tie with column 1, lower index wins)
        // and ships 10 through (1, 0).
        assert_eq!(a.get(1, 0), 10.0);
        assert_eq!(a.to_rows(), vec![vec![0.0, 20.0], vec![10.0, 20.0]]);
    }

    #[test]
    fn test_vogel_textbook() {
        let p = problem(
            vec![7.0, 9.0, 18.0],
            vec![5.0, 8.0, 7.0, 14.0],
            vec![
                vec![19.0, 30.0, 50.0, 10.0],
                vec![70.0, 30.0, 40.0, 60.0],
                vec![40.0, 8.0, 70.0, 20.0],
            ],
        );
        let a = vogel(&p);
        assert_eq!(
            a.to_rows(),
            vec![
                vec![5.0, 0.0, 0.0, 2.0],
                vec![0.0, 0.0, 7.0, 2.0],
                vec![0.0, 8.0, 0.0, 10.0],
            ]
        );
    }

    #[test]
    fn test_vogel_row_beats_column_on_tie() {
        // Row 0 and column 0 both have penalty 9; the row is ranked first and
        // ships through its cheapest cell (0, 1).
        let p = problem(
            vec![5.0, 5.0],
            vec![5.0, 5.0],
            vec![vec![10.0, 1.0], vec![1.0, 10.0]],
        );
        let a = vogel(&p);
        assert_eq!(a.to_rows(), vec![vec![0.0, 5.0], vec![5.0, 0.0]]);
    }

    #[test]
    fn test_vogel_single_open_cell_penalty_is_cost() {
        // One destination: every row penalty is its own cost, so the most
        // expensive row is served first (it is still the only choice).
        let p = problem(vec![3.0, 4.0], vec![7.0], vec![vec![2.0], vec![9.0]]);
        let a = vogel(&p);
        assert_eq!(a.to_rows(), vec![vec![3.0], vec![4.0]]);
    }

    #[test]
    fn test_vogel_zero_demand_column_ignored() {
        let p = problem(
            vec![10.0, 10.0],
            vec![0.0, 10.0, 10.0],
            vec![vec![0.0, 4.0, 6.0], vec![0.0, 5.0, 9.0]],
        );
        let a = vogel(&p);
        assert_eq!(a.col_sum(0), 0.0);
        assert_eq!(a.to_rows(), vec![vec![0.0, 0.0, 10.0], vec![0.0, 10.0, 0.0]]);
    }
}
