//! Allocation cost and feasibility evaluation.

use crate::cost::CostMatrix;
use crate::models::{Allocation, TransportError, TransportationProblem, Violation, ViolationType};

/// Total shipping cost `Σ allocation[i][j] · cost[i][j]`.
///
/// Works on any allocation of matching shape, whichever heuristic (or
/// caller) produced it. Neither input is modified.
///
/// # Examples
///
/// ```
/// use u_transport::cost::CostMatrix;
/// use u_transport::evaluation::total_cost;
/// use u_transport::models::Allocation;
///
/// let costs = CostMatrix::from_rows(vec![vec![8.0, 6.0], vec![4.0, 2.0]]).unwrap();
/// let a = Allocation::from_rows(vec![vec![10.0, 10.0], vec![0.0, 30.0]]).unwrap();
/// assert_eq!(total_cost(&a, &costs).unwrap(), 200.0);
///
/// let wrong = Allocation::new(3, 2);
/// assert!(total_cost(&wrong, &costs).is_err());
/// ```
pub fn total_cost(allocation: &Allocation, costs: &CostMatrix) -> Result<f64, TransportError> {
    if allocation.rows() != costs.rows() {
        return Err(TransportError::DimensionMismatch {
            what: "allocation rows",
            expected: costs.rows(),
            found: allocation.rows(),
        });
    }
    if allocation.cols() != costs.cols() {
        return Err(TransportError::DimensionMismatch {
            what: "allocation columns",
            expected: costs.cols(),
            found: allocation.cols(),
        });
    }
    Ok(weighted_cost(allocation, costs))
}

/// Cell-by-cell product sum for shapes already known to agree.
pub(crate) fn weighted_cost(allocation: &Allocation, costs: &CostMatrix) -> f64 {
    allocation
        .as_slice()
        .iter()
        .zip(costs.as_slice())
        .map(|(q, c)| q * c)
        .sum()
}

/// Evaluates allocations against one problem: total cost plus every
/// capacity or sign violation.
///
/// # Examples
///
/// ```
/// use u_transport::cost::CostMatrix;
/// use u_transport::constructive::vogel;
/// use u_transport::evaluation::AllocationEvaluator;
/// use u_transport::models::TransportationProblem;
///
/// let costs = CostMatrix::from_rows(vec![vec![8.0, 6.0], vec![4.0, 2.0]]).unwrap();
/// let problem = TransportationProblem::new(vec![20.0, 30.0], vec![10.0, 40.0], costs).unwrap();
///
/// let evaluator = AllocationEvaluator::new(&problem);
/// let (cost, violations) = evaluator.evaluate(&vogel(&problem)).unwrap();
/// assert_eq!(cost, 200.0);
/// assert!(violations.is_empty());
/// ```
pub struct AllocationEvaluator<'a> {
    problem: &'a TransportationProblem,
}

impl<'a> AllocationEvaluator<'a> {
    /// Creates an evaluator for the given problem.
    pub fn new(problem: &'a TransportationProblem) -> Self {
        Self { problem }
    }

    /// Total cost of `allocation` under this problem's unit costs.
    pub fn total_cost(&self, allocation: &Allocation) -> Result<f64, TransportError> {
        total_cost(allocation, self.problem.costs())
    }

    /// Lists feasibility violations, in order: negative cells (row-major),
    /// then source totals, then destination totals.
    ///
    /// Totals are compared with the problem's feasibility tolerance.
    pub fn violations(&self, allocation: &Allocation) -> Result<Vec<Violation>, TransportError> {
        self.check_shape(allocation)?;
        let tol = self.problem.config().feasibility_tolerance;
        let mut violations = Vec::new();

        for i in 0..allocation.rows() {
            for j in 0..allocation.cols() {
                let quantity = allocation.get(i, j);
                if quantity < 0.0 {
                    violations.push(Violation::new(ViolationType::NegativeShipment {
                        source: i,
                        destination: j,
                        quantity,
                    }));
                }
            }
        }

        for (source, &supply) in self.problem.supply().iter().enumerate() {
            let shipped = allocation.row_sum(source);
            if (shipped - supply).abs() > tol {
                violations.push(Violation::new(ViolationType::SupplyMismatch {
                    source,
                    shipped,
                    supply,
                }));
            }
        }

        for (destination, &demand) in self.problem.demand().iter().enumerate() {
            let received = allocation.col_sum(destination);
            if (received - demand).abs() > tol {
                violations.push(Violation::new(ViolationType::DemandMismatch {
                    destination,
                    received,
                    demand,
                }));
            }
        }

        Ok(violations)
    }

    /// Returns `(cost, violations)`; a feasible allocation has no violations.
    pub fn evaluate(&self, allocation: &Allocation) -> Result<(f64, Vec<Violation>), TransportError> {
        let violations = self.violations(allocation)?;
        Ok((weighted_cost(allocation, self.problem.costs()), violations))
    }

    /// Returns `true` if `allocation` has the right shape and no violations.
    pub fn is_feasible(&self, allocation: &Allocation) -> bool {
        self.violations(allocation)
            .map(|v| v.is_empty())
            .unwrap_or(false)
    }

    fn check_shape(&self, allocation: &Allocation) -> Result<(), TransportError> {
        if allocation.rows() != self.problem.num_sources() {
            return Err(TransportError::DimensionMismatch {
                what: "allocation rows",
                expected: self.problem.num_sources(),
                found: allocation.rows(),
            });
        }
        if allocation.cols() != self.problem.num_destinations() {
            return Err(TransportError::DimensionMismatch {
                what: "allocation columns",
                expected: self.problem.num_destinations(),
                found: allocation.cols(),
            });
        }
        Ok(())
    }
}
