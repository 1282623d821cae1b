//! Transportation problem instance.

use serde::{Deserialize, Serialize};

use super::{QuantityKind, SolverConfig, TransportError};
use crate::cost::CostMatrix;

/// A validated, balanced transportation problem.
///
/// Sources are indexed `0..m` (rows of the cost matrix) and destinations
/// `0..n` (columns). The instance is read-only once built: heuristics copy
/// supply and demand into their own working state, so one problem can be
/// solved by several methods independently.
///
/// # Examples
///
/// ```
/// use u_transport::cost::CostMatrix;
/// use u_transport::models::{TransportError, TransportationProblem};
///
/// let costs = CostMatrix::from_rows(vec![vec![8.0, 6.0], vec![4.0, 2.0]]).unwrap();
/// let problem = TransportationProblem::new(vec![20.0, 30.0], vec![10.0, 40.0], costs.clone()).unwrap();
/// assert_eq!(problem.num_sources(), 2);
/// assert_eq!(problem.total_supply(), 50.0);
///
/// let err = TransportationProblem::new(vec![20.0, 30.0], vec![10.0, 30.0], costs).unwrap_err();
/// assert!(matches!(err, TransportError::Unbalanced { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProblemData", into = "ProblemData")]
pub struct TransportationProblem {
    supply: Vec<f64>,
    demand: Vec<f64>,
    costs: CostMatrix,
    config: SolverConfig,
}

/// Unvalidated wire form of a [`TransportationProblem`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProblemData {
    supply: Vec<f64>,
    demand: Vec<f64>,
    costs: CostMatrix,
    #[serde(default)]
    config: SolverConfig,
}

impl TransportationProblem {
    /// Builds a problem with the default [`SolverConfig`].
    ///
    /// Checks, in order: cost matrix shape against the vector lengths,
    /// finiteness of every value, non-negative quantities, and balance.
    pub fn new(
        supply: Vec<f64>,
        demand: Vec<f64>,
        costs: CostMatrix,
    ) -> Result<Self, TransportError> {
        Self::with_config(supply, demand, costs, SolverConfig::default())
    }

    /// Builds a problem with explicit tolerances.
    pub fn with_config(
        supply: Vec<f64>,
        demand: Vec<f64>,
        costs: CostMatrix,
        config: SolverConfig,
    ) -> Result<Self, TransportError> {
        if costs.rows() != supply.len() {
            return Err(TransportError::DimensionMismatch {
                what: "cost matrix rows",
                expected: supply.len(),
                found: costs.rows(),
            });
        }
        if costs.cols() != demand.len() {
            return Err(TransportError::DimensionMismatch {
                what: "cost matrix columns",
                expected: demand.len(),
                found: costs.cols(),
            });
        }

        check_finite("supply", &supply)?;
        check_finite("demand", &demand)?;
        if let Some((row, col, _)) = costs.first_non_finite() {
            return Err(TransportError::NonFiniteValue {
                what: "cost",
                row,
                col,
            });
        }

        check_non_negative(QuantityKind::Supply, &supply)?;
        check_non_negative(QuantityKind::Demand, &demand)?;

        let total_supply: f64 = supply.iter().sum();
        let total_demand: f64 = demand.iter().sum();
        if !config.is_balanced(total_supply, total_demand, supply.len() + demand.len()) {
            return Err(TransportError::Unbalanced {
                total_supply,
                total_demand,
            });
        }

        Ok(Self {
            supply,
            demand,
            costs,
            config,
        })
    }

    /// Supply of every source.
    pub fn supply(&self) -> &[f64] {
        &self.supply
    }

    /// Demand of every destination.
    pub fn demand(&self) -> &[f64] {
        &self.demand
    }

    /// Unit cost matrix.
    pub fn costs(&self) -> &CostMatrix {
        &self.costs
    }

    /// Tolerances this problem was validated with.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Number of sources (m).
    pub fn num_sources(&self) -> usize {
        self.supply.len()
    }

    /// Number of destinations (n).
    pub fn num_destinations(&self) -> usize {
        self.demand.len()
    }

    /// Sum of all supplies.
    pub fn total_supply(&self) -> f64 {
        self.supply.iter().sum()
    }

    /// Sum of all demands.
    pub fn total_demand(&self) -> f64 {
        self.demand.iter().sum()
    }
}

impl TryFrom<ProblemData> for TransportationProblem {
    type Error = TransportError;

    fn try_from(data: ProblemData) -> Result<Self, Self::Error> {
        Self::with_config(data.supply, data.demand, data.costs, data.config)
    }
}

impl From<TransportationProblem> for ProblemData {
    fn from(problem: TransportationProblem) -> Self {
        Self {
            supply: problem.supply,
            demand: problem.demand,
            costs: problem.costs,
            config: problem.config,
        }
    }
}

fn check_finite(what: &'static str, values: &[f64]) -> Result<(), TransportError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(row) => Err(TransportError::NonFiniteValue { what, row, col: 0 }),
        None => Ok(()),
    }
}

fn check_non_negative(kind: QuantityKind, values: &[f64]) -> Result<(), TransportError> {
    match values.iter().position(|&v| v < 0.0) {
        Some(index) => Err(TransportError::NegativeQuantity {
            kind,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}
