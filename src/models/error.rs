//! Precondition failures detected when a problem is constructed.

use thiserror::Error;

/// Which capacity vector a quantity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    /// A source's supply.
    Supply,
    /// A destination's demand.
    Demand,
}

impl std::fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuantityKind::Supply => f.write_str("supply"),
            QuantityKind::Demand => f.write_str("demand"),
        }
    }
}

/// Error raised when problem data violates a precondition.
///
/// All variants are detected once, before any heuristic runs. The heuristics
/// themselves cannot fail on a validated problem.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    /// A matrix or vector has the wrong length.
    #[error("{what}: expected length {expected}, found {found}")]
    DimensionMismatch {
        /// Which input was malformed.
        what: &'static str,
        /// Length implied by the other inputs.
        expected: usize,
        /// Actual length.
        found: usize,
    },
    /// A supply or demand quantity is negative.
    #[error("{kind} at index {index} is negative ({value})")]
    NegativeQuantity {
        /// Supply or demand.
        kind: QuantityKind,
        /// Source or destination index.
        index: usize,
        /// Offending value.
        value: f64,
    },
    /// A quantity or cost is NaN or infinite.
    #[error("{what} at ({row}, {col}) is not finite")]
    NonFiniteValue {
        /// Which input holds the value.
        what: &'static str,
        /// Row index (source), or the vector index for supply/demand.
        row: usize,
        /// Column index (destination); zero for supply/demand.
        col: usize,
    },
    /// Total supply differs from total demand.
    #[error("unbalanced problem: total supply {total_supply} != total demand {total_demand}")]
    Unbalanced {
        /// Sum of all supplies.
        total_supply: f64,
        /// Sum of all demands.
        total_demand: f64,
    },
}
