//! Numeric tolerances.

use serde::{Deserialize, Serialize};

/// Tolerances used when validating problems and checking allocations.
///
/// Balance is checked exactly, up to the rounding error the two sums can
/// pick up, plus an optional user-supplied slack. Integer-valued totals below
/// 2^53 therefore have to match exactly.
///
/// # Examples
///
/// ```
/// use u_transport::models::SolverConfig;
///
/// let config = SolverConfig::default().with_balance_tolerance(1e-6);
/// assert_eq!(config.balance_tolerance, 1e-6);
/// assert_eq!(SolverConfig::default().balance_tolerance, 0.0);
/// assert_eq!(config.feasibility_tolerance, 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Extra relative slack for `total supply == total demand`, scaled by the
    /// larger total (and by at least 1). Zero by default: only summation
    /// rounding is forgiven.
    pub balance_tolerance: f64,
    /// Absolute tolerance when comparing row/column sums with capacities.
    pub feasibility_tolerance: f64,
}

impl SolverConfig {
    /// Sets the balance tolerance.
    pub fn with_balance_tolerance(mut self, tol: f64) -> Self {
        self.balance_tolerance = tol;
        self
    }

    /// Sets the feasibility tolerance.
    pub fn with_feasibility_tolerance(mut self, tol: f64) -> Self {
        self.feasibility_tolerance = tol;
        self
    }

    /// Returns `true` if two totals, summed from `terms` values in all,
    /// are equal.
    ///
    /// The allowed gap is `(terms · ε + balance_tolerance) · scale`, where
    /// `ε` is the machine epsilon and `scale` the larger total (at least 1).
    pub fn is_balanced(&self, total_supply: f64, total_demand: f64, terms: usize) -> bool {
        if total_supply == total_demand {
            return true;
        }
        let scale = total_supply.abs().max(total_demand.abs()).max(1.0);
        let rounding = terms as f64 * f64::EPSILON;
        (total_supply - total_demand).abs() <= (rounding + self.balance_tolerance) * scale
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            balance_tolerance: 0.0,
            feasibility_tolerance: 1e-9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_balanced_exact() {
        let config = SolverConfig::default();
        assert!(config.is_balanced(50.0, 50.0, 4));
        assert!(!config.is_balanced(50.0, 49.0, 4));
    }

    #[test]
    fn test_is_balanced_rounding() {
        let config = SolverConfig::default();
        assert!(config.is_balanced(0.1 + 0.2, 0.3, 3));
    }

    #[test]
    fn test_is_balanced_large_totals_exact() {
        let config = SolverConfig::default();
        // 500 units off on a 1e12 total is far beyond rounding
        assert!(!config.is_balanced(1e12, 1e12 + 500.0, 3));
        assert!(config.is_balanced(1e12, 5e11 + 5e11, 3));
    }

    #[test]
    fn test_is_balanced_with_slack() {
        let config = SolverConfig::default().with_balance_tolerance(1e-6);
        assert!(config.is_balanced(1e12, 1e12 + 500.0, 3));
        assert!(!config.is_balanced(1e12, 1e12 + 5e6, 3));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SolverConfig =
            serde_json::from_str(r#"{"balance_tolerance": 0.5}"#).expect("valid json");
        assert_eq!(config.balance_tolerance, 0.5);
        assert_eq!(config.feasibility_tolerance, 1e-9);
    }
}
