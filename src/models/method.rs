//! Heuristic selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An initial-allocation heuristic.
///
/// # Examples
///
/// ```
/// use u_transport::models::Method;
///
/// let m: Method = "vogel".parse().unwrap();
/// assert_eq!(m, Method::Vogel);
/// assert_eq!(m.to_string(), "Vogel's method");
/// assert_eq!(Method::ALL.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Northwest-Corner rule; ignores costs.
    NorthwestCorner,
    /// Global minimum-cost (least-cost cell) method.
    MinimumCost,
    /// Row-by-row minimum-cost method.
    MinimumRowCost,
    /// Vogel's approximation method.
    Vogel,
}

impl Method {
    /// Every method, in report order.
    pub const ALL: [Method; 4] = [
        Method::NorthwestCorner,
        Method::MinimumCost,
        Method::MinimumRowCost,
        Method::Vogel,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Method::NorthwestCorner => "Northwest corner rule",
            Method::MinimumCost => "Minimum cost method",
            Method::MinimumRowCost => "Minimum row cost method",
            Method::Vogel => "Vogel's method",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a method name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown method `{0}` (expected nw, min-cost, row-min, or vogel)")]
pub struct UnknownMethod(pub String);

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "nw" | "northwest" | "northwest-corner" => Ok(Method::NorthwestCorner),
            "min-cost" | "minimum-cost" | "least-cost" => Ok(Method::MinimumCost),
            "row-min" | "min-row-cost" | "minimum-row-cost" => Ok(Method::MinimumRowCost),
            "vogel" | "vam" => Ok(Method::Vogel),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}
