//! # u-transport
//!
//! Initial basic feasible solutions for the balanced transportation problem:
//! ship fixed supplies from sources to destinations with fixed demands,
//! given a unit cost for every source/destination pair.
//!
//! ## Modules
//!
//! - [`models`] — Problem, allocation, method, configuration, and error types
//! - [`cost`] — Dense cost matrix with the shared tie-breaking scans
//! - [`constructive`] — Allocation heuristics (Northwest-Corner, Minimum-Cost,
//!   Minimum-Row-Cost, Vogel's approximation)
//! - [`evaluation`] — Total cost and feasibility checking
//! - [`io`] — Sectioned text format reader and plain-text report
//! - [`generate`] — Random balanced instances
//!
//! # Examples
//!
//! ```
//! use u_transport::constructive::{solve, vogel};
//! use u_transport::cost::CostMatrix;
//! use u_transport::evaluation::total_cost;
//! use u_transport::models::{Method, TransportationProblem};
//!
//! let costs = CostMatrix::from_rows(vec![vec![8.0, 6.0], vec![4.0, 2.0]]).unwrap();
//! let problem = TransportationProblem::new(vec![20.0, 30.0], vec![10.0, 40.0], costs).unwrap();
//!
//! let allocation = vogel(&problem);
//! assert_eq!(total_cost(&allocation, problem.costs()).unwrap(), 200.0);
//!
//! let nw = solve(&problem, Method::NorthwestCorner);
//! assert_eq!(nw.total_shipped(), 50.0);
//! ```

pub mod constructive;
pub mod cost;
pub mod evaluation;
pub mod generate;
pub mod io;
pub mod models;
