//! Domain model types for transportation problems.
//!
//! Provides the validated problem instance (supply, demand, unit costs),
//! the allocation matrix produced by the heuristics, the method selector,
//! solver tolerances, and the precondition errors.

mod allocation;
mod config;
mod error;
mod method;
mod problem;

pub use allocation::{Allocation, Violation, ViolationType};
pub use config::SolverConfig;
pub use error::{QuantityKind, TransportError};
pub use method::{Method, UnknownMethod};
pub use problem::TransportationProblem;
