//! Text input and output around the solver.
//!
//! - [`parse_problem`] / [`read_problem`] — Sectioned `Supply Nodes:` /
//!   `Demand Nodes:` / `Cost Matrix:` format
//! - [`render_allocation`] / [`render_report`] — Plain-text tables with totals

mod parser;
mod report;

pub use parser::{parse_problem, read_problem, ParseError, ParsedProblem};
pub use report::{render_allocation, render_report};
