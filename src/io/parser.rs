//! Sectioned text format reader.
//!
//! ```text
//! Supply Nodes:
//! S1: 20
//! S2: 30
//!
//! Demand Nodes:
//! D1: 10
//! D2: 40
//!
//! Cost Matrix:
//! 8 6
//! 4 2
//! ```

use std::path::Path;

use thiserror::Error;

use crate::cost::CostMatrix;
use crate::models::{TransportError, TransportationProblem};

const SUPPLY_HEADER: &str = "Supply Nodes:";
const DEMAND_HEADER: &str = "Demand Nodes:";
const COST_HEADER: &str = "Cost Matrix:";

/// Error raised while reading a problem file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The file could not be read.
    #[error("failed to read problem file: {0}")]
    Io(#[from] std::io::Error),
    /// A required section header never appeared.
    #[error("missing section `{0}`")]
    MissingSection(&'static str),
    /// Content before the first section header.
    #[error("line {line}: content outside of any section: {content:?}")]
    OutsideSection {
        /// 1-based line number.
        line: usize,
        /// Offending line, trimmed.
        content: String,
    },
    /// A node line without the `name: quantity` shape.
    #[error("line {line}: expected `name: quantity`, found {content:?}")]
    InvalidNode {
        /// 1-based line number.
        line: usize,
        /// Offending line, trimmed.
        content: String,
    },
    /// A token that is not a number.
    #[error("line {line}: invalid number {token:?}")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// Offending token.
        token: String,
    },
    /// The same node name appears twice in one section.
    #[error("line {line}: duplicate node {name:?}")]
    DuplicateNode {
        /// 1-based line number.
        line: usize,
        /// Repeated name.
        name: String,
    },
    /// The data parsed but does not form a valid problem.
    #[error(transparent)]
    Problem(#[from] TransportError),
}

/// A problem read from text, with the node names in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedProblem {
    /// Source names; index `i` labels row `i`.
    pub source_names: Vec<String>,
    /// Destination names; index `j` labels column `j`.
    pub destination_names: Vec<String>,
    /// The validated problem.
    pub problem: TransportationProblem,
}

#[derive(Clone, Copy, PartialEq)]
enum Section {
    Supply,
    Demand,
    Cost,
}

/// Parses a problem from the sectioned text format.
///
/// Section headers must appear on their own line; blank lines are ignored.
/// Quantities and costs may be integers or decimals.
///
/// # Examples
///
/// ```
/// use u_transport::io::parse_problem;
///
/// let text = "Supply Nodes:\nS1: 20\nS2: 30\nDemand Nodes:\nD1: 10\nD2: 40\nCost Matrix:\n8 6\n4 2\n";
/// let parsed = parse_problem(text).unwrap();
/// assert_eq!(parsed.source_names, vec!["S1", "S2"]);
/// assert_eq!(parsed.problem.demand(), &[10.0, 40.0]);
/// assert_eq!(parsed.problem.costs().get(1, 1), 2.0);
/// ```
pub fn parse_problem(text: &str) -> Result<ParsedProblem, ParseError> {
    let mut section: Option<Section> = None;
    let mut seen = [false; 3];
    let mut sources: Vec<(String, f64)> = Vec::new();
    let mut destinations: Vec<(String, f64)> = Vec::new();
    let mut cost_rows: Vec<Vec<f64>> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let header = match line {
            SUPPLY_HEADER => Some(Section::Supply),
            DEMAND_HEADER => Some(Section::Demand),
            COST_HEADER => Some(Section::Cost),
            _ => None,
        };
        if let Some(h) = header {
            seen[h as usize] = true;
            section = Some(h);
            continue;
        }

        match section {
            None => {
                return Err(ParseError::OutsideSection {
                    line: line_no,
                    content: line.to_string(),
                })
            }
            Some(Section::Supply) => push_node(&mut sources, line, line_no)?,
            Some(Section::Demand) => push_node(&mut destinations, line, line_no)?,
            Some(Section::Cost) => {
                let row = line
                    .split_whitespace()
                    .map(|token| parse_number(token, line_no))
                    .collect::<Result<Vec<f64>, _>>()?;
                cost_rows.push(row);
            }
        }
    }

    for (present, name) in seen.iter().zip([SUPPLY_HEADER, DEMAND_HEADER, COST_HEADER]) {
        if !present {
            return Err(ParseError::MissingSection(name.trim_end_matches(':')));
        }
    }

    let (source_names, supply): (Vec<String>, Vec<f64>) = sources.into_iter().unzip();
    let (destination_names, demand): (Vec<String>, Vec<f64>) = destinations.into_iter().unzip();

    let costs = if cost_rows.is_empty() {
        CostMatrix::new(0, demand.len())
    } else {
        CostMatrix::from_rows(cost_rows)?
    };
    let problem = TransportationProblem::new(supply, demand, costs)?;

    Ok(ParsedProblem {
        source_names,
        destination_names,
        problem,
    })
}

/// Reads and parses a problem file.
pub fn read_problem<P: AsRef<Path>>(path: P) -> Result<ParsedProblem, ParseError> {
    let text = std::fs::read_to_string(path)?;
    parse_problem(&text)
}

fn push_node(
    nodes: &mut Vec<(String, f64)>,
    line: &str,
    line_no: usize,
) -> Result<(), ParseError> {
    let Some((name, value)) = line.split_once(':') else {
        return Err(ParseError::InvalidNode {
            line: line_no,
            content: line.to_string(),
        });
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::InvalidNode {
            line: line_no,
            content: line.to_string(),
        });
    }
    if nodes.iter().any(|(n, _)| n == name) {
        return Err(ParseError::DuplicateNode {
            line: line_no,
            name: name.to_string(),
        });
    }
    let quantity = parse_number(value.trim(), line_no)?;
    nodes.push((name.to_string(), quantity));
    Ok(())
}

fn parse_number(token: &str, line_no: usize) -> Result<f64, ParseError> {
    token.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
        line: line_no,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuantityKind;

    const SAMPLE: &str = "\
Supply Nodes:
Factory A: 7
Factory B: 9
Factory C: 18

Demand Nodes:
W1: 5
W2: 8
W3: 7
W4: 14

Cost Matrix:
19 30 50 10
70 30 40 60
40 8 70 20
";

    #[test]
    fn test_parse_sample() {
        let parsed = parse_problem(SAMPLE).expect("valid file");
        assert_eq!(parsed.source_names, vec!["Factory A", "Factory B", "Factory C"]);
        assert_eq!(parsed.destination_names, vec!["W1", "W2", "W3", "W4"]);
        assert_eq!(parsed.problem.supply(), &[7.0, 9.0, 18.0]);
        assert_eq!(parsed.problem.costs().row(2), &[40.0, 8.0, 70.0, 20.0]);
    }

    #[test]
    fn test_parse_decimals_and_padding() {
        let text = "  Supply Nodes:  \nS: 2.5\nDemand Nodes:\nD:2.5\nCost Matrix:\n\t1.25\n";
        let parsed = parse_problem(text).expect("valid file");
        assert_eq!(parsed.problem.supply(), &[2.5]);
        assert_eq!(parsed.problem.costs().get(0, 0), 1.25);
    }

    #[test]
    fn test_missing_section() {
        let text = "Supply Nodes:\nS1: 5\nDemand Nodes:\nD1: 5\n";
        let err = parse_problem(text).unwrap_err();
        assert!(matches!(err, ParseError::MissingSection("Cost Matrix")));
    }

    #[test]
    fn test_outside_section() {
        let err = parse_problem("S1: 5\n").unwrap_err();
        assert!(matches!(err, ParseError::OutsideSection { line: 1, .. }));
    }

    #[test]
    fn test_invalid_node() {
        let err = parse_problem("Supply Nodes:\nS1 5\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidNode { line: 2, .. }));
    }

    #[test]
    fn test_invalid_number() {
        let text = "Supply Nodes:\nS1: 5\nDemand Nodes:\nD1: 5\nCost Matrix:\n3 x\n";
        let err = parse_problem(text).unwrap_err();
        match err {
            ParseError::InvalidNumber { line, token } => {
                assert_eq!(line, 6);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_node() {
        let err = parse_problem("Supply Nodes:\nS1: 5\nS1: 6\n").unwrap_err();
        assert!(matches!(err, ParseError::DuplicateNode { line: 3, .. }));
    }

    #[test]
    fn test_ragged_cost_rows() {
        let text = "Supply Nodes:\nS1: 5\nS2: 5\nDemand Nodes:\nD1: 5\nD2: 5\nCost Matrix:\n1 2\n3\n";
        let err = parse_problem(text).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Problem(TransportError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_negative_quantity_surfaces() {
        let text = "Supply Nodes:\nS1: -5\nS2: 10\nDemand Nodes:\nD1: 5\nCost Matrix:\n1\n2\n";
        let err = parse_problem(text).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Problem(TransportError::NegativeQuantity {
                kind: QuantityKind::Supply,
                index: 0,
                ..
            })
        ));
    }

    #[test]
    fn test_unbalanced_surfaces() {
        let text = "Supply Nodes:\nS1: 5\nDemand Nodes:\nD1: 6\nCost Matrix:\n1\n";
        let err = parse_problem(text).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Problem(TransportError::Unbalanced { .. })
        ));
        assert!(err.to_string().starts_with("unbalanced problem"));
    }

    #[test]
    fn test_read_demo_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/transportation_problem.txt");
        let parsed = read_problem(path).expect("demo file parses");
        assert_eq!(parsed.source_names, vec!["S1", "S2", "S3"]);
        assert_eq!(parsed.problem.num_destinations(), 4);
        assert_eq!(parsed.problem.total_demand(), 34.0);
    }

    #[test]
    fn test_read_problem_missing_file() {
        let err = read_problem("/nonexistent/transportation_problem.txt").unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }

    #[test]
    fn test_read_problem_from_disk() {
        let path = std::env::temp_dir().join("u_transport_parser_test.txt");
        std::fs::write(&path, SAMPLE).expect("write temp file");
        let parsed = read_problem(&path).expect("valid file");
        std::fs::remove_file(&path).ok();
        assert_eq!(parsed.problem.total_supply(), 34.0);
    }
}
