//! Allocation matrix and feasibility violations.

use serde::{Deserialize, Serialize};

use super::TransportError;

/// A type of feasibility violation in an allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViolationType {
    /// A source ships a different amount than its supply.
    SupplyMismatch {
        /// Source index.
        source: usize,
        /// Units shipped from the source.
        shipped: f64,
        /// Source supply.
        supply: f64,
    },
    /// A destination receives a different amount than its demand.
    DemandMismatch {
        /// Destination index.
        destination: usize,
        /// Units received.
        received: f64,
        /// Destination demand.
        demand: f64,
    },
    /// A cell carries a negative shipment.
    NegativeShipment {
        /// Source index.
        source: usize,
        /// Destination index.
        destination: usize,
        /// Offending quantity.
        quantity: f64,
    },
}

/// A feasibility violation found in an allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Units shipped from each source to each destination.
///
/// Dense `rows × cols` matrix, zero-initialized. Heuristics return a fresh
/// allocation per call; it is owned by the caller afterwards.
///
/// # Examples
///
/// ```
/// use u_transport::models::Allocation;
///
/// let mut a = Allocation::new(2, 2);
/// a.add(0, 1, 10.0);
/// a.add(1, 1, 30.0);
/// assert_eq!(a.col_sum(1), 40.0);
/// assert_eq!(a.total_shipped(), 40.0);
/// assert_eq!(a.basic_cells(), vec![(0, 1), (1, 1)]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Allocation {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Allocation {
    /// Creates an all-zero allocation.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates an allocation from nested rows, e.g. one built outside this crate.
    ///
    /// Ragged rows are a [`TransportError::DimensionMismatch`].
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, TransportError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in &rows {
            if row.len() != cols {
                return Err(TransportError::DimensionMismatch {
                    what: "allocation row",
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Units shipped from source `row` to destination `col`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Adds `quantity` units to cell `(row, col)`.
    pub fn add(&mut self, row: usize, col: usize, quantity: f64) {
        self.data[row * self.cols + col] += quantity;
    }

    /// Number of sources.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of destinations.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major view of every cell.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Units shipped out of source `row`.
    pub fn row_sum(&self, row: usize) -> f64 {
        self.data[row * self.cols..(row + 1) * self.cols].iter().sum()
    }

    /// Units received by destination `col`.
    pub fn col_sum(&self, col: usize) -> f64 {
        (0..self.rows).map(|row| self.get(row, col)).sum()
    }

    /// Shipped units per source.
    pub fn row_sums(&self) -> Vec<f64> {
        (0..self.rows).map(|row| self.row_sum(row)).collect()
    }

    /// Received units per destination.
    pub fn col_sums(&self) -> Vec<f64> {
        (0..self.cols).map(|col| self.col_sum(col)).collect()
    }

    /// Total units shipped.
    pub fn total_shipped(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Cells carrying a positive shipment, in row-major order.
    pub fn basic_cells(&self) -> Vec<(usize, usize)> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, &q)| q > 0.0)
            .map(|(k, _)| (k / self.cols, k % self.cols))
            .collect()
    }

    /// Returns `true` if fewer than `rows + cols - 1` cells are in use.
    ///
    /// A degenerate starting solution needs epsilon cells before any
    /// stepping-stone or MODI style improvement can run on it.
    pub fn is_degenerate(&self) -> bool {
        if self.rows == 0 || self.cols == 0 {
            return false;
        }
        self.basic_cells().len() < self.rows + self.cols - 1
    }

    /// Copies the allocation into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.data.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<f64>>> for Allocation {
    type Error = TransportError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Allocation> for Vec<Vec<f64>> {
    fn from(allocation: Allocation) -> Self {
        allocation.to_rows()
    }
}
