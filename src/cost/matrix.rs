//! Dense cost matrix.

use serde::{Deserialize, Serialize};

use crate::models::TransportError;

/// A dense `rows × cols` unit-cost matrix stored in row-major order.
///
/// `get(i, j)` is the cost of shipping one unit from source `i` to
/// destination `j`.
///
/// # Examples
///
/// ```
/// use u_transport::cost::CostMatrix;
///
/// let cm = CostMatrix::from_rows(vec![vec![8.0, 6.0], vec![4.0, 2.0]]).unwrap();
/// assert_eq!(cm.get(1, 0), 4.0);
/// assert_eq!(cm.rows(), 2);
/// assert_eq!(cm.cols(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct CostMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl CostMatrix {
    /// Creates a cost matrix of the given shape, initialized to zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a cost matrix from a flat row-major buffer.
    ///
    /// Returns `None` if the data length doesn't match `rows * cols`.
    pub fn from_data(rows: usize, cols: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != rows * cols {
            return None;
        }
        Some(Self { data, rows, cols })
    }

    /// Creates a cost matrix from nested rows.
    ///
    /// The first row fixes the column count; a ragged row is a
    /// [`TransportError::DimensionMismatch`].
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, TransportError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in &rows {
            if row.len() != cols {
                return Err(TransportError::DimensionMismatch {
                    what: "cost matrix row",
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

    /// Returns the unit cost from source `row` to destination `col`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Sets the unit cost from source `row` to destination `col`.
    pub fn set(&mut self, row: usize, col: usize, cost: f64) {
        self.data[row * self.cols + col] = cost;
    }

    /// Number of sources.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of destinations.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Costs of one source to every destination.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Row-major view of every cost.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copies the matrix into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows).map(|row| self.row(row).to_vec()).collect()
    }

    /// Position and value of the first non-finite entry, if any.
    pub fn first_non_finite(&self) -> Option<(usize, usize, f64)> {
        self.data
            .iter()
            .position(|c| !c.is_finite())
            .map(|k| (k / self.cols, k % self.cols, self.data[k]))
    }

    /// Returns the cheapest destination of `row` among `cols`.
    ///
    /// Candidates are scanned in the order given and only a strictly smaller
    /// cost replaces the current best, so the first minimum wins.
    /// Returns `None` if `cols` is empty.
    pub fn cheapest_in_row<I>(&self, row: usize, cols: I) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        first_minimum(cols.into_iter().map(|col| (col, self.get(row, col))))
    }

    /// Returns the cheapest source of `col` among `rows`, first minimum winning.
    pub fn cheapest_in_col<I>(&self, col: usize, rows: I) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        first_minimum(rows.into_iter().map(|row| (row, self.get(row, col))))
    }

    /// Vogel penalty of `row` over the candidate destinations.
    ///
    /// The gap between the two smallest costs, or the cost itself when only
    /// one candidate remains. Returns `None` if `cols` is empty.
    pub fn penalty_in_row<I>(&self, row: usize, cols: I) -> Option<f64>
    where
        I: IntoIterator<Item = usize>,
    {
        penalty(cols.into_iter().map(|col| self.get(row, col)))
    }

    /// Vogel penalty of `col` over the candidate sources.
    pub fn penalty_in_col<I>(&self, col: usize, rows: I) -> Option<f64>
    where
        I: IntoIterator<Item = usize>,
    {
        penalty(rows.into_iter().map(|row| self.get(row, col)))
    }
}

impl TryFrom<Vec<Vec<f64>>> for CostMatrix {
    type Error = TransportError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<CostMatrix> for Vec<Vec<f64>> {
    fn from(matrix: CostMatrix) -> Self {
        matrix.to_rows()
    }
}

fn first_minimum(candidates: impl Iterator<Item = (usize, f64)>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, cost) in candidates {
        if best.map_or(true, |(_, b)| cost < b) {
            best = Some((idx, cost));
        }
    }
    best.map(|(idx, _)| idx)
}

fn penalty(costs: impl Iterator<Item = f64>) -> Option<f64> {
    let mut lowest = f64::INFINITY;
    let mut second = f64::INFINITY;
    let mut count = 0usize;
    for c in costs {
        if c < lowest {
            second = lowest;
            lowest = c;
        } else if c < second {
            second = c;
        }
        count += 1;
    }
    match count {
        0 => None,
        1 => Some(lowest),
        _ => Some(second - lowest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CostMatrix {
        CostMatrix::from_rows(vec![
            vec![8.0, 6.0, 10.0, 9.0],
            vec![9.0, 12.0, 13.0, 7.0],
            vec![14.0, 9.0, 16.0, 5.0],
        ])
        .expect("rectangular")
    }

    #[test]
    fn test_from_rows() {
        let cm = sample();
        assert_eq!(cm.rows(), 3);
        assert_eq!(cm.cols(), 4);
        assert_eq!(cm.get(2, 3), 5.0);
        assert_eq!(cm.row(1), &[9.0, 12.0, 13.0, 7.0]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = CostMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            TransportError::DimensionMismatch {
                what: "cost matrix row",
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn test_from_rows_empty() {
        let cm = CostMatrix::from_rows(vec![]).expect("empty is rectangular");
        assert_eq!(cm.rows(), 0);
        assert_eq!(cm.cols(), 0);
    }

    #[test]
    fn test_from_data() {
        let cm = CostMatrix::from_data(1, 2, vec![3.0, 4.0]).expect("valid");
        assert_eq!(cm.get(0, 1), 4.0);
        assert!(CostMatrix::from_data(2, 2, vec![1.0]).is_none());
    }

    #[test]
    fn test_json_is_nested_rows() {
        let cm = CostMatrix::from_rows(vec![vec![8.0, 6.0], vec![4.0, 2.0]]).expect("valid");
        let json = serde_json::to_string(&cm).expect("serialize");
        assert_eq!(json, "[[8.0,6.0],[4.0,2.0]]");
        let back: CostMatrix = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, cm);
        assert!(serde_json::from_str::<CostMatrix>("[[1.0],[2.0,3.0]]").is_err());
    }

    #[test]
    fn test_set_get() {
        let mut cm = CostMatrix::new(2, 3);
        cm.set(1, 2, 42.0);
        assert_eq!(cm.get(1, 2), 42.0);
        assert_eq!(cm.get(0, 0), 0.0);
    }

    #[test]
    fn test_first_non_finite() {
        let mut cm = sample();
        assert!(cm.first_non_finite().is_none());
        cm.set(1, 2, f64::NAN);
        let (r, c, v) = cm.first_non_finite().expect("nan present");
        assert_eq!((r, c), (1, 2));
        assert!(v.is_nan());
    }

    #[test]
    fn test_cheapest_in_row() {
        let cm = sample();
        assert_eq!(cm.cheapest_in_row(0, 0..4), Some(1));
        assert_eq!(cm.cheapest_in_row(0, [0, 2, 3]), Some(0));
        assert_eq!(cm.cheapest_in_row(0, std::iter::empty()), None);
    }

    #[test]
    fn test_cheapest_tie_keeps_first() {
        let cm = CostMatrix::from_rows(vec![vec![3.0, 1.0, 1.0], vec![1.0, 5.0, 1.0]])
            .expect("rectangular");
        assert_eq!(cm.cheapest_in_row(0, 0..3), Some(1));
        assert_eq!(cm.cheapest_in_col(2, 0..2), Some(0));
    }

    #[test]
    fn test_cheapest_in_col() {
        let cm = sample();
        assert_eq!(cm.cheapest_in_col(3, 0..3), Some(2));
        assert_eq!(cm.cheapest_in_col(3, [0, 1]), Some(1));
    }

    #[test]
    fn test_penalty_two_smallest() {
        let cm = sample();
        // Row 0: 6, 8 -> 2
        assert!((cm.penalty_in_row(0, 0..4).expect("open") - 2.0).abs() < 1e-10);
        // Column 1: 6, 9 -> 3
        assert!((cm.penalty_in_col(1, 0..3).expect("open") - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_penalty_duplicate_minimum_is_zero() {
        let cm = CostMatrix::from_rows(vec![vec![3.0, 3.0, 5.0]]).expect("rectangular");
        assert_eq!(cm.penalty_in_row(0, 0..3), Some(0.0));
    }

    #[test]
    fn test_penalty_single_candidate_is_cost() {
        let cm = sample();
        assert_eq!(cm.penalty_in_row(1, [2]), Some(13.0));
        assert_eq!(cm.penalty_in_col(0, std::iter::empty()), None);
    }
}
