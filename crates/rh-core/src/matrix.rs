//! Dense row-major `f64` matrix used for distances and service times.

use crate::{ConfigError, ConfigResult};

/// A `rows × cols` table of `f64`, stored row-major.
///
/// Built from nested rows with [`Matrix::from_rows`], which rejects ragged
/// input.  With the `serde` feature it (de)serializes as nested arrays and
/// goes through the same check on load.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// A `rows × cols` matrix with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self { rows, cols, data: vec![value; rows * cols] }
    }

    /// Build from nested rows.  Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> ConfigResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in &rows {
            if row.len() != cols {
                return Err(ConfigError::DimensionMismatch {
                    what:     "matrix row",
                    expected: cols,
                    got:      row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { rows: rows.len(), cols, data })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell `(row, col)`.
    ///
    /// # Panics
    /// Panics if either index is out of range.  Indices produced by a
    /// validated [`StaticConfig`][crate::StaticConfig] are always in range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols, "matrix index ({row}, {col}) out of range");
        self.data[row * self.cols + col]
    }

    /// Iterate over every cell in row-major order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().copied()
    }

    /// Borrow one row as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = ConfigError;

    fn try_from(rows: Vec<Vec<f64>>) -> ConfigResult<Self> {
        Matrix::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self {
        (0..m.rows).map(|r| m.row(r).to_vec()).collect()
    }
}
