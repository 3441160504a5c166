//! Dense-matrix API on top of Faer.
//!
//! This module provides the `DenseMatrix` trait and its implementation for the
//! `faer::Mat<T>` type, enabling construction from raw column-major storage or
//! from row slices.

use crate::core::traits::{MatShape, MatVec, MatrixGet};
use faer::Mat;

impl<T: Copy + num_traits::Float> MatrixGet<T> for Mat<T> {
    fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

/// Blanket impl so any Faer Mat<T> is a DenseMatrix.
pub trait DenseMatrix<T>: MatVec<Vec<T>> + MatShape {
    /// Construct from raw column-major storage.
    fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Self;

    /// Construct from a slice of equal-length rows.
    fn from_rows(rows: &[Vec<T>]) -> Self;
}

impl<T: Copy + num_traits::Float> DenseMatrix<T> for Mat<T> {
    fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        Mat::from_fn(nrows, ncols, |i, j| data[j * nrows + i])
    }

    fn from_rows(rows: &[Vec<T>]) -> Self {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|r| r.len() == ncols),
            "All rows must have the same length"
        );
        Mat::from_fn(nrows, ncols, |i, j| rows[i][j])
    }
}

impl<T: Copy + num_traits::Float> MatShape for Mat<T> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}
