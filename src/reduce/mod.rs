//! Gauss-Jordan reduction to reduced row-echelon form (RREF).
//!
//! Columns are scanned left to right. For each column the reducer searches for
//! a usable pivot at or below the current pivot row, swaps it into place,
//! normalizes the pivot row so the pivot entry is 1, and eliminates the column
//! in every other row (above and below). Columns with no usable pivot are
//! skipped and become free columns.
//!
//! # References
//! - Golub & Van Loan, Matrix Computations, §3.2

use faer::Mat;
use num_traits::Float;

/// Outcome of a reduction: the reduced matrix and its pivot columns.
#[derive(Debug, Clone)]
pub struct Rref<T> {
    /// The matrix in reduced row-echelon form.
    pub r: Mat<T>,
    /// Pivot column indices, in pivot-row order (ascending rows).
    pub pivots: Vec<usize>,
}

impl<T> Rref<T> {
    /// Number of pivot rows; the rank of the input matrix.
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }
}

/// Reduce `a` to reduced row-echelon form, leaving `a` untouched.
///
/// An entry counts as nonzero only when its magnitude exceeds `eps`;
/// eliminated entries that land at or below `eps` are snapped to exact zero so
/// downstream unit-column scans see clean columns. `eps = 0` reproduces
/// exact-zero comparisons. Terminates within `min(m, n)` pivot steps.
pub fn rref<T: Float>(a: &Mat<T>, eps: T) -> Rref<T> {
    let (m, n) = (a.nrows(), a.ncols());
    // private working copy; the caller's matrix stays untouched
    let mut r = Mat::from_fn(m, n, |i, j| a[(i, j)]);
    let mut pivots = Vec::with_capacity(m.min(n));
    let mut prow = 0usize;

    for col in 0..n {
        if prow == m {
            break;
        }
        // pivot search at or below the current pivot row
        let Some(src) = (prow..m).find(|&i| r[(i, col)].abs() > eps) else {
            continue; // free column
        };
        if src != prow {
            for j in 0..n {
                let tmp = r[(prow, j)];
                r[(prow, j)] = r[(src, j)];
                r[(src, j)] = tmp;
            }
        }
        // normalize the pivot row to a unit pivot
        let p = r[(prow, col)];
        for j in 0..n {
            r[(prow, j)] = r[(prow, j)] / p;
        }
        r[(prow, col)] = T::one();
        // eliminate the column everywhere else, above and below
        for i in 0..m {
            if i == prow {
                continue;
            }
            let f = r[(i, col)];
            if f.abs() <= eps {
                r[(i, col)] = T::zero();
                continue;
            }
            for j in 0..n {
                let v = r[(i, j)] - f * r[(prow, j)];
                r[(i, j)] = if v.abs() <= eps { T::zero() } else { v };
            }
            r[(i, col)] = T::zero();
        }
        pivots.push(col);
        prow += 1;
    }

    Rref { r, pivots }
}
