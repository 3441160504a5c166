//! Tab-aligned rendering of labeled matrices.
//!
//! Display collaborator for the kernel builder: given a matrix, its column
//! labels, and a label per row, renders a tab-separated table with a header
//! row of variable names and entries rounded to a fixed number of decimal
//! places. The core algorithms never call this; callers hand it whichever
//! matrix they want shown (input, reduced, or basis).

use crate::core::traits::{MatShape, MatrixGet};
use crate::kernel::VarLabel;
use num_traits::{Float, ToPrimitive};
use std::fmt::Write;

/// Conventional digit count for rendered entries.
pub const DEFAULT_DIGITS: usize = 1;

/// Render `a` as a tab-separated table.
///
/// The header row lists variable names; each body row starts with its
/// dimension label. Entries are printed with `digits` decimal places.
pub fn format_labeled<T, M, L>(
    a: &M,
    variables: &[L],
    dimensions: &[&str],
    digits: usize,
) -> String
where
    T: Float,
    M: MatShape + MatrixGet<T>,
    L: VarLabel,
{
    let (m, n) = (a.nrows(), a.ncols());
    assert_eq!(variables.len(), n, "One variable label per column required");
    assert_eq!(dimensions.len(), m, "One dimension label per row required");

    let mut out = String::new();
    out.push('\t');
    for v in variables {
        out.push_str(v.name());
        out.push('\t');
    }
    out.push('\n');
    for i in 0..m {
        out.push_str(dimensions[i]);
        out.push('\t');
        for j in 0..n {
            let x = a.get(i, j).to_f64().unwrap_or(f64::NAN);
            let _ = write!(out, "{x:.digits$}");
            out.push('\t');
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::DenseMatrix;
    use faer::Mat;

    #[test]
    fn renders_header_rows_and_rounding() {
        let a = Mat::from_rows(&[vec![1.0, 2.25], vec![-0.5, 3.0]]);
        let vars = ["x", "y"];
        let dims = ["M", "L"];
        let s = format_labeled(&a, &vars, &dims, DEFAULT_DIGITS);
        assert_eq!(s, "\tx\ty\t\nM\t1.0\t2.2\t\nL\t-0.5\t3.0\t\n\n");
    }

    #[test]
    fn digit_count_is_configurable() {
        let a = Mat::from_rows(&[vec![1.234, 0.0], vec![0.0, 1.0]]);
        let s = format_labeled(&a, &["a", "b"], &["r0", "r1"], 2);
        assert!(s.contains("1.23"));
    }
}
