//! Nullspace basis construction from a reduced matrix.
//!
//! The builder validates the input, reduces a private copy to RREF, assigns
//! each pivot row its dependent variable by scanning for unit columns, and
//! back-substitutes one basis vector per free variable. The caller's matrix is
//! never mutated.

use crate::config::KernelOptions;
use crate::error::NsError;
use crate::reduce::{Rref, rref};
use faer::Mat;
use num_traits::Float;

/// Column label for a matrix variable.
///
/// The builder reads only the display name; labels may carry arbitrary extra
/// metadata alongside it.
pub trait VarLabel {
    fn name(&self) -> &str;
}

impl VarLabel for &str {
    fn name(&self) -> &str {
        self
    }
}

impl VarLabel for String {
    fn name(&self) -> &str {
        self
    }
}

/// Labels of the form (name, metadata); only the name is read.
impl<S: AsRef<str>, M> VarLabel for (S, M) {
    fn name(&self) -> &str {
        self.0.as_ref()
    }
}

/// A pivot (dependent) variable: which column pivots at which row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotVar {
    /// Display name of the column's label.
    pub name: String,
    /// Column index in the input matrix.
    pub col: usize,
}

/// Result of a nullspace computation.
///
/// `rank` is surfaced alongside the basis so that a zero-column basis is
/// unambiguous: `rank == n` means the kernel is the trivial space {0}.
#[derive(Debug, Clone)]
pub struct Kernel<T> {
    /// n × (n − rank) matrix whose columns span the nullspace of the input.
    pub basis: Mat<T>,
    /// Rank of the input matrix (number of pivot rows after reduction).
    pub rank: usize,
    /// Pivot variable assigned to each pivot row, in row order.
    pub pivots: Vec<PivotVar>,
    /// Free column indices, left to right; one basis column per entry.
    pub free: Vec<usize>,
}

impl<T> Kernel<T> {
    /// Dimension of the nullspace (number of basis columns).
    pub fn nullity(&self) -> usize {
        self.free.len()
    }
}

/// Compute a basis of the nullspace of `a`, i.e. all x with A·x = 0.
///
/// `variables` labels the columns of `a`, one label per column. The input is
/// cloned before reduction and never mutated. Free variables produce basis
/// columns in left-to-right column order: the free variable itself is set to
/// 1 and each pivot variable to the negated coefficient of the free column in
/// its pivot row.
///
/// # Errors
/// - [`NsError::InvalidShape`] if `a` has fewer than 2 rows or 2 columns.
/// - [`NsError::LabelMismatch`] if the label count differs from the column
///   count.
pub fn nullspace<T, L>(
    a: &Mat<T>,
    variables: &[L],
    opts: &KernelOptions<T>,
) -> Result<Kernel<T>, NsError>
where
    T: Float,
    L: VarLabel,
{
    let (m, n) = (a.nrows(), a.ncols());
    if m < 2 || n < 2 {
        return Err(NsError::InvalidShape { rows: m, cols: n });
    }
    if variables.len() != n {
        return Err(NsError::LabelMismatch {
            labels: variables.len(),
            cols: n,
        });
    }

    let eps = opts.eps;
    let Rref { r, pivots } = rref(a, eps);
    let rank = pivots.len();

    // Assign each pivot row its dependent variable by re-scanning for unit
    // columns, left to right. A column qualifies only if it has a single
    // nonzero entry, that entry equals 1, and its row is still unassigned.
    let mut assigned: Vec<Option<PivotVar>> = vec![None; rank];
    let mut vcount = 0usize;
    for col in 0..n {
        if vcount == rank {
            break;
        }
        let mut hit = None;
        let mut nonzeros = 0usize;
        for row in 0..m {
            if r[(row, col)].abs() > eps {
                nonzeros += 1;
                hit = Some(row);
            }
        }
        let Some(row) = hit else { continue };
        if nonzeros != 1 || (r[(row, col)] - T::one()).abs() > eps {
            continue;
        }
        if row >= rank || assigned[row].is_some() {
            continue;
        }
        assigned[row] = Some(PivotVar {
            name: variables[col].name().to_owned(),
            col,
        });
        vcount += 1;
    }
    let pivot_vars: Vec<PivotVar> = assigned.into_iter().flatten().collect();
    // the unit-column scan must agree with the reducer's own pivot record
    debug_assert_eq!(
        pivot_vars.iter().map(|p| p.col).collect::<Vec<_>>(),
        pivots
    );

    // every column without a pivot assignment is free
    let free: Vec<usize> = (0..n)
        .filter(|c| !pivot_vars.iter().any(|p| p.col == *c))
        .collect();

    // one basis column per free variable
    let mut basis = Mat::from_fn(n, free.len(), |_, _| T::zero());
    for (k, &f) in free.iter().enumerate() {
        basis[(f, k)] = T::one();
        for (p, pv) in pivot_vars.iter().enumerate() {
            let coeff = r[(p, f)];
            if coeff.abs() > eps {
                basis[(pv.col, k)] = -coeff;
            }
        }
    }

    Ok(Kernel {
        basis,
        rank,
        pivots: pivot_vars,
        free,
    })
}
