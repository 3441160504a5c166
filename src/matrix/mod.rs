//! Matrix module: dense matrix construction helpers.

pub mod dense;
pub use dense::DenseMatrix;
