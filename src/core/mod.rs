//! Core linear-algebra traits and wrapper impls for faer types.

pub mod traits;
pub mod wrappers;
pub use traits::{InnerProduct, MatShape, MatVec, MatrixGet};
