//! nullspan: nullspace (kernel) bases for dense real matrices over Faer
//!
//! This crate reduces a matrix to reduced row-echelon form by Gauss-Jordan
//! elimination with pivot tracking, partitions its columns into pivot and free
//! variables, and assembles one nullspace basis vector per free variable.

pub mod config;
pub mod core;
pub mod error;
pub mod kernel;
pub mod matrix;
pub mod reduce;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use self::core::*;
pub use error::*;
pub use kernel::*;
pub use matrix::*;
pub use reduce::*;
pub use utils::*;
