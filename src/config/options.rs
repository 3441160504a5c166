//! API options for reduction and kernel construction.
//!
//! This module provides the `KernelOptions` struct, which carries the numeric
//! tolerance used by both the RREF reducer and the nullspace builder. The
//! tolerance decides when an entry counts as zero during pivot search,
//! elimination cleanup, and unit-column detection.

use num_traits::Float;

/// Numeric policy shared by reduction and pivot detection.
#[derive(Debug, Clone, Copy)]
pub struct KernelOptions<T> {
    /// Magnitude at or below which an entry is treated as zero.
    pub eps: T,
}

impl<T: Float> KernelOptions<T> {
    /// Options with an explicit tolerance.
    pub fn with_eps(eps: T) -> Self {
        Self { eps }
    }

    /// Exact-zero comparisons (no tolerance). Fragile for inputs that carry
    /// floating-point noise; prefer the default unless entries are exact.
    pub fn exact() -> Self {
        Self { eps: T::zero() }
    }
}

impl<T: Float> Default for KernelOptions<T> {
    fn default() -> Self {
        Self {
            eps: T::from(1e-9).unwrap_or_else(T::epsilon),
        }
    }
}
