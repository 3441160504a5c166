//! Configuration for the reducer and the kernel builder.

pub mod options;
pub use options::KernelOptions;
