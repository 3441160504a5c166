//! Utility helpers: labeled matrix display.

pub mod format;
pub use format::format_labeled;
