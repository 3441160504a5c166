use thiserror::Error;

// Unified error type for nullspan

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NsError {
    #[error("matrix shape {rows}x{cols} is too small (need at least 2 rows and 2 columns)")]
    InvalidShape { rows: usize, cols: usize },
    #[error("{labels} variable labels supplied for a matrix with {cols} columns")]
    LabelMismatch { labels: usize, cols: usize },
}
