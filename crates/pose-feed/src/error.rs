//! Pose Feed Error Types

use thiserror::Error;

/// Errors while reading or assembling a trajectory
#[derive(Debug, Error)]
pub enum PoseFeedError {
    /// Underlying file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Table row could not be parsed
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    /// No samples in the run
    #[error("Trajectory contains no samples")]
    Empty,

    /// Timestamps must strictly increase
    #[error("Timestamp at sample {index} does not increase ({previous} -> {current})")]
    NonMonotonicTimestamp {
        index: usize,
        previous: f64,
        current: f64,
    },
}
