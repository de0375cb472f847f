//! Validation Error Types

use thiserror::Error;

/// Errors during pose sample validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Field is NaN or infinite
    #[error("Sample {index}: {field} is not finite")]
    NonFinite { index: usize, field: &'static str },

    /// Target coincides with the ego, bearing is undefined
    #[error("Sample {index}: distance {distance} is below the minimum {min_distance}")]
    DegenerateGeometry {
        index: usize,
        distance: f64,
        min_distance: f64,
    },
}

impl ValidationError {
    /// Index of the offending sample
    pub fn index(&self) -> usize {
        match self {
            ValidationError::NonFinite { index, .. } => *index,
            ValidationError::DegenerateGeometry { index, .. } => *index,
        }
    }
}
