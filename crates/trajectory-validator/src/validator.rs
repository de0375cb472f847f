//! Pose Sample Validator

use crate::error::ValidationError;
use pose_feed::{PoseSample, Trajectory};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Validation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Planar distances below this are degenerate (meters)
    pub min_distance_m: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_distance_m: 1e-6,
        }
    }
}

/// Result of validating a whole trajectory
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether every sample passed
    pub valid: bool,
    /// All rejections, in sample order
    pub errors: Vec<ValidationError>,
    /// Number of samples inspected
    pub samples_checked: usize,
}

impl ValidationResult {
    /// First rejection, if any
    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Convert into `Err` carrying the first rejection
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Validator for recorded pose samples
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Check one sample
    pub fn validate_sample(&self, index: usize, sample: &PoseSample) -> Result<(), ValidationError> {
        for (field, value) in sample.fields() {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { index, field });
            }
        }

        let distance = sample.planar_distance();
        if distance < self.config.min_distance_m {
            return Err(ValidationError::DegenerateGeometry {
                index,
                distance,
                min_distance: self.config.min_distance_m,
            });
        }

        Ok(())
    }

    /// Check every sample, collecting all rejections
    pub fn validate_trajectory(&self, trajectory: &Trajectory) -> ValidationResult {
        let errors: Vec<ValidationError> = trajectory
            .iter()
            .enumerate()
            .filter_map(|(index, sample)| self.validate_sample(index, sample).err())
            .collect();

        if !errors.is_empty() {
            warn!(
                "Rejected {} of {} pose samples (first: {})",
                errors.len(),
                trajectory.len(),
                errors[0]
            );
        }

        ValidationResult {
            valid: errors.is_empty(),
            errors,
            samples_checked: trajectory.len(),
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
