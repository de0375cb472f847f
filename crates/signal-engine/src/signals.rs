//! Derived Signal Assembly

use crate::geometry::{derive_geometry, GeometrySignals, TargetDimensions};
use crate::rate::{rate_of_change, DEFAULT_STRIDE};
use crate::SignalError;
use pose_feed::Trajectory;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Every per-sample signal the warning classifier may consume
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedSignals {
    /// Range to target (meters)
    pub distance: Vec<f64>,
    /// Absolute lateral position (meters)
    pub lateral_offset: Vec<f64>,
    /// Bearing from dead-ahead (radians)
    pub bearing: Vec<f64>,
    /// Projected target width (meters)
    pub object_angular_width: Vec<f64>,
    /// Absolute bearing change over one stride (radians)
    pub bearing_rate: Vec<f64>,
    /// Change of the target's angular extent over one stride (radians)
    pub width_rate_threshold: Vec<f64>,
}

impl DerivedSignals {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.distance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distance.is_empty()
    }
}

/// Derives geometry and rate signals from a trajectory
#[derive(Debug, Clone)]
pub struct SignalExtractor {
    stride: usize,
    target: TargetDimensions,
}

impl SignalExtractor {
    /// Create a new extractor
    pub fn new(stride: usize, target: TargetDimensions) -> Result<Self, SignalError> {
        if stride == 0 {
            return Err(SignalError::InvalidStride);
        }
        Ok(Self { stride, target })
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Compute all signals. `lateral_margin` widens the target's footprint
    /// before the width-rate reference is taken.
    pub fn extract(
        &self,
        trajectory: &Trajectory,
        lateral_margin: f64,
    ) -> Result<DerivedSignals, SignalError> {
        let GeometrySignals {
            distance,
            lateral_offset,
            bearing,
            object_angular_width,
        } = derive_geometry(trajectory, &self.target);

        let bearing_rate: Vec<f64> = rate_of_change(&bearing, self.stride)?
            .into_iter()
            .map(f64::abs)
            .collect();

        let angular_extent: Vec<f64> = object_angular_width
            .iter()
            .zip(&distance)
            .map(|(width, dist)| (width + lateral_margin).atan2(*dist))
            .collect();
        let width_rate_threshold = rate_of_change(&angular_extent, self.stride)?;

        debug!(
            "Derived signals for {} samples (stride {}, margin {:.3} m)",
            distance.len(),
            self.stride,
            lateral_margin
        );

        Ok(DerivedSignals {
            distance,
            lateral_offset,
            bearing,
            object_angular_width,
            bearing_rate,
            width_rate_threshold,
        })
    }
}

impl Default for SignalExtractor {
    fn default() -> Self {
        Self {
            stride: DEFAULT_STRIDE,
            target: TargetDimensions::default(),
        }
    }
}
