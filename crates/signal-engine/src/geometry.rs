//! Per-sample geometry of the target as seen from the ego

use pose_feed::{PoseSample, Trajectory};
use serde::{Deserialize, Serialize};

/// Footprint of the target vehicle (meters)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetDimensions {
    pub width: f64,
    pub length: f64,
}

impl Default for TargetDimensions {
    fn default() -> Self {
        Self {
            width: 1.73,
            length: 4.00,
        }
    }
}

/// Range from ego to target
pub fn distance(sample: &PoseSample) -> f64 {
    (sample.lateral_position.powi(2) + sample.longitudinal_position.powi(2)).sqrt()
}

pub fn lateral_offset(sample: &PoseSample) -> f64 {
    sample.lateral_position.abs()
}

/// Angle from dead-ahead in `[-π/2, π/2]`. NaN at zero range.
pub fn bearing(sample: &PoseSample) -> f64 {
    (sample.lateral_position / distance(sample)).asin()
}

/// Lateral extent of the rectangular footprint rotated by `yaw`
pub fn projected_width(yaw: f64, width: f64, length: f64) -> f64 {
    yaw.cos() * width + yaw.sin() * length
}

/// Geometry signals, one value per sample
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometrySignals {
    pub distance: Vec<f64>,
    pub lateral_offset: Vec<f64>,
    pub bearing: Vec<f64>,
    pub object_angular_width: Vec<f64>,
}

/// Derive geometry for every sample of the trajectory
pub fn derive_geometry(trajectory: &Trajectory, target: &TargetDimensions) -> GeometrySignals {
    let n = trajectory.len();
    let mut signals = GeometrySignals {
        distance: Vec::with_capacity(n),
        lateral_offset: Vec::with_capacity(n),
        bearing: Vec::with_capacity(n),
        object_angular_width: Vec::with_capacity(n),
    };

    for sample in trajectory {
        signals.distance.push(distance(sample));
        signals.lateral_offset.push(lateral_offset(sample));
        signals.bearing.push(bearing(sample));
        signals
            .object_angular_width
            .push(projected_width(sample.yaw, target.width, target.length));
    }

    signals
}
