//! Target Pose Feed
//!
//! Recorded poses of one target vehicle relative to the ego vehicle, as
//! captured during a single test run.

mod error;
mod reader;
mod trajectory;

pub use error::PoseFeedError;
pub use reader::{parse_target_pose, read_target_pose, target_pose_path, TARGET_POSE_FILE};
pub use trajectory::Trajectory;

use serde::{Deserialize, Serialize};

/// One recorded instant of the target pose, in the ego's local ground frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseSample {
    pub timestamp: f64,
    /// Lateral position of the target (meters)
    pub lateral_position: f64,
    /// Longitudinal position of the target (meters)
    pub longitudinal_position: f64,
    pub vertical_offset: f64,
    /// Target heading relative to the ego (radians)
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
}

impl PoseSample {
    /// Ground-plane distance between ego and target
    pub fn planar_distance(&self) -> f64 {
        self.lateral_position.hypot(self.longitudinal_position)
    }

    /// Fields in table column order
    pub fn fields(&self) -> [(&'static str, f64); 7] {
        [
            ("timestamp", self.timestamp),
            ("lateral_position", self.lateral_position),
            ("longitudinal_position", self.longitudinal_position),
            ("vertical_offset", self.vertical_offset),
            ("yaw", self.yaw),
            ("pitch", self.pitch),
            ("roll", self.roll),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planar_distance() {
        let sample = PoseSample {
            lateral_position: 3.0,
            longitudinal_position: -4.0,
            vertical_offset: 12.0,
            ..Default::default()
        };
        assert!((sample.planar_distance() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_fields_order() {
        let sample = PoseSample {
            timestamp: 1.0,
            yaw: 0.5,
            ..Default::default()
        };
        let fields = sample.fields();
        assert_eq!(fields[0], ("timestamp", 1.0));
        assert_eq!(fields[4], ("yaw", 0.5));
    }
}
