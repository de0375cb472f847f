//! Collision warning configuration

use crate::scenario::{Scenario, ThresholdProfile};
use crate::CollisionWarningError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use signal_engine::{TargetDimensions, DEFAULT_STRIDE};
use std::path::Path;
use tracing::info;
use trajectory_validator::ValidationConfig;

/// Prefix of environment overrides, e.g. `COLLWARN__BEARING_TOLERANCE`
pub const ENV_PREFIX: &str = "COLLWARN";

/// Collision warning configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarningConfig {
    /// Samples spanned by one rate step
    pub stride: usize,

    /// Angular noise allowance added to the width-rate reference (radians)
    pub bearing_tolerance: f64,

    /// Ego vehicle width (meters)
    pub ego_width: f64,

    /// Target vehicle footprint (meters)
    pub target_width: f64,
    pub target_length: f64,

    /// Share of the ego width added as lateral margin where the scenario asks for it
    pub lateral_safety_factor: f64,

    /// Lateral offset below which a turning target is on collision course (meters)
    pub lateral_collision_offset: f64,

    /// Calibration distances per scenario
    pub thresholds: ThresholdProfile,

    /// Pose sample sanity checks
    pub validation: ValidationConfig,
}

impl Default for WarningConfig {
    fn default() -> Self {
        Self {
            stride: DEFAULT_STRIDE,
            bearing_tolerance: 0.00025,
            ego_width: 1.92,
            target_width: 1.73,
            target_length: 4.00,
            lateral_safety_factor: 0.9,
            lateral_collision_offset: 3.0,
            thresholds: ThresholdProfile::default(),
            validation: ValidationConfig::default(),
        }
    }
}

impl WarningConfig {
    /// Layer a config file and `COLLWARN__*` environment variables over the defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CollisionWarningError> {
        let path = path.as_ref();
        let config = Config::builder()
            .add_source(Config::try_from(&WarningConfig::default())?)
            .add_source(File::from(path))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize::<WarningConfig>()?;

        config.validate()?;
        info!("Loaded warning configuration from {}", path.display());
        Ok(config)
    }

    pub fn target_dimensions(&self) -> TargetDimensions {
        TargetDimensions {
            width: self.target_width,
            length: self.target_length,
        }
    }

    /// Lateral margin added to the target footprint for a scenario (meters)
    pub fn lateral_margin(&self, scenario: Scenario) -> f64 {
        if scenario.uses_lateral_margin() {
            self.lateral_safety_factor * self.ego_width
        } else {
            0.0
        }
    }

    /// Reject configurations that cannot produce a meaningful classification
    pub fn validate(&self) -> Result<(), CollisionWarningError> {
        if self.stride == 0 {
            return Err(CollisionWarningError::Config("stride must be at least 1".into()));
        }
        let positive = [
            ("ego_width", self.ego_width),
            ("target_width", self.target_width),
            ("target_length", self.target_length),
            ("lateral_collision_offset", self.lateral_collision_offset),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(CollisionWarningError::Config(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if !(self.bearing_tolerance >= 0.0) || !(self.lateral_safety_factor >= 0.0) {
            return Err(CollisionWarningError::Config(
                "bearing_tolerance and lateral_safety_factor must be non-negative".into(),
            ));
        }
        self.thresholds.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = WarningConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.stride, 5);
        assert_eq!(config.lateral_collision_offset, 3.0);
    }

    #[test]
    fn test_lateral_margin_only_for_right_curves() {
        let config = WarningConfig::default();
        assert!((config.lateral_margin(Scenario::CurveRight) - 1.728).abs() < 1e-12);
        assert_eq!(config.lateral_margin(Scenario::CurveLeft), 0.0);
        assert_eq!(config.lateral_margin(Scenario::Straight), 0.0);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = WarningConfig {
            stride: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = WarningConfig {
            ego_width: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = WarningConfig {
            bearing_tolerance: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_overrides_file_values() {
        let path = std::env::temp_dir().join(format!("collwarn-config-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "stride = 3\nbearing_tolerance = 0.0005\n\n[thresholds.straight]\nhigh_warn_dist = 40.0\nno_warn_dist = 80.0"
        )
        .unwrap();
        drop(file);

        let config = WarningConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.stride, 3);
        assert_eq!(config.bearing_tolerance, 0.0005);
        assert_eq!(config.ego_width, 1.92);
        let straight = config.thresholds.get(Scenario::Straight).unwrap();
        assert_eq!(straight.high_warn_dist, 40.0);
        assert_eq!(straight.no_warn_dist, 80.0);
        // Untouched scenarios keep their calibration
        assert_eq!(
            config.thresholds.get(Scenario::Turn).unwrap().no_warn_dist,
            33.0
        );
    }

    #[test]
    fn test_load_rejects_invalid_thresholds() {
        let path = std::env::temp_dir().join(format!("collwarn-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "[thresholds.turn]\nhigh_warn_dist = 30.0\nno_warn_dist = 10.0\n").unwrap();

        let result = WarningConfig::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(
            result,
            Err(CollisionWarningError::InvalidThresholds { scenario: Scenario::Turn, .. })
        ));
    }
}
