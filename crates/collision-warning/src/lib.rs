//! Collision Warning Evaluation
//!
//! Offline evaluation of recorded test drives against labeled scenarios:
//! - Derivation of range, bearing and angular width signals
//! - Constant-bearing-decreasing-range gate for straight, curve and crossing scenarios
//! - Lateral clearance gate for turning scenarios
//! - Scenario-calibrated distance buckets mapping to an 8-level severity scale

pub mod analysis;
pub mod classifier;
pub mod config;
pub mod scenario;
pub mod severity;

pub use analysis::WarningAnalysis;
pub use classifier::WarningClassifier;
pub use crate::config::WarningConfig;
pub use scenario::{DecisionRule, Scenario, ScenarioThresholds, ThresholdProfile};
pub use severity::SeverityLevel;

use pose_feed::{read_target_pose, target_pose_path, PoseFeedError, Trajectory};
use signal_engine::{SignalError, SignalExtractor};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};
use trajectory_validator::{ValidationError, Validator};

/// Collision warning error types
#[derive(Error, Debug)]
pub enum CollisionWarningError {
    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),

    #[error("No thresholds configured for scenario {0}")]
    MissingThresholds(Scenario),

    #[error("Invalid thresholds for {scenario}: high_warn_dist {high_warn_dist}, no_warn_dist {no_warn_dist}")]
    InvalidThresholds {
        scenario: Scenario,
        high_warn_dist: f64,
        no_warn_dist: f64,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] ::config::ConfigError),

    #[error("Pose feed error: {0}")]
    PoseFeed(#[from] PoseFeedError),

    #[error("Rejected pose sample: {0}")]
    Validation(#[from] ValidationError),

    #[error("Signal derivation failed: {0}")]
    Signal(#[from] SignalError),

    #[error("Signal {signal} has {actual} samples, expected {expected}")]
    LengthMismatch {
        signal: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Signal {signal} is not finite at sample {index}")]
    NonFiniteSignal { signal: &'static str, index: usize },
}

/// Collision warning evaluation module
pub struct CollisionWarningModule {
    config: WarningConfig,
    validator: Validator,
    extractor: SignalExtractor,
}

impl CollisionWarningModule {
    /// Create a new module, validating the configuration
    pub fn new(config: WarningConfig) -> Result<Self, CollisionWarningError> {
        config.validate()?;
        Ok(Self {
            validator: Validator::new(config.validation.clone()),
            extractor: SignalExtractor::new(config.stride, config.target_dimensions())?,
            config,
        })
    }

    pub fn config(&self) -> &WarningConfig {
        &self.config
    }

    /// Severity of every sample of one run
    pub fn evaluate(
        &self,
        scenario: Scenario,
        trajectory: &Trajectory,
    ) -> Result<WarningAnalysis, CollisionWarningError> {
        let thresholds = self.config.thresholds.get(scenario)?;
        self.validator.validate_trajectory(trajectory).into_result()?;

        let signals = self
            .extractor
            .extract(trajectory, self.config.lateral_margin(scenario))?;

        let (value, threshold): (&[f64], Vec<f64>) = match scenario.decision_rule() {
            DecisionRule::BearingRate => (
                signals.bearing_rate.as_slice(),
                signals
                    .width_rate_threshold
                    .iter()
                    .map(|rate| rate + self.config.bearing_tolerance)
                    .collect(),
            ),
            DecisionRule::LateralClearance => (
                signals.lateral_offset.as_slice(),
                vec![self.config.lateral_collision_offset; signals.len()],
            ),
        };
        debug!("Scenario {} uses {:?} gate", scenario, scenario.decision_rule());

        let classifier = WarningClassifier::new(thresholds);
        let severities = classifier.classify(&signals.distance, value, &threshold)?;

        let analysis = WarningAnalysis {
            scenario,
            severities,
            signals,
        };
        info!(
            "Evaluated {} samples for {}: peak severity {}, {} warning",
            analysis.severities.len(),
            scenario,
            analysis.peak_severity(),
            analysis.warning_count()
        );
        Ok(analysis)
    }

    /// Evaluate with a scenario given by identifier
    pub fn evaluate_named(
        &self,
        scenario: &str,
        trajectory: &Trajectory,
    ) -> Result<WarningAnalysis, CollisionWarningError> {
        self.evaluate(scenario.parse()?, trajectory)
    }

    /// Read `<root>/<scenario>/<NN>/targetpose.csv` and evaluate it
    pub fn evaluate_run(
        &self,
        root: impl AsRef<Path>,
        scenario: Scenario,
        sequence: u32,
    ) -> Result<WarningAnalysis, CollisionWarningError> {
        let path = target_pose_path(root, scenario.as_str(), sequence);
        info!("Evaluating {} sequence {:02}", scenario, sequence);
        let trajectory = read_target_pose(&path)?;
        self.evaluate(scenario, &trajectory)
    }
}

impl Default for CollisionWarningModule {
    fn default() -> Self {
        let config = WarningConfig::default();
        Self {
            validator: Validator::new(config.validation.clone()),
            extractor: SignalExtractor::default(),
            config,
        }
    }
}
