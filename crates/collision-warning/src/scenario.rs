//! Test scenarios and their calibration distances

use crate::CollisionWarningError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Labeled driving scenario of a test run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Straight,
    CurveLeft,
    CurveRight,
    Cross1,
    Cross2,
    Cross3,
    Cross4,
    Turn,
}

/// Which per-sample signal pair gates the warning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionRule {
    /// Bearing rate against the width-rate reference (constant bearing, decreasing range)
    BearingRate,
    /// Lateral offset against a fixed clearance; the ego's own heading change
    /// makes bearing rates meaningless while turning
    LateralClearance,
}

impl Scenario {
    pub const ALL: [Scenario; 8] = [
        Scenario::Straight,
        Scenario::CurveLeft,
        Scenario::CurveRight,
        Scenario::Cross1,
        Scenario::Cross2,
        Scenario::Cross3,
        Scenario::Cross4,
        Scenario::Turn,
    ];

    /// Identifier as used in data directories
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Straight => "straight",
            Scenario::CurveLeft => "curve_left",
            Scenario::CurveRight => "curve_right",
            Scenario::Cross1 => "cross1",
            Scenario::Cross2 => "cross2",
            Scenario::Cross3 => "cross3",
            Scenario::Cross4 => "cross4",
            Scenario::Turn => "turn",
        }
    }

    pub fn decision_rule(&self) -> DecisionRule {
        match self {
            Scenario::Turn => DecisionRule::LateralClearance,
            _ => DecisionRule::BearingRate,
        }
    }

    /// Whether the ego's body width is added to the target footprint.
    /// Only right curves carry the margin; left curves do not.
    pub fn uses_lateral_margin(&self) -> bool {
        matches!(self, Scenario::CurveRight)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = CollisionWarningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .iter()
            .copied()
            .find(|scenario| scenario.as_str() == s)
            .ok_or_else(|| CollisionWarningError::UnknownScenario(s.to_string()))
    }
}

/// Calibration distances of one scenario (meters)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioThresholds {
    /// Escalation onset distance
    pub high_warn_dist: f64,
    /// No warning at or beyond this distance
    pub no_warn_dist: f64,
}

impl ScenarioThresholds {
    pub fn new(high_warn_dist: f64, no_warn_dist: f64) -> Self {
        Self {
            high_warn_dist,
            no_warn_dist,
        }
    }

    /// Linear interpolation between the two calibration distances
    pub fn boundary(&self, alpha: f64) -> f64 {
        self.high_warn_dist + alpha * (self.no_warn_dist - self.high_warn_dist)
    }

    /// Ascending left-closed edges of the severity partition. A distance
    /// below edge 0 maps to level 7, at or beyond edge 6 to level 0.
    pub fn bucket_edges(&self) -> [f64; 7] {
        [
            0.50 * self.high_warn_dist,
            0.75 * self.high_warn_dist,
            self.high_warn_dist,
            self.boundary(0.25),
            self.boundary(0.50),
            self.boundary(0.75),
            self.no_warn_dist,
        ]
    }

    pub fn is_valid(&self) -> bool {
        self.high_warn_dist > 0.0 && self.no_warn_dist > self.high_warn_dist
    }
}

/// Calibration distances for every scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, ScenarioThresholds>",
    into = "BTreeMap<String, ScenarioThresholds>"
)]
pub struct ThresholdProfile {
    thresholds: BTreeMap<Scenario, ScenarioThresholds>,
}

impl ThresholdProfile {
    pub fn new(thresholds: BTreeMap<Scenario, ScenarioThresholds>) -> Self {
        Self { thresholds }
    }

    /// Thresholds for a scenario, failing if the profile has none
    pub fn get(&self, scenario: Scenario) -> Result<&ScenarioThresholds, CollisionWarningError> {
        self.thresholds
            .get(&scenario)
            .ok_or(CollisionWarningError::MissingThresholds(scenario))
    }

    /// Every scenario present with `no_warn_dist > high_warn_dist > 0`
    pub fn validate(&self) -> Result<(), CollisionWarningError> {
        for scenario in Scenario::ALL {
            let thresholds = self.get(scenario)?;
            if !thresholds.is_valid() {
                return Err(CollisionWarningError::InvalidThresholds {
                    scenario,
                    high_warn_dist: thresholds.high_warn_dist,
                    no_warn_dist: thresholds.no_warn_dist,
                });
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Scenario, &ScenarioThresholds)> {
        self.thresholds.iter()
    }
}

// Keyed by identifier so config sources that only hand out string keys work
impl TryFrom<BTreeMap<String, ScenarioThresholds>> for ThresholdProfile {
    type Error = CollisionWarningError;

    fn try_from(raw: BTreeMap<String, ScenarioThresholds>) -> Result<Self, Self::Error> {
        raw.into_iter()
            .map(|(name, thresholds)| name.parse::<Scenario>().map(|s| (s, thresholds)))
            .collect::<Result<BTreeMap<_, _>, _>>()
            .map(Self::new)
    }
}

impl From<ThresholdProfile> for BTreeMap<String, ScenarioThresholds> {
    fn from(profile: ThresholdProfile) -> Self {
        profile
            .thresholds
            .into_iter()
            .map(|(scenario, thresholds)| (scenario.as_str().to_string(), thresholds))
            .collect()
    }
}

impl Default for ThresholdProfile {
    fn default() -> Self {
        let thresholds = [
            (Scenario::Straight, ScenarioThresholds::new(44.0, 44.0 + 44.0)),
            (Scenario::CurveLeft, ScenarioThresholds::new(22.0, 22.0 + 44.0)),
            (Scenario::CurveRight, ScenarioThresholds::new(33.0, 33.0 + 33.0)),
            (Scenario::Cross1, ScenarioThresholds::new(22.0, 22.0 + 22.0)),
            (Scenario::Cross2, ScenarioThresholds::new(22.0, 22.0 + 22.0)),
            (Scenario::Cross3, ScenarioThresholds::new(22.0, 22.0 + 22.0)),
            (Scenario::Cross4, ScenarioThresholds::new(22.0, 22.0 + 22.0)),
            (Scenario::Turn, ScenarioThresholds::new(11.0, 11.0 + 22.0)),
        ];
        Self::new(thresholds.into_iter().collect())
    }
}
