//! Collision warning analysis results

use crate::scenario::Scenario;
use crate::severity::SeverityLevel;
use serde::{Deserialize, Serialize};
use signal_engine::DerivedSignals;

/// Severity time series of one run, with the signals it was derived from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningAnalysis {
    /// Scenario the run was evaluated against
    pub scenario: Scenario,

    /// One level per pose sample, in sample order
    pub severities: Vec<SeverityLevel>,

    /// Derived per-sample signals
    pub signals: DerivedSignals,
}

impl WarningAnalysis {
    /// Highest level reached during the run
    pub fn peak_severity(&self) -> SeverityLevel {
        self.severities
            .iter()
            .copied()
            .max()
            .unwrap_or(SeverityLevel::NONE)
    }

    /// Index of the first warning sample
    pub fn first_warning(&self) -> Option<usize> {
        self.severities.iter().position(|level| level.is_warning())
    }

    /// Range at which the first warning was issued (meters)
    pub fn warning_onset_distance(&self) -> Option<f64> {
        self.first_warning()
            .and_then(|index| self.signals.distance.get(index).copied())
    }

    /// Number of samples carrying a warning
    pub fn warning_count(&self) -> usize {
        self.severities.iter().filter(|level| level.is_warning()).count()
    }

    /// Check if any sample reached the imminent level
    pub fn has_imminent_warning(&self) -> bool {
        self.peak_severity() == SeverityLevel::IMMINENT
    }
}
