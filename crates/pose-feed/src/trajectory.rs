//! Ordered Trajectory Container

use crate::{PoseFeedError, PoseSample};
use serde::Serialize;

/// Immutable, timestamp-ordered sequence of pose samples for one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    samples: Vec<PoseSample>,
}

impl Trajectory {
    /// Take ownership of the samples, checking that timestamps strictly increase
    pub fn new(samples: Vec<PoseSample>) -> Result<Self, PoseFeedError> {
        if samples.is_empty() {
            return Err(PoseFeedError::Empty);
        }

        for (index, pair) in samples.windows(2).enumerate() {
            // Negated so that NaN timestamps are rejected as well
            if !(pair[1].timestamp > pair[0].timestamp) {
                return Err(PoseFeedError::NonMonotonicTimestamp {
                    index: index + 1,
                    previous: pair[0].timestamp,
                    current: pair[1].timestamp,
                });
            }
        }

        Ok(Self { samples })
    }

    /// All samples in timestamp order
    pub fn samples(&self) -> &[PoseSample] {
        &self.samples
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false for a constructed trajectory
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PoseSample> {
        self.samples.iter()
    }

    /// Extract one field per sample
    pub fn column<F>(&self, field: F) -> Vec<f64>
    where
        F: Fn(&PoseSample) -> f64,
    {
        self.samples.iter().map(field).collect()
    }

    pub fn timestamps(&self) -> Vec<f64> {
        self.column(|s| s.timestamp)
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a PoseSample;
    type IntoIter = std::slice::Iter<'a, PoseSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
