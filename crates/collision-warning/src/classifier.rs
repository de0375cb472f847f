//! Warning level classification
//!
//! A sample warns only when its gate holds (`value <= threshold`); the
//! level is then the distance bucket of the scenario's partition, highest
//! nearest. Classification is sample-wise with no carried state.

use crate::scenario::ScenarioThresholds;
use crate::severity::SeverityLevel;
use crate::CollisionWarningError;
use tracing::debug;

/// Maps gate signals and distances onto severity levels for one scenario
#[derive(Debug, Clone)]
pub struct WarningClassifier {
    /// Ascending partition edges, see `ScenarioThresholds::bucket_edges`
    edges: [f64; 7],
}

impl WarningClassifier {
    pub fn new(thresholds: &ScenarioThresholds) -> Self {
        Self {
            edges: thresholds.bucket_edges(),
        }
    }

    /// Distance bucket for a sample whose gate holds
    pub fn level_for_distance(&self, distance: f64) -> SeverityLevel {
        let passed = self.edges.iter().filter(|&&edge| distance >= edge).count() as u8;
        SeverityLevel::new(SeverityLevel::IMMINENT.value() - passed).unwrap_or(SeverityLevel::NONE)
    }

    /// Severity of a single sample
    pub fn classify_sample(&self, distance: f64, value: f64, threshold: f64) -> SeverityLevel {
        if value <= threshold {
            self.level_for_distance(distance)
        } else {
            SeverityLevel::NONE
        }
    }

    /// Severity of every sample. All three slices must have equal length and
    /// hold only finite values.
    pub fn classify(
        &self,
        distance: &[f64],
        value: &[f64],
        threshold: &[f64],
    ) -> Result<Vec<SeverityLevel>, CollisionWarningError> {
        check_length("value", distance.len(), value.len())?;
        check_length("threshold", distance.len(), threshold.len())?;

        let levels = distance
            .iter()
            .zip(value)
            .zip(threshold)
            .enumerate()
            .map(|(index, ((&d, &v), &t))| {
                for (signal, x) in [("distance", d), ("value", v), ("threshold", t)] {
                    if !x.is_finite() {
                        return Err(CollisionWarningError::NonFiniteSignal { signal, index });
                    }
                }
                Ok(self.classify_sample(d, v, t))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Classified {} samples, {} warning",
            levels.len(),
            levels.iter().filter(|l| l.is_warning()).count()
        );
        Ok(levels)
    }
}

fn check_length(
    signal: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), CollisionWarningError> {
    if expected != actual {
        return Err(CollisionWarningError::LengthMismatch {
            signal,
            expected,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn straight() -> WarningClassifier {
        WarningClassifier::new(&ScenarioThresholds::new(44.0, 88.0))
    }

    fn level(value: u8) -> SeverityLevel {
        SeverityLevel::new(value).unwrap()
    }

    #[test]
    fn test_bucket_table() {
        let classifier = straight();
        // Edges: 22, 33, 44, 55, 66, 77, 88
        let cases = [
            (0.0, 7),
            (21.9, 7),
            (22.0, 6),
            (32.9, 6),
            (33.0, 5),
            (43.9, 5),
            (44.0, 4),
            (54.9, 4),
            (55.0, 3),
            (66.0, 2),
            (77.0, 1),
            (87.9, 1),
            (88.0, 0),
            (500.0, 0),
        ];
        for (distance, expected) in cases {
            assert_eq!(
                classifier.level_for_distance(distance),
                level(expected),
                "distance {}",
                distance
            );
        }
    }

    #[test]
    fn test_straight_examples() {
        let classifier = straight();
        assert_eq!(classifier.classify_sample(20.0, 0.0, 0.001), SeverityLevel::IMMINENT);
        assert_eq!(classifier.classify_sample(90.0, 0.0, 0.001), SeverityLevel::NONE);
        assert_eq!(classifier.classify_sample(90.0, 1.0, 0.001), SeverityLevel::NONE);
    }

    #[test]
    fn test_turn_examples() {
        let classifier = WarningClassifier::new(&ScenarioThresholds::new(11.0, 33.0));
        assert_eq!(classifier.classify_sample(5.0, 2.5, 3.0), SeverityLevel::IMMINENT);
        for distance in [1.0, 5.0, 12.0, 30.0, 40.0] {
            assert_eq!(classifier.classify_sample(distance, 3.5, 3.0), SeverityLevel::NONE);
        }
    }

    #[test]
    fn test_gate_is_inclusive() {
        assert_eq!(straight().classify_sample(44.0, 0.5, 0.5), level(4));
    }

    #[test]
    fn test_length_mismatch() {
        let result = straight().classify(&[10.0, 20.0], &[0.0], &[1.0, 1.0]);
        assert!(matches!(
            result,
            Err(CollisionWarningError::LengthMismatch { signal: "value", expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_non_finite_flagged() {
        let result = straight().classify(&[10.0, f64::NAN], &[0.0, 0.0], &[1.0, 1.0]);
        assert!(matches!(
            result,
            Err(CollisionWarningError::NonFiniteSignal { signal: "distance", index: 1 })
        ));
    }

    #[test]
    fn test_classify_sequence() {
        let levels = straight()
            .classify(&[20.0, 50.0, 80.0, 20.0], &[0.0, 0.0, 0.0, 2.0], &[1.0; 4])
            .unwrap();
        assert_eq!(levels, vec![level(7), level(4), level(1), level(0)]);
    }

    proptest! {
        #[test]
        fn prop_non_increasing_with_distance(
            high in 1.0f64..100.0,
            span in 1.0f64..100.0,
            a in 0.0f64..300.0,
            b in 0.0f64..300.0,
        ) {
            let classifier = WarningClassifier::new(&ScenarioThresholds::new(high, high + span));
            let (near, far) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(classifier.level_for_distance(near) >= classifier.level_for_distance(far));
        }

        #[test]
        fn prop_closed_gate_is_silent(distance in 0.0f64..300.0, excess in 1e-9f64..10.0) {
            let classifier = straight();
            prop_assert_eq!(classifier.classify_sample(distance, 1.0 + excess, 1.0), SeverityLevel::NONE);
        }

        #[test]
        fn prop_calibration_points_exact(high in 1.0f64..100.0, span in 1.0f64..100.0) {
            let classifier = WarningClassifier::new(&ScenarioThresholds::new(high, high + span));
            prop_assert_eq!(classifier.level_for_distance(high), SeverityLevel::new(4).unwrap());
            prop_assert_eq!(classifier.level_for_distance(high + span), SeverityLevel::NONE);
        }
    }
}
