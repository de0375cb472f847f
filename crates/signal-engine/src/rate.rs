//! Fixed-stride rate of change
//!
//! `rate[i] = a[i + stride] - a[i]`, left-padded with its first value so the
//! output has the input length. No division by elapsed time: the result is
//! a raw change over `stride` samples.

use crate::SignalError;

/// Stride used for bearing and width rates
pub const DEFAULT_STRIDE: usize = 5;

/// Forward difference over `stride` samples, edge-extended at the front
pub fn rate_of_change(values: &[f64], stride: usize) -> Result<Vec<f64>, SignalError> {
    if stride == 0 {
        return Err(SignalError::InvalidStride);
    }
    if values.len() <= stride {
        return Err(SignalError::SequenceTooShort {
            len: values.len(),
            stride,
        });
    }

    let first = values[stride] - values[0];
    let mut rate = Vec::with_capacity(values.len());
    rate.extend(std::iter::repeat(first).take(stride));
    rate.extend(values.iter().zip(&values[stride..]).map(|(a, b)| b - a));

    Ok(rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_linear_ramp() {
        let values: Vec<f64> = (0..10).map(|i| 2.0 * i as f64).collect();
        let rate = rate_of_change(&values, 5).unwrap();
        assert_eq!(rate.len(), 10);
        assert!(rate.iter().all(|&r| r == 10.0));
    }

    #[test]
    fn test_edge_extension() {
        let values = [0.0, 1.0, 4.0, 9.0, 16.0, 25.0, 36.0, 49.0];
        let rate = rate_of_change(&values, 5).unwrap();
        // Computed part: 25-0, 36-1, 49-4
        assert_eq!(rate, vec![25.0, 25.0, 25.0, 25.0, 25.0, 25.0, 35.0, 45.0]);
    }

    #[test]
    fn test_stride_one() {
        let rate = rate_of_change(&[1.0, 3.0, 2.0], 1).unwrap();
        assert_eq!(rate, vec![2.0, 2.0, -1.0]);
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(rate_of_change(&[1.0, 2.0], 0), Err(SignalError::InvalidStride));
        assert_eq!(
            rate_of_change(&[1.0; 5], 5),
            Err(SignalError::SequenceTooShort { len: 5, stride: 5 })
        );
    }

    #[test]
    fn test_nan_propagates() {
        let values = [0.0, 1.0, f64::NAN, 3.0, 4.0];
        let rate = rate_of_change(&values, 1).unwrap();
        assert!(rate[2].is_nan());
        assert!(rate[3].is_nan());
        assert_eq!(rate[4], 1.0);
    }

    proptest! {
        #[test]
        fn prop_first_stride_values_equal_value_at_stride(
            values in prop::collection::vec(-100.0f64..100.0, 6..64)
        ) {
            let rate = rate_of_change(&values, DEFAULT_STRIDE).unwrap();
            prop_assert_eq!(rate.len(), values.len());
            for i in 0..DEFAULT_STRIDE {
                prop_assert_eq!(rate[i], rate[DEFAULT_STRIDE]);
            }
            for i in DEFAULT_STRIDE..values.len() {
                prop_assert_eq!(rate[i], values[i] - values[i - DEFAULT_STRIDE]);
            }
        }
    }
}
