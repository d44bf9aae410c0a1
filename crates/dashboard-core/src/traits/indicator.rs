//! Indicator trait definitions.

use crate::error::IndicatorError;

/// Trait for anchored technical indicators.
///
/// An anchored indicator reduces a fixed-offset prefix of the input (the
/// first `lookback()` points) to a single value. It never slides across the
/// rest of the series.
pub trait Indicator: Send + Sync {
    /// The output type of the indicator.
    type Output;

    /// Compute the indicator over the prefix of `data`.
    ///
    /// # Arguments
    /// * `data` - Closing prices, oldest first
    fn compute(&self, data: &[f64]) -> Result<Self::Output, IndicatorError>;

    /// Get the minimum data points required.
    fn lookback(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;

    /// Validate that there's enough data.
    fn validate_data(&self, data: &[f64]) -> Result<(), IndicatorError> {
        if data.len() < self.lookback() {
            return Err(IndicatorError::InsufficientData {
                required: self.lookback(),
                available: data.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PrefixSum {
        period: usize,
    }

    impl Indicator for PrefixSum {
        type Output = f64;

        fn compute(&self, data: &[f64]) -> Result<f64, IndicatorError> {
            self.validate_data(data)?;
            Ok(data[..self.period].iter().sum())
        }

        fn lookback(&self) -> usize {
            self.period
        }

        fn name(&self) -> &str {
            "test"
        }
    }

    #[test]
    fn test_indicator_validation() {
        let indicator = PrefixSum { period: 5 };

        assert_eq!(
            indicator.validate_data(&[1.0, 2.0, 3.0]),
            Err(IndicatorError::InsufficientData {
                required: 5,
                available: 3
            })
        );
        assert!(indicator.validate_data(&[1.0, 2.0, 3.0, 4.0, 5.0]).is_ok());
    }

    #[test]
    fn test_indicator_uses_prefix_only() {
        let indicator = PrefixSum { period: 3 };
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];

        let result = indicator.compute(&data).unwrap();
        assert!((result - 6.0).abs() < 0.001); // 1+2+3
    }
}
