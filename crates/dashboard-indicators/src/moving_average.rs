//! Moving average indicators.
//!
//! Both averages are anchored: they reduce the first `period` points of the
//! slice they are given, never a trailing window. Callers pick the prefix.

use dashboard_core::error::IndicatorError;
use dashboard_core::traits::Indicator;

/// Period of the short chart overlay.
pub const OVERLAY_SHORT_PERIOD: usize = 20;
/// Period of the long chart overlay.
pub const OVERLAY_LONG_PERIOD: usize = 50;

/// Arithmetic mean of the first `period` elements of `series`.
pub fn compute_sma(series: &[f64], period: usize) -> Result<f64, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidParameter(
            "SMA period must be greater than 0".into(),
        ));
    }
    if series.len() < period {
        return Err(IndicatorError::InsufficientData {
            required: period,
            available: series.len(),
        });
    }

    Ok(series[..period].iter().sum::<f64>() / period as f64)
}

/// Exponential average seeded with `series[0]` over at most `period` points.
///
/// A series shorter than `period` is consumed to its end, so a one-element
/// series returns that element unchanged.
pub fn compute_ema(series: &[f64], period: usize) -> Result<f64, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidParameter(
            "EMA period must be greater than 0".into(),
        ));
    }
    let (&seed, rest) = series
        .split_first()
        .ok_or(IndicatorError::InsufficientData {
            required: 1,
            available: 0,
        })?;

    Ok(ema_from_seed(seed, rest, period))
}

/// EMA recurrence over `seed` followed by the first `period - 1` of `rest`.
pub(crate) fn ema_from_seed(seed: f64, rest: &[f64], period: usize) -> f64 {
    let multiplier = 2.0 / (period as f64 + 1.0);

    rest.iter()
        .take(period.saturating_sub(1))
        .fold(seed, |ema, &price| (price - ema) * multiplier + ema)
}

/// Trailing rolling SMA for chart overlays.
///
/// The first `period - 1` positions have no value. Each window is summed
/// afresh, so values do not accumulate drift.
pub fn sma_overlay(closes: &[f64], period: usize) -> Result<Vec<Option<f64>>, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidParameter(
            "Overlay period must be greater than 0".into(),
        ));
    }

    let mut result = vec![None; closes.len().min(period - 1)];
    result.extend(
        closes
            .windows(period)
            .map(|w| Some(w.iter().sum::<f64>() / period as f64)),
    );

    Ok(result)
}

/// Simple Moving Average (SMA) over the leading `period` prices.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    /// Create a new SMA with the specified period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Sma {
    type Output = f64;

    fn compute(&self, data: &[f64]) -> Result<f64, IndicatorError> {
        compute_sma(data, self.period)
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "SMA"
    }
}

/// Exponential Moving Average (EMA) over the leading `period` prices.
///
/// Unlike [`compute_ema`], this requires the full `period` points to be
/// present.
#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
}

impl Ema {
    /// Create a new EMA with the specified period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Ema {
    type Output = f64;

    fn compute(&self, data: &[f64]) -> Result<f64, IndicatorError> {
        self.validate_data(data)?;
        compute_ema(data, self.period)
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "EMA"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> Vec<f64> {
        (10..40).map(|p| p as f64).collect()
    }

    #[test]
    fn test_sma_uses_leading_window() {
        let prices = ramp();

        assert!((compute_sma(&prices, 10).unwrap() - 14.5).abs() < 1e-10);
        assert!((compute_sma(&prices, 20).unwrap() - 19.5).abs() < 1e-10);
    }

    #[test]
    fn test_sma_exact_mean() {
        let data = vec![1.5, 2.25, 3.0, 100.0];
        let expected = (1.5 + 2.25 + 3.0) / 3.0;

        assert_eq!(compute_sma(&data, 3).unwrap(), expected);
    }

    #[test]
    fn test_sma_invalid_inputs() {
        assert_eq!(
            compute_sma(&[1.0, 2.0, 3.0], 5),
            Err(IndicatorError::InsufficientData {
                required: 5,
                available: 3
            })
        );
        assert!(matches!(
            compute_sma(&[1.0], 0),
            Err(IndicatorError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_ema() {
        // mult = 2/(3+1) = 0.5
        // 1 -> (2-1)*0.5+1 = 1.5 -> (3-1.5)*0.5+1.5 = 2.25
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];

        assert!((compute_ema(&data, 3).unwrap() - 2.25).abs() < 1e-10);
    }

    #[test]
    fn test_ema_single_element_is_seed() {
        assert_eq!(compute_ema(&[42.5], 9).unwrap(), 42.5);
        assert_eq!(compute_ema(&[-3.25], 26).unwrap(), -3.25);
    }

    #[test]
    fn test_ema_period_one_is_first_price() {
        assert_eq!(compute_ema(&[7.0, 8.0, 9.0], 1).unwrap(), 7.0);
    }

    #[test]
    fn test_ema_empty_series() {
        assert_eq!(
            compute_ema(&[], 12),
            Err(IndicatorError::InsufficientData {
                required: 1,
                available: 0
            })
        );
    }

    #[test]
    fn test_ema_ramp_values() {
        let prices = ramp();

        assert!((compute_ema(&prices, 12).unwrap() - 16.375599189437338).abs() < 1e-9);
        assert!((compute_ema(&prices, 26).unwrap() - 24.325223811411423).abs() < 1e-9);
    }

    #[test]
    fn test_ema_indicator_requires_full_period() {
        let ema = Ema::new(26);
        let short: Vec<f64> = (0..12).map(|p| p as f64).collect();

        assert_eq!(
            ema.compute(&short),
            Err(IndicatorError::InsufficientData {
                required: 26,
                available: 12
            })
        );
    }

    #[test]
    fn test_sma_indicator() {
        let sma = Sma::new(3);

        assert_eq!(sma.name(), "SMA");
        assert_eq!(sma.lookback(), 3);
        assert!((sma.compute(&[1.0, 2.0, 3.0, 4.0]).unwrap() - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_sma_overlay_padding() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let overlay = sma_overlay(&data, 3).unwrap();

        assert_eq!(overlay.len(), data.len());
        assert_eq!(overlay[0], None);
        assert_eq!(overlay[1], None);
        assert!((overlay[2].unwrap() - 2.0).abs() < 1e-10);
        assert!((overlay[4].unwrap() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_sma_overlay_longer_than_series() {
        let data = ramp();
        let overlay = sma_overlay(&data, OVERLAY_LONG_PERIOD).unwrap();

        assert_eq!(overlay.len(), 30);
        assert!(overlay.iter().all(Option::is_none));
    }
}
