//! Momentum indicators.

use dashboard_core::error::IndicatorError;
use dashboard_core::traits::Indicator;
use serde::{Deserialize, Serialize};

use crate::moving_average::{compute_ema, ema_from_seed};

/// Default RSI period.
pub const RSI_PERIOD: usize = 14;
/// RSI level at or above which a stock is overbought.
pub const RSI_OVERBOUGHT: f64 = 70.0;
/// RSI level at or below which a stock is oversold.
pub const RSI_OVERSOLD: f64 = 30.0;

/// Fast EMA period of the MACD line.
pub const MACD_FAST_PERIOD: usize = 12;
/// Slow EMA period of the MACD line.
pub const MACD_SLOW_PERIOD: usize = 26;
/// Nominal EMA period of the signal line.
pub const MACD_SIGNAL_PERIOD: usize = 9;

/// Relative strength over the first `period` prices.
///
/// Gains and losses are summed over the `period - 1` deltas inside the
/// window and averaged over `period`. Zero average loss saturates to 100.
pub fn compute_rsi(series: &[f64], period: usize) -> Result<f64, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidParameter(
            "RSI period must be greater than 0".into(),
        ));
    }
    if series.len() < period {
        return Err(IndicatorError::InsufficientData {
            required: period,
            available: series.len(),
        });
    }

    let (gains, losses) = series[..period]
        .windows(2)
        .fold((0.0, 0.0), |(gains, losses), w| {
            let difference = w[1] - w[0];
            if difference >= 0.0 {
                (gains + difference, losses)
            } else {
                (gains, losses - difference)
            }
        });

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;
    if avg_loss == 0.0 {
        return Ok(100.0);
    }

    let rs = avg_gain / avg_loss;
    Ok(100.0 - (100.0 / (1.0 + rs)))
}

/// Relative Strength Index (RSI).
///
/// Measures the speed and magnitude of price changes
/// to evaluate overbought or oversold conditions.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Create a new RSI indicator.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Default for Rsi {
    fn default() -> Self {
        Self::new(RSI_PERIOD)
    }
}

impl Indicator for Rsi {
    type Output = f64;

    fn compute(&self, data: &[f64]) -> Result<f64, IndicatorError> {
        compute_rsi(data, self.period)
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "RSI"
    }
}

/// Signal line for a single MACD value.
///
/// This is the EMA of the one-element sequence `[macd]`: the seed is the only
/// point, so the result is always `macd` itself. A signal line built from a
/// MACD history would replace this path.
pub fn degenerate_signal(macd: f64) -> f64 {
    ema_from_seed(macd, &[], MACD_SIGNAL_PERIOD)
}

/// MACD (Moving Average Convergence Divergence) output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdOutput {
    /// MACD line (fast EMA - slow EMA)
    pub macd: f64,
    /// Signal line, see [`degenerate_signal`]
    pub signal: f64,
    /// Histogram (MACD - Signal)
    pub histogram: f64,
}

impl MacdOutput {
    /// `|histogram| / signal * 100`, or `0.0` when the signal line is zero.
    pub fn strength(&self) -> f64 {
        if self.signal == 0.0 {
            0.0
        } else {
            self.histogram.abs() / self.signal * 100.0
        }
    }
}

/// MACD indicator over anchored fast and slow EMAs.
#[derive(Debug, Clone)]
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
}

impl Macd {
    /// Create a new MACD with default parameters (12, 26).
    pub fn new() -> Self {
        Self {
            fast_period: MACD_FAST_PERIOD,
            slow_period: MACD_SLOW_PERIOD,
        }
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self::new()
    }
}

impl Indicator for Macd {
    type Output = MacdOutput;

    fn compute(&self, data: &[f64]) -> Result<MacdOutput, IndicatorError> {
        self.validate_data(data)?;

        let fast = compute_ema(data, self.fast_period)?;
        let slow = compute_ema(data, self.slow_period)?;
        let macd = fast - slow;
        let signal = degenerate_signal(macd);

        Ok(MacdOutput {
            macd,
            signal,
            histogram: macd - signal,
        })
    }

    fn lookback(&self) -> usize {
        self.slow_period
    }

    fn name(&self) -> &str {
        "MACD"
    }
}

/// MACD with default periods over the leading prices of `series`.
pub fn compute_macd(series: &[f64]) -> Result<MacdOutput, IndicatorError> {
    Macd::new().compute(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_all_gains() {
        let data: Vec<f64> = (10..40).map(|p| p as f64).collect();
        assert_eq!(compute_rsi(&data, RSI_PERIOD).unwrap(), 100.0);
    }

    #[test]
    fn test_rsi_all_losses() {
        let data: Vec<f64> = (10..40).rev().map(|p| p as f64).collect();
        assert!(compute_rsi(&data, RSI_PERIOD).unwrap().abs() < 1e-10);
    }

    #[test]
    fn test_rsi_flat_saturates() {
        let data = vec![50.0; 14];
        assert_eq!(compute_rsi(&data, RSI_PERIOD).unwrap(), 100.0);
    }

    #[test]
    fn test_rsi_mixed() {
        // 7 gains of 1 and 6 losses of 1: rs = 7/6, rsi = 100 - 600/13
        let data: Vec<f64> = (0..14).map(|i| if i % 2 == 0 { 1.0 } else { 2.0 }).collect();
        let rsi = compute_rsi(&data, RSI_PERIOD).unwrap();

        assert!((rsi - (100.0 - 600.0 / 13.0)).abs() < 1e-10);
    }

    #[test]
    fn test_rsi_ignores_points_past_window() {
        let mut data: Vec<f64> = (0..14).map(|p| p as f64).collect();
        data.extend([0.0, -50.0, -100.0]);

        assert_eq!(compute_rsi(&data, RSI_PERIOD).unwrap(), 100.0);
    }

    #[test]
    fn test_rsi_insufficient_data() {
        assert_eq!(
            Rsi::default().compute(&[1.0, 2.0]),
            Err(IndicatorError::InsufficientData {
                required: 14,
                available: 2
            })
        );
    }

    #[test]
    fn test_degenerate_signal_is_identity() {
        for macd in [-7.95, 0.0, 0.125, 310.5] {
            assert_eq!(degenerate_signal(macd), macd);
        }
    }

    #[test]
    fn test_macd_signal_equals_line() {
        let data: Vec<f64> = (0..30)
            .map(|i| 100.0 + (i as f64 * 0.5).sin() * 5.0)
            .collect();
        let output = compute_macd(&data).unwrap();

        assert_eq!(output.signal, output.macd);
        assert_eq!(output.histogram, 0.0);
    }

    #[test]
    fn test_macd_ramp() {
        let data: Vec<f64> = (10..40).map(|p| p as f64).collect();
        let output = compute_macd(&data).unwrap();

        assert!((output.macd - (16.375599189437338 - 24.325223811411423)).abs() < 1e-9);
        assert_eq!(output.strength(), 0.0);
    }

    #[test]
    fn test_macd_strength_guard() {
        let flat = MacdOutput {
            macd: 0.0,
            signal: 0.0,
            histogram: 0.0,
        };
        assert_eq!(flat.strength(), 0.0);

        let diverged = MacdOutput {
            macd: 3.0,
            signal: 2.0,
            histogram: 1.0,
        };
        assert!((diverged.strength() - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_macd_insufficient_data() {
        let data: Vec<f64> = (0..20).map(|p| p as f64).collect();

        assert_eq!(
            compute_macd(&data),
            Err(IndicatorError::InsufficientData {
                required: 26,
                available: 20
            })
        );
    }
}
