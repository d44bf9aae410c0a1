//! Trend prediction over a chronological price series.

use dashboard_core::error::IndicatorError;
use dashboard_core::traits::Indicator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::momentum::{Macd, Rsi, RSI_OVERBOUGHT, RSI_OVERSOLD, RSI_PERIOD};
use crate::moving_average::{Ema, Sma};

/// Short and long SMA periods compared by [`predict_using_sma`].
pub const SMA_PERIODS: (usize, usize) = (10, 20);
/// Short and long EMA periods compared by [`predict_using_ema`].
pub const EMA_PERIODS: (usize, usize) = (12, 26);

/// Technical-analysis method used to predict a trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PredictionMethod {
    #[default]
    Sma,
    Ema,
    Rsi,
    Macd,
}

impl PredictionMethod {
    /// Minimum number of prices the method needs.
    pub fn lookback(&self) -> usize {
        match self {
            PredictionMethod::Sma => SMA_PERIODS.1,
            PredictionMethod::Ema => EMA_PERIODS.1,
            PredictionMethod::Rsi => RSI_PERIOD,
            PredictionMethod::Macd => Macd::new().lookback(),
        }
    }

    /// Lowercase identifier, as accepted by `from_str`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionMethod::Sma => "sma",
            PredictionMethod::Ema => "ema",
            PredictionMethod::Rsi => "rsi",
            PredictionMethod::Macd => "macd",
        }
    }

    /// Get all available methods.
    pub fn all() -> &'static [PredictionMethod] {
        &[
            PredictionMethod::Sma,
            PredictionMethod::Ema,
            PredictionMethod::Rsi,
            PredictionMethod::Macd,
        ]
    }
}

impl fmt::Display for PredictionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

impl FromStr for PredictionMethod {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sma" => Ok(PredictionMethod::Sma),
            "ema" => Ok(PredictionMethod::Ema),
            "rsi" => Ok(PredictionMethod::Rsi),
            "macd" => Ok(PredictionMethod::Macd),
            _ => Err(IndicatorError::UnknownMethod(s.to_string())),
        }
    }
}

/// Predicted trend direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    Upward,
    Downward,
    #[serde(rename = "Downward (Overbought)")]
    DownwardOverbought,
    #[serde(rename = "Upward (Oversold)")]
    UpwardOversold,
    #[serde(rename = "Slightly Upward")]
    SlightlyUpward,
    #[serde(rename = "Slightly Downward")]
    SlightlyDownward,
}

impl Trend {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Upward => "Upward",
            Trend::Downward => "Downward",
            Trend::DownwardOverbought => "Downward (Overbought)",
            Trend::UpwardOversold => "Upward (Oversold)",
            Trend::SlightlyUpward => "Slightly Upward",
            Trend::SlightlyDownward => "Slightly Downward",
        }
    }

    /// Classify an RSI reading.
    pub fn from_rsi(rsi: f64) -> Self {
        if rsi >= RSI_OVERBOUGHT {
            Trend::DownwardOverbought
        } else if rsi <= RSI_OVERSOLD {
            Trend::UpwardOversold
        } else if rsi > 50.0 {
            Trend::SlightlyUpward
        } else {
            Trend::SlightlyDownward
        }
    }

    fn crossover(short: f64, long: f64) -> Self {
        if short > long {
            Trend::Upward
        } else {
            Trend::Downward
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a metric value is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricUnit {
    /// Two decimals, e.g. `14.50`
    Price,
    /// Two decimals with a percent sign, e.g. `25.64%`
    Percent,
    /// Two decimals without a unit, for oscillator readings, e.g. `65.38`
    Oscillator,
    /// Whole number, e.g. `70`
    Level,
}

/// A named value supporting a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    pub value: f64,
    pub unit: MetricUnit,
    pub description: String,
}

impl Metric {
    fn new(name: &str, value: f64, unit: MetricUnit, description: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value,
            unit,
            description: description.into(),
        }
    }

    /// Value rounded for display.
    pub fn formatted_value(&self) -> String {
        match self.unit {
            MetricUnit::Price => format!("{:.2}", self.value),
            MetricUnit::Percent => format!("{:.2}%", self.value),
            MetricUnit::Oscillator => format!("{:.2}", self.value),
            MetricUnit::Level => format!("{:.0}", self.value),
        }
    }
}

/// Outcome of a trend prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorResult {
    pub trend: Trend,
    pub details: String,
    pub metrics: Vec<Metric>,
}

/// Predict a trend from closing prices, oldest first.
pub fn predict_trend(
    series: &[f64],
    method: PredictionMethod,
) -> Result<IndicatorResult, IndicatorError> {
    match method {
        PredictionMethod::Sma => predict_using_sma(series),
        PredictionMethod::Ema => predict_using_ema(series),
        PredictionMethod::Rsi => predict_using_rsi(series),
        PredictionMethod::Macd => predict_using_macd(series),
    }
}

/// Gap between the averages in percent of the long one; 0 when it is 0.
fn strength(short: f64, long: f64) -> f64 {
    if long == 0.0 {
        return 0.0;
    }
    (short - long).abs() / long * 100.0
}

/// Compare the leading 10- and 20-price SMAs.
pub fn predict_using_sma(series: &[f64]) -> Result<IndicatorResult, IndicatorError> {
    let (short_period, long_period) = SMA_PERIODS;
    let short = Sma::new(short_period).compute(series)?;
    let long = Sma::new(long_period).compute(series)?;

    Ok(IndicatorResult {
        trend: Trend::crossover(short, long),
        details: format!(
            "The {short_period}-day SMA is {short:.2} and the {long_period}-day SMA is {long:.2}"
        ),
        metrics: vec![
            Metric::new(
                "Short-term SMA",
                short,
                MetricUnit::Price,
                format!("{short_period}-day moving average"),
            ),
            Metric::new(
                "Long-term SMA",
                long,
                MetricUnit::Price,
                format!("{long_period}-day moving average"),
            ),
            Metric::new(
                "Trend Strength",
                strength(short, long),
                MetricUnit::Percent,
                "Difference between SMAs",
            ),
        ],
    })
}

/// Compare the leading 12- and 26-price EMAs.
pub fn predict_using_ema(series: &[f64]) -> Result<IndicatorResult, IndicatorError> {
    let (short_period, long_period) = EMA_PERIODS;
    let short = Ema::new(short_period).compute(series)?;
    let long = Ema::new(long_period).compute(series)?;

    Ok(IndicatorResult {
        trend: Trend::crossover(short, long),
        details: format!(
            "The {short_period}-day EMA is {short:.2} and the {long_period}-day EMA is {long:.2}"
        ),
        metrics: vec![
            Metric::new(
                "Short-term EMA",
                short,
                MetricUnit::Price,
                format!("{short_period}-day exponential average"),
            ),
            Metric::new(
                "Long-term EMA",
                long,
                MetricUnit::Price,
                format!("{long_period}-day exponential average"),
            ),
            Metric::new(
                "Trend Strength",
                strength(short, long),
                MetricUnit::Percent,
                "Difference between EMAs",
            ),
        ],
    })
}

/// Classify the 14-price RSI against the overbought/oversold bands.
pub fn predict_using_rsi(series: &[f64]) -> Result<IndicatorResult, IndicatorError> {
    let rsi = Rsi::new(RSI_PERIOD).compute(series)?;

    Ok(IndicatorResult {
        trend: Trend::from_rsi(rsi),
        details: format!("The {RSI_PERIOD}-day RSI value is {rsi:.2}"),
        metrics: vec![
            Metric::new(
                "RSI Value",
                rsi,
                MetricUnit::Oscillator,
                format!("{RSI_PERIOD}-day relative strength"),
            ),
            Metric::new(
                "Overbought Level",
                RSI_OVERBOUGHT,
                MetricUnit::Level,
                "Upper threshold",
            ),
            Metric::new(
                "Oversold Level",
                RSI_OVERSOLD,
                MetricUnit::Level,
                "Lower threshold",
            ),
        ],
    })
}

/// Compare the MACD line with its signal line.
pub fn predict_using_macd(series: &[f64]) -> Result<IndicatorResult, IndicatorError> {
    let output = Macd::new().compute(series)?;
    let trend = Trend::crossover(output.macd, output.signal);

    Ok(IndicatorResult {
        trend,
        details: format!(
            "MACD ({:.2}) {} trend with signal line at {:.2}",
            output.macd,
            trend.label().to_lowercase(),
            output.signal
        ),
        metrics: vec![
            Metric::new(
                "MACD Line",
                output.macd,
                MetricUnit::Price,
                "Moving Average Convergence Divergence",
            ),
            Metric::new(
                "Signal Line",
                output.signal,
                MetricUnit::Price,
                "9-day EMA of MACD",
            ),
            Metric::new(
                "Histogram",
                output.histogram,
                MetricUnit::Price,
                "MACD - Signal",
            ),
        ],
    })
}
