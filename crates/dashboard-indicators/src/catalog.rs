//! Descriptions of the available prediction methods.

use serde::Serialize;

use crate::prediction::PredictionMethod;

/// Human-facing description of a prediction method.
#[derive(Debug, Clone, Serialize)]
pub struct MethodInfo {
    pub method: PredictionMethod,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub best_use: &'static str,
}

impl PredictionMethod {
    /// Get the description of this method.
    pub fn info(&self) -> MethodInfo {
        match self {
            PredictionMethod::Sma => MethodInfo {
                method: *self,
                title: "Simple Moving Average (SMA)",
                description: "A basic trend-following indicator that averages prices over a specific period.",
                features: &[
                    "Reduces noise in price data",
                    "Helps identify trend direction",
                    "Slower to react to price changes",
                    "Good for longer-term trends",
                ],
                best_use: "Best for identifying overall trend direction in stable markets",
            },
            PredictionMethod::Ema => MethodInfo {
                method: *self,
                title: "Exponential Moving Average (EMA)",
                description: "A weighted moving average that gives more importance to recent prices.",
                features: &[
                    "Responds faster to price changes",
                    "Reduces lag in trend signals",
                    "More weight to recent data",
                    "Better for short-term trading",
                ],
                best_use: "Best for markets with clear trends and shorter timeframes",
            },
            PredictionMethod::Rsi => MethodInfo {
                method: *self,
                title: "Relative Strength Index (RSI)",
                description: "Momentum oscillator that measures the speed and magnitude of price changes.",
                features: &[
                    "Identifies overbought/oversold conditions",
                    "Shows momentum strength",
                    "Ranges from 0 to 100",
                    "Helps spot potential reversals",
                ],
                best_use: "Best for identifying potential reversal points and market extremes",
            },
            PredictionMethod::Macd => MethodInfo {
                method: *self,
                title: "Moving Average Convergence Divergence (MACD)",
                description: "Trend-following momentum indicator showing relationship between two moving averages.",
                features: &[
                    "Combines trend and momentum",
                    "Shows potential entry/exit points",
                    "Identifies trend changes",
                    "Useful for divergence analysis",
                ],
                best_use: "Best for identifying trend changes and momentum shifts",
            },
        }
    }
}
