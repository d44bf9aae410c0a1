//! Technical indicators and trend prediction for the stock dashboard.
//!
//! This crate provides pure, stateless computations over a chronological
//! slice of closing prices:
//! - Moving averages (SMA, EMA) anchored at the start of the slice
//! - Momentum indicators (RSI, MACD)
//! - Trend classification with supporting metrics
//!
//! It performs no I/O and keeps no state between calls.

pub mod catalog;
pub mod momentum;
pub mod moving_average;
pub mod prediction;

pub use catalog::MethodInfo;
pub use momentum::{compute_macd, compute_rsi, degenerate_signal, Macd, MacdOutput, Rsi};
pub use moving_average::{compute_ema, compute_sma, sma_overlay, Ema, Sma};
pub use prediction::{
    predict_trend, predict_using_ema, predict_using_macd, predict_using_rsi, predict_using_sma,
    IndicatorResult, Metric, MetricUnit, PredictionMethod, Trend,
};
