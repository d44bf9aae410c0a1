//! OHLCV (Open, High, Low, Close, Volume) data types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Deref;

/// Number of most recent sessions fed to the indicator engine.
pub const DEFAULT_WINDOW: usize = 30;

/// One trading day of price data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Trading volume
    pub volume: f64,
}

impl DailyBar {
    /// Create a new bar.
    pub fn new(open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Daily bars keyed by trading date.
///
/// Source APIs deliver the mapping newest-first; keeping it in a `BTreeMap`
/// makes chronological order independent of the source ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    bars: BTreeMap<NaiveDate, DailyBar>,
}

impl TimeSeries {
    /// Create an empty time series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a bar, replacing any bar already stored for that date.
    pub fn insert(&mut self, date: NaiveDate, bar: DailyBar) {
        self.bars.insert(date, bar);
    }

    /// Get the number of bars.
    #[inline]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The most recent `n` bars, oldest first.
    pub fn recent(&self, n: usize) -> Vec<(NaiveDate, DailyBar)> {
        let skip = self.bars.len().saturating_sub(n);
        self.bars
            .iter()
            .skip(skip)
            .map(|(date, bar)| (*date, *bar))
            .collect()
    }

    /// Get an iterator over the bars, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &DailyBar)> {
        self.bars.iter()
    }
}

impl FromIterator<(NaiveDate, DailyBar)> for TimeSeries {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, DailyBar)>>(iter: T) -> Self {
        Self {
            bars: iter.into_iter().collect(),
        }
    }
}

/// Closing prices in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries(Vec<f64>);

impl PriceSeries {
    /// Closes of the most recent `window` bars, oldest first.
    pub fn from_time_series(series: &TimeSeries, window: usize) -> Self {
        Self(series.recent(window).into_iter().map(|(_, b)| b.close).collect())
    }
}

impl Deref for PriceSeries {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn series(days: u32) -> TimeSeries {
        // Insert newest first, the way the API delivers it
        (1..=days)
            .rev()
            .map(|d| {
                let close = 100.0 + d as f64;
                (day(d), DailyBar::new(close - 0.5, close + 1.0, close - 1.0, close, d as f64 * 1000.0))
            })
            .collect()
    }

    #[test]
    fn test_recent_is_chronological() {
        let ts = series(5);
        let recent = ts.recent(3);

        let dates: Vec<NaiveDate> = recent.iter().map(|(d, _)| *d).collect();
        assert_eq!(dates, vec![day(3), day(4), day(5)]);
    }

    #[test]
    fn test_price_series_window() {
        let ts = series(31);
        let prices = PriceSeries::from_time_series(&ts, DEFAULT_WINDOW);

        assert_eq!(prices.len(), 30);
        assert_eq!(prices[0], 102.0);
        assert_eq!(prices[29], 131.0);
    }

    #[test]
    fn test_short_series_keeps_everything() {
        let ts = series(4);
        let prices = PriceSeries::from_time_series(&ts, DEFAULT_WINDOW);

        assert_eq!(&prices[..], &[101.0, 102.0, 103.0, 104.0]);
    }
}
