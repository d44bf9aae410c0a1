//! Core data types for the stock dashboard.

mod ohlcv;
mod period;
mod quote;

pub use ohlcv::{DailyBar, PriceSeries, TimeSeries, DEFAULT_WINDOW};
pub use period::MoversPeriod;
pub use quote::{MarketMover, StockQuote, SymbolMatch, TopMovers};
