//! Core types and traits for the stock dashboard.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (DailyBar, TimeSeries, PriceSeries)
//! - Error types for data access and indicator computation
//! - Quote, symbol search and top-mover records
//! - Core traits for indicators and data sources

pub mod types;
pub mod traits;
pub mod error;

pub use error::{DataError, IndicatorError};
pub use types::*;
pub use traits::*;
