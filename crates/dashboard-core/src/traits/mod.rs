//! Core traits for the stock dashboard.

mod data_source;
mod indicator;

pub use data_source::StockDataSource;
pub use indicator::Indicator;
