//! Market data sources for the stock dashboard.

mod alpha_vantage;
mod cache;
mod csv_source;
pub mod decode;

pub use alpha_vantage::{AlphaVantageClient, AlphaVantageConfig};
pub use cache::DataCache;
pub use csv_source::{load_from_reader, quote_from_series, CsvDataSource};
