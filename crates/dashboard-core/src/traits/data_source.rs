//! Data source trait definitions.

use crate::error::DataError;
use crate::types::{MoversPeriod, StockQuote, SymbolMatch, TimeSeries, TopMovers};
use async_trait::async_trait;

/// Trait for market data providers feeding the dashboard.
#[async_trait]
pub trait StockDataSource: Send + Sync {
    /// Fetch the latest quote for a symbol or index.
    async fn get_quote(&self, symbol: &str) -> Result<StockQuote, DataError>;

    /// Fetch daily bars for a symbol.
    ///
    /// # Returns
    /// Bars keyed by trading date, in whatever span the provider serves
    async fn get_time_series(&self, symbol: &str) -> Result<TimeSeries, DataError>;

    /// Search symbols matching a keyword, best matches first.
    async fn search(&self, keyword: &str) -> Result<Vec<SymbolMatch>, DataError>;

    /// Fetch top gainers and losers for a period.
    async fn top_movers(&self, period: MoversPeriod) -> Result<TopMovers, DataError>;

    /// Get the data source name.
    fn name(&self) -> &str;
}
