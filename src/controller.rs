//! Dashboard state and data orchestration.

use dashboard_core::error::{DataError, IndicatorError};
use dashboard_core::traits::StockDataSource;
use dashboard_core::types::{MoversPeriod, PriceSeries, StockQuote, TimeSeries, TopMovers};
use dashboard_data::DataCache;
use dashboard_indicators::{predict_trend, IndicatorResult, PredictionMethod};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Owns the data source and the state of the selected stock.
pub struct DashboardController {
    source: Arc<dyn StockDataSource>,
    cache: DataCache,
    window: usize,
    symbol: Option<String>,
    quote: Option<StockQuote>,
    series: Option<TimeSeries>,
    method: Option<PredictionMethod>,
}

impl DashboardController {
    /// Create a controller analysing the most recent `window` closes.
    pub fn new(source: Arc<dyn StockDataSource>, window: usize, cache_ttl: Duration) -> Self {
        Self {
            source,
            cache: DataCache::new(cache_ttl),
            window,
            symbol: None,
            quote: None,
            series: None,
            method: None,
        }
    }

    /// Load quote and daily bars for a symbol.
    ///
    /// Bars are served from cache while fresh. On failure the previous
    /// stock stays selected.
    pub async fn load_stock(&mut self, symbol: &str) -> Result<(), DataError> {
        info!(symbol, source = self.source.name(), "Loading stock data");

        let quote = self.source.get_quote(symbol).await?;
        let series = match self.cache.get(symbol) {
            Some(series) => {
                debug!(symbol, "Time series served from cache");
                series.clone()
            }
            None => {
                let series = self.source.get_time_series(symbol).await?;
                self.cache.put(symbol, series.clone());
                series
            }
        };

        if series.is_empty() {
            return Err(DataError::NoDataAvailable);
        }

        self.symbol = Some(symbol.to_string());
        self.quote = Some(quote);
        self.series = Some(series);
        Ok(())
    }

    /// Reload a symbol, dropping any cached bars first.
    ///
    /// Periodic refreshes use this so the prediction always matches the
    /// quote fetched alongside it.
    pub async fn refresh_stock(&mut self, symbol: &str) -> Result<(), DataError> {
        self.cache.clear(symbol);
        self.load_stock(symbol).await
    }

    /// Select a prediction method, or clear the selection with `None`.
    pub fn select_method(&mut self, method: Option<PredictionMethod>) {
        self.method = method;
    }

    /// Closing prices of the analysis window, oldest first.
    pub fn closes(&self) -> Option<PriceSeries> {
        self.series
            .as_ref()
            .map(|series| PriceSeries::from_time_series(series, self.window))
    }

    /// Prediction for the current stock and method.
    ///
    /// `None` while either is missing.
    pub fn prediction(&self) -> Option<Result<IndicatorResult, IndicatorError>> {
        let method = self.method?;
        let closes = self.closes()?;
        Some(predict_trend(&closes, method))
    }

    /// Quotes for the overview indices. Failed lookups yield `None`.
    pub async fn index_quotes(&self, indices: &[String]) -> Vec<(String, Option<StockQuote>)> {
        let mut quotes = Vec::with_capacity(indices.len());
        for index in indices {
            let quote = match self.source.get_quote(index).await {
                Ok(quote) => Some(quote),
                Err(e) => {
                    warn!(index = %index, error = %e, "Index quote unavailable");
                    None
                }
            };
            quotes.push((index.clone(), quote));
        }
        quotes
    }

    /// Top gainers and losers.
    pub async fn movers(&self, period: MoversPeriod) -> Result<TopMovers, DataError> {
        self.source.top_movers(period).await
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn quote(&self) -> Option<&StockQuote> {
        self.quote.as_ref()
    }

    pub fn series(&self) -> Option<&TimeSeries> {
        self.series.as_ref()
    }

    pub fn method(&self) -> Option<PredictionMethod> {
        self.method
    }
}
