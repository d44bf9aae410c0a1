//! CSV data source for offline daily bars.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use dashboard_core::error::DataError;
use dashboard_core::traits::StockDataSource;
use dashboard_core::types::{
    DailyBar, MoversPeriod, StockQuote, SymbolMatch, TimeSeries, TopMovers,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CSV record format.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "timestamp", alias = "Timestamp")]
    date: String,
    #[serde(alias = "Open", alias = "open")]
    open: f64,
    #[serde(alias = "High", alias = "high")]
    high: f64,
    #[serde(alias = "Low", alias = "low")]
    low: f64,
    #[serde(alias = "Close", alias = "close", alias = "Adj Close")]
    close: f64,
    #[serde(alias = "Volume", alias = "volume", default)]
    volume: f64,
}

/// CSV data source for historical daily bars.
pub struct CsvDataSource {
    path: PathBuf,
}

impl CsvDataSource {
    /// Create a new CSV data source.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataError::NoDataAvailable);
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Load all bars from the CSV file.
    pub fn load(&self) -> Result<TimeSeries, DataError> {
        let file = std::fs::File::open(&self.path)
            .map_err(|e| DataError::ParseError(format!("{}: {}", self.path.display(), e)))?;
        let series = load_from_reader(file)?;

        debug!(path = %self.path.display(), bars = series.len(), "Loaded CSV time series");
        Ok(series)
    }
}

/// Offline source: serves the file's bars for any symbol and derives the
/// quote from the last two sessions. Search and movers are unavailable.
#[async_trait]
impl StockDataSource for CsvDataSource {
    async fn get_quote(&self, symbol: &str) -> Result<StockQuote, DataError> {
        quote_from_series(symbol, &self.load()?)
    }

    async fn get_time_series(&self, _symbol: &str) -> Result<TimeSeries, DataError> {
        self.load()
    }

    async fn search(&self, _keyword: &str) -> Result<Vec<SymbolMatch>, DataError> {
        Err(DataError::NoDataAvailable)
    }

    async fn top_movers(&self, _period: MoversPeriod) -> Result<TopMovers, DataError> {
        Err(DataError::NoDataAvailable)
    }

    fn name(&self) -> &str {
        "csv"
    }
}

fn decimal(value: f64) -> Result<Decimal, DataError> {
    Decimal::try_from(value)
        .map(|d| d.round_dp(4))
        .map_err(|e| DataError::ParseError(format!("{value}: {e}")))
}

/// Build a quote from the latest bar and the close before it.
pub fn quote_from_series(symbol: &str, series: &TimeSeries) -> Result<StockQuote, DataError> {
    let recent = series.recent(2);
    let (date, bar) = recent.last().ok_or(DataError::NoDataAvailable)?;
    let previous_close = match recent.first() {
        Some((_, prev)) if recent.len() == 2 => decimal(prev.close)?,
        _ => decimal(bar.open)?,
    };

    let price = decimal(bar.close)?;
    let change = price - previous_close;
    let change_percent = if previous_close.is_zero() {
        Decimal::ZERO
    } else {
        (change / previous_close * Decimal::ONE_HUNDRED).round_dp(4)
    };

    Ok(StockQuote {
        symbol: symbol.to_string(),
        open: decimal(bar.open)?,
        high: decimal(bar.high)?,
        low: decimal(bar.low)?,
        price,
        volume: bar.volume.max(0.0) as u64,
        latest_trading_day: *date,
        previous_close,
        change,
        change_percent,
    })
}

/// Read daily bars from any CSV stream with a header row.
pub fn load_from_reader<R: Read>(reader: R) -> Result<TimeSeries, DataError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut series = TimeSeries::new();

    for result in reader.deserialize() {
        let record: CsvRecord = result.map_err(|e| DataError::ParseError(e.to_string()))?;
        let date = parse_date(&record.date)?;

        series.insert(
            date,
            DailyBar::new(record.open, record.high, record.low, record.close, record.volume),
        );
    }

    if series.is_empty() {
        return Err(DataError::NoDataAvailable);
    }
    Ok(series)
}

/// Parse the date formats commonly found in exported price files.
fn parse_date(date_str: &str) -> Result<NaiveDate, DataError> {
    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

    for format in formats {
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            return Ok(d);
        }
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.date());
    }

    Err(DataError::ParseError(format!(
        "Could not parse date: {}",
        date_str
    )))
}
