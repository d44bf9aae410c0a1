//! Decoding of Alpha Vantage JSON responses.
//!
//! The API encodes every number as a string and prefixes field names with
//! their position (`"4. close"`). Throttled requests still answer 200 with a
//! `Note` or `Information` body instead of data.

use chrono::NaiveDate;
use dashboard_core::error::DataError;
use dashboard_core::types::{DailyBar, MarketMover, StockQuote, SymbolMatch, TimeSeries, TopMovers};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

const TIME_SERIES_KEY: &str = "Time Series (Daily)";
const QUOTE_KEY: &str = "Global Quote";
const SEARCH_KEY: &str = "bestMatches";
const SEARCH_REGION: &str = "India";

#[derive(Debug, Deserialize)]
struct DailyRecord {
    #[serde(rename = "1. open")]
    open: String,
    #[serde(rename = "2. high")]
    high: String,
    #[serde(rename = "3. low")]
    low: String,
    #[serde(rename = "4. close")]
    close: String,
    #[serde(rename = "5. volume")]
    volume: String,
}

#[derive(Debug, Deserialize)]
struct QuoteRecord {
    #[serde(rename = "01. symbol")]
    symbol: String,
    #[serde(rename = "02. open")]
    open: String,
    #[serde(rename = "03. high")]
    high: String,
    #[serde(rename = "04. low")]
    low: String,
    #[serde(rename = "05. price")]
    price: String,
    #[serde(rename = "06. volume")]
    volume: String,
    #[serde(rename = "07. latest trading day")]
    latest_trading_day: String,
    #[serde(rename = "08. previous close")]
    previous_close: String,
    #[serde(rename = "09. change")]
    change: String,
    #[serde(rename = "10. change percent")]
    change_percent: String,
}

#[derive(Debug, Deserialize)]
struct MatchRecord {
    #[serde(rename = "1. symbol")]
    symbol: String,
    #[serde(rename = "2. name")]
    name: String,
    #[serde(rename = "4. region", default)]
    region: String,
    #[serde(rename = "8. currency", default)]
    currency: String,
}

#[derive(Debug, Deserialize)]
struct MoverRecord {
    ticker: String,
    price: String,
    change_amount: String,
    change_percentage: String,
    volume: String,
}

/// Reject throttling and error bodies.
pub fn check_api_errors(body: &Value) -> Result<(), DataError> {
    if let Some(note) = body.get("Note").or_else(|| body.get("Information")) {
        return Err(DataError::RateLimited(text(note)));
    }
    if let Some(message) = body.get("Error Message") {
        return Err(DataError::ApiError(text(message)));
    }
    Ok(())
}

fn text(value: &Value) -> String {
    value
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}

fn parse_f64(raw: &str, field: &str) -> Result<f64, DataError> {
    raw.trim()
        .parse()
        .map_err(|_| DataError::ParseError(format!("Invalid {field}: {raw:?}")))
}

fn parse_decimal(raw: &str, field: &str) -> Result<Decimal, DataError> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed);
    Decimal::from_str(trimmed)
        .map_err(|_| DataError::ParseError(format!("Invalid {field}: {raw:?}")))
}

fn parse_volume(raw: &str) -> Result<u64, DataError> {
    raw.trim()
        .parse()
        .map_err(|_| DataError::ParseError(format!("Invalid volume: {raw:?}")))
}

fn parse_date(raw: &str) -> Result<NaiveDate, DataError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| DataError::ParseError(format!("Invalid date: {raw:?}")))
}

fn record<T: for<'de> Deserialize<'de>>(value: &Value, what: &str) -> Result<T, DataError> {
    T::deserialize(value).map_err(|e| DataError::ParseError(format!("Malformed {what}: {e}")))
}

/// Decode a `TIME_SERIES_DAILY` response.
pub fn parse_time_series(body: &Value) -> Result<TimeSeries, DataError> {
    check_api_errors(body)?;
    let days = body
        .get(TIME_SERIES_KEY)
        .and_then(Value::as_object)
        .ok_or(DataError::NoDataAvailable)?;

    let mut series = TimeSeries::new();
    for (date, value) in days {
        let day: DailyRecord = record(value, "daily bar")?;
        series.insert(
            parse_date(date)?,
            DailyBar::new(
                parse_f64(&day.open, "open")?,
                parse_f64(&day.high, "high")?,
                parse_f64(&day.low, "low")?,
                parse_f64(&day.close, "close")?,
                parse_f64(&day.volume, "volume")?,
            ),
        );
    }

    if series.is_empty() {
        return Err(DataError::NoDataAvailable);
    }
    Ok(series)
}

/// Decode a `GLOBAL_QUOTE` response.
///
/// Unknown symbols come back as an empty `Global Quote` object.
pub fn parse_quote(body: &Value, requested: &str) -> Result<StockQuote, DataError> {
    check_api_errors(body)?;
    let quote = body
        .get(QUOTE_KEY)
        .filter(|q| q.as_object().is_some_and(|o| !o.is_empty()))
        .ok_or_else(|| DataError::SymbolNotFound(requested.to_string()))?;
    let quote: QuoteRecord = record(quote, "quote")?;

    Ok(StockQuote {
        symbol: quote.symbol,
        open: parse_decimal(&quote.open, "open")?,
        high: parse_decimal(&quote.high, "high")?,
        low: parse_decimal(&quote.low, "low")?,
        price: parse_decimal(&quote.price, "price")?,
        volume: parse_volume(&quote.volume)?,
        latest_trading_day: parse_date(&quote.latest_trading_day)?,
        previous_close: parse_decimal(&quote.previous_close, "previous close")?,
        change: parse_decimal(&quote.change, "change")?,
        change_percent: parse_decimal(&quote.change_percent, "change percent")?,
    })
}

/// Decode a `SYMBOL_SEARCH` response and rank it for the Indian market.
pub fn parse_search(body: &Value, keyword: &str) -> Result<Vec<SymbolMatch>, DataError> {
    check_api_errors(body)?;
    let matches = match body.get(SEARCH_KEY).and_then(Value::as_array) {
        Some(matches) => matches,
        None => return Ok(Vec::new()),
    };

    let matches = matches
        .iter()
        .map(|m| {
            record::<MatchRecord>(m, "search match").map(|m| SymbolMatch {
                symbol: m.symbol,
                name: m.name,
                region: m.region,
                currency: m.currency,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rank_matches(matches, keyword))
}

/// Keep Indian listings and indices, symbols starting with `keyword` first.
///
/// The sort is stable, so the API's relevance order survives within each
/// group.
pub fn rank_matches(matches: Vec<SymbolMatch>, keyword: &str) -> Vec<SymbolMatch> {
    let keyword = keyword.to_lowercase();
    let mut kept: Vec<SymbolMatch> = matches
        .into_iter()
        .filter(|m| {
            m.region == SEARCH_REGION || m.symbol.ends_with(".BSE") || m.symbol.starts_with('^')
        })
        .collect();

    kept.sort_by_key(|m| !m.symbol.to_lowercase().starts_with(&keyword));
    kept
}

/// Decode a `TOP_GAINERS_LOSERS` response.
pub fn parse_top_movers(body: &Value) -> Result<TopMovers, DataError> {
    check_api_errors(body)?;

    Ok(TopMovers {
        gainers: parse_movers(body.get("top_gainers"))?,
        losers: parse_movers(body.get("top_losers"))?,
    })
}

fn parse_movers(list: Option<&Value>) -> Result<Vec<MarketMover>, DataError> {
    let Some(list) = list.and_then(Value::as_array) else {
        return Ok(Vec::new());
    };

    list.iter()
        .map(|value| {
            let mover: MoverRecord = record(value, "market mover")?;
            Ok(MarketMover {
                price: parse_decimal(&mover.price, "price")?,
                change_amount: parse_decimal(&mover.change_amount, "change amount")?,
                change_percentage: parse_decimal(&mover.change_percentage, "change percentage")?,
                volume: parse_volume(&mover.volume)?,
                ticker: mover.ticker,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn bar(close: &str) -> Value {
        json!({
            "1. open": "100.0000",
            "2. high": "105.5000",
            "3. low": "99.2500",
            "4. close": close,
            "5. volume": "12345"
        })
    }

    #[test]
    fn test_parse_time_series_orders_by_date() {
        let body = json!({
            "Meta Data": { "2. Symbol": "TCS.BSE" },
            "Time Series (Daily)": {
                "2024-03-05": bar("103.0000"),
                "2024-03-04": bar("102.0000"),
                "2024-03-01": bar("101.0000")
            }
        });

        let series = parse_time_series(&body).unwrap();
        let closes: Vec<f64> = series.iter().map(|(_, b)| b.close).collect();

        assert_eq!(closes, vec![101.0, 102.0, 103.0]);
        assert_eq!(series.recent(1)[0].1.volume, 12345.0);
    }

    #[test]
    fn test_parse_time_series_rejects_bad_numbers() {
        let body = json!({ "Time Series (Daily)": { "2024-03-05": bar("n/a") } });

        assert!(matches!(
            parse_time_series(&body),
            Err(DataError::ParseError(_))
        ));
    }

    #[test]
    fn test_rate_limit_note() {
        let body = json!({ "Note": "Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute" });

        assert!(matches!(
            parse_time_series(&body),
            Err(DataError::RateLimited(msg)) if msg.contains("5 calls per minute")
        ));
        assert!(matches!(
            parse_top_movers(&json!({ "Information": "limit" })),
            Err(DataError::RateLimited(_))
        ));
    }

    #[test]
    fn test_error_message_body() {
        let body = json!({ "Error Message": "Invalid API call." });

        assert!(matches!(
            parse_quote(&body, "NOPE"),
            Err(DataError::ApiError(msg)) if msg == "Invalid API call."
        ));
    }

    #[test]
    fn test_parse_quote() {
        let body = json!({
            "Global Quote": {
                "01. symbol": "RELIANCE.BSE",
                "02. open": "2950.0000",
                "03. high": "2987.4500",
                "04. low": "2941.1000",
                "05. price": "2980.3500",
                "06. volume": "318299",
                "07. latest trading day": "2024-03-05",
                "08. previous close": "2955.2000",
                "09. change": "25.1500",
                "10. change percent": "0.8510%"
            }
        });

        let quote = parse_quote(&body, "RELIANCE").unwrap();

        assert_eq!(quote.symbol, "RELIANCE.BSE");
        assert_eq!(quote.price, dec!(2980.35));
        assert_eq!(quote.change_percent, dec!(0.851));
        assert_eq!(quote.volume, 318299);
        assert!(quote.is_positive());
    }

    #[test]
    fn test_parse_quote_unknown_symbol() {
        let body = json!({ "Global Quote": {} });

        assert!(matches!(
            parse_quote(&body, "NOPE"),
            Err(DataError::SymbolNotFound(s)) if s == "NOPE"
        ));
    }

    #[test]
    fn test_parse_search_filters_and_ranks() {
        let body = json!({
            "bestMatches": [
                { "1. symbol": "TATAMOTORS.BSE", "2. name": "Tata Motors", "4. region": "India/Bombay", "8. currency": "INR" },
                { "1. symbol": "TCS", "2. name": "TCS US listing", "4. region": "United States", "8. currency": "USD" },
                { "1. symbol": "INFY.NS", "2. name": "Infosys", "4. region": "India", "8. currency": "INR" },
                { "1. symbol": "TCS.BSE", "2. name": "Tata Consultancy Services", "4. region": "India/Bombay", "8. currency": "INR" }
            ]
        });

        let matches = parse_search(&body, "tcs").unwrap();
        let symbols: Vec<&str> = matches.iter().map(|m| m.symbol.as_str()).collect();

        assert_eq!(symbols, vec!["TCS.BSE", "TATAMOTORS.BSE", "INFY.NS"]);
    }

    #[test]
    fn test_parse_search_without_matches() {
        assert!(parse_search(&json!({}), "abc").unwrap().is_empty());
    }

    #[test]
    fn test_parse_top_movers() {
        let body = json!({
            "top_gainers": [
                { "ticker": "ABC", "price": "12.50", "change_amount": "2.50", "change_percentage": "25.0%", "volume": "1500000" }
            ]
        });

        let movers = parse_top_movers(&body).unwrap();

        assert_eq!(movers.gainers.len(), 1);
        assert_eq!(movers.gainers[0].change_percentage, dec!(25.0));
        assert!(movers.losers.is_empty());
    }
}
