//! Quote, symbol search and market mover records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest end-of-day quote for a symbol or index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockQuote {
    pub symbol: String,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    /// Last traded price
    pub price: Decimal,
    pub volume: u64,
    pub latest_trading_day: NaiveDate,
    pub previous_close: Decimal,
    /// Absolute change against the previous close
    pub change: Decimal,
    /// Change in percent, e.g. `1.25` for +1.25%
    pub change_percent: Decimal,
}

impl StockQuote {
    /// Check if the price moved up (or stayed flat) since the previous close.
    pub fn is_positive(&self) -> bool {
        self.change >= Decimal::ZERO
    }
}

/// One candidate returned by symbol search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolMatch {
    pub symbol: String,
    pub name: String,
    pub region: String,
    pub currency: String,
}

/// A single entry in the gainers or losers list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketMover {
    pub ticker: String,
    pub price: Decimal,
    pub change_amount: Decimal,
    /// Change in percent, sign included
    pub change_percentage: Decimal,
    pub volume: u64,
}

/// Top gainers and losers for a period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopMovers {
    pub gainers: Vec<MarketMover>,
    pub losers: Vec<MarketMover>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn quote(symbol: &str, change: Decimal) -> StockQuote {
        StockQuote {
            symbol: symbol.to_string(),
            open: dec!(100),
            high: dec!(105),
            low: dec!(99),
            price: dec!(100) + change,
            volume: 1_000,
            latest_trading_day: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            previous_close: dec!(100),
            change,
            change_percent: change,
        }
    }

    #[test]
    fn test_quote_direction() {
        assert!(quote("RELIANCE.BSE", dec!(2.5)).is_positive());
        assert!(quote("RELIANCE.BSE", dec!(0)).is_positive());
        assert!(!quote("RELIANCE.BSE", dec!(-0.1)).is_positive());
    }
}
