//! Error types for the stock dashboard.

use thiserror::Error;

/// Errors raised while fetching or decoding market data.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("No data available for the requested symbol")]
    NoDataAvailable,

    #[error("API call frequency limit reached: {0}")]
    RateLimited(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid movers period: {0}")]
    InvalidPeriod(String),
}

/// Indicator calculation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndicatorError {
    #[error("Insufficient data: need {required} points, have {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unknown prediction method: {0}")]
    UnknownMethod(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_message() {
        let err = IndicatorError::InsufficientData {
            required: 26,
            available: 12,
        };
        assert_eq!(err.to_string(), "Insufficient data: need 26 points, have 12");
    }

    #[test]
    fn test_rate_limit_message() {
        let err = DataError::RateLimited("5 calls per minute".into());
        assert_eq!(
            err.to_string(),
            "API call frequency limit reached: 5 calls per minute"
        );
    }
}
