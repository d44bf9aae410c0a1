//! Lookback period for the top gainers/losers listing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DataError;

/// Period over which top movers are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MoversPeriod {
    /// Single session
    #[serde(rename = "1d")]
    #[default]
    Day,
    /// Trailing week
    #[serde(rename = "1w")]
    Week,
    /// Trailing month
    #[serde(rename = "1m")]
    Month,
}

impl MoversPeriod {
    /// Alpha Vantage `function` name serving this period.
    pub fn endpoint(&self) -> &'static str {
        match self {
            MoversPeriod::Day => "TOP_GAINERS_LOSERS",
            MoversPeriod::Week => "TOP_GAINERS_LOSERS_WEEKLY",
            MoversPeriod::Month => "TOP_GAINERS_LOSERS_MONTHLY",
        }
    }

    /// Get all available periods.
    pub fn all() -> &'static [MoversPeriod] {
        &[MoversPeriod::Day, MoversPeriod::Week, MoversPeriod::Month]
    }
}

impl fmt::Display for MoversPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MoversPeriod::Day => "1d",
            MoversPeriod::Week => "1w",
            MoversPeriod::Month => "1m",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for MoversPeriod {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1d" | "day" | "daily" => Ok(MoversPeriod::Day),
            "1w" | "week" | "weekly" => Ok(MoversPeriod::Week),
            "1m" | "month" | "monthly" => Ok(MoversPeriod::Month),
            _ => Err(DataError::InvalidPeriod(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_parse() {
        assert_eq!(MoversPeriod::from_str("1d").unwrap(), MoversPeriod::Day);
        assert_eq!(MoversPeriod::from_str("Weekly").unwrap(), MoversPeriod::Week);
        assert_eq!(MoversPeriod::from_str("1M").unwrap(), MoversPeriod::Month);
        assert!(MoversPeriod::from_str("1y").is_err());
    }

    #[test]
    fn test_period_endpoint() {
        assert_eq!(MoversPeriod::Day.endpoint(), "TOP_GAINERS_LOSERS");
        assert_eq!(MoversPeriod::Week.endpoint(), "TOP_GAINERS_LOSERS_WEEKLY");
        assert_eq!(MoversPeriod::Month.endpoint(), "TOP_GAINERS_LOSERS_MONTHLY");
    }

    #[test]
    fn test_period_display_round_trips() {
        for period in MoversPeriod::all() {
            assert_eq!(MoversPeriod::from_str(&period.to_string()).unwrap(), *period);
        }
    }
}
