//! Time series caching.

use dashboard_core::types::TimeSeries;
use std::collections::HashMap;
use std::time::{Duration, Instant};

struct Entry {
    series: TimeSeries,
    fetched_at: Instant,
}

/// In-memory time series cache with a freshness window.
pub struct DataCache {
    cache: HashMap<String, Entry>,
    ttl: Duration,
}

impl DataCache {
    /// Create a new data cache.
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: HashMap::new(),
            ttl,
        }
    }

    /// Generate cache key.
    fn cache_key(symbol: &str) -> String {
        symbol.trim().to_uppercase()
    }

    /// Get a cached series that is still fresh.
    pub fn get(&self, symbol: &str) -> Option<&TimeSeries> {
        self.get_at(symbol, Instant::now())
    }

    fn get_at(&self, symbol: &str, now: Instant) -> Option<&TimeSeries> {
        self.cache
            .get(&Self::cache_key(symbol))
            .filter(|entry| now.duration_since(entry.fetched_at) < self.ttl)
            .map(|entry| &entry.series)
    }

    /// Store a series in cache.
    pub fn put(&mut self, symbol: &str, series: TimeSeries) {
        self.cache.insert(
            Self::cache_key(symbol),
            Entry {
                series,
                fetched_at: Instant::now(),
            },
        );
    }

    /// Clear cache for a symbol.
    pub fn clear(&mut self, symbol: &str) {
        self.cache.remove(&Self::cache_key(symbol));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dashboard_core::types::DailyBar;

    fn series() -> TimeSeries {
        std::iter::once((
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            DailyBar::new(1.0, 2.0, 0.5, 1.5, 100.0),
        ))
        .collect()
    }

    #[test]
    fn test_cache_is_case_insensitive() {
        let mut cache = DataCache::new(Duration::from_secs(300));
        cache.put("tcs", series());

        assert!(cache.get("TCS").is_some());
        assert!(cache.get("INFY").is_none());
    }

    #[test]
    fn test_cache_expiry() {
        let mut cache = DataCache::new(Duration::from_secs(300));
        cache.put("TCS", series());

        let later = Instant::now() + Duration::from_secs(301);
        assert!(cache.get_at("TCS", later).is_none());
        assert!(cache.get("TCS").is_some());
    }

    #[test]
    fn test_cache_clear() {
        let mut cache = DataCache::new(Duration::from_secs(300));
        cache.put("TCS", series());
        cache.put("INFY", series());

        cache.clear("tcs");
        assert!(cache.get("TCS").is_none());
        assert!(cache.get("INFY").is_some());
    }
}
