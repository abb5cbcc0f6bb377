use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::conversions::ts_to_datetime;

/// One bar of price data. Only `close` is guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Bar start, Unix seconds.
    pub ts: i64,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: f64,
    pub volume: Option<u64>,
}

impl Candle {
    /// Bar start as a UTC instant.
    pub fn datetime_utc(&self) -> Option<DateTime<Utc>> {
        ts_to_datetime(self.ts)
    }
}
