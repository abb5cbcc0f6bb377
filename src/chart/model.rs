use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::conversions::{parse_tz, ts_to_datetime};

use super::wire::{MetaNode, TradingPeriodNode};

/// Instrument metadata from `chart.result[0].meta`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockMeta {
    pub symbol: Option<String>,
    pub currency: Option<String>,
    pub exchange_name: Option<String>,
    pub full_exchange_name: Option<String>,
    pub instrument_type: Option<String>,
    pub first_trade_date: Option<DateTime<Utc>>,
    pub regular_market_time: Option<DateTime<Utc>>,
    /// Exchange offset from UTC in seconds.
    pub gmtoffset: Option<i64>,
    /// Short zone label as reported, e.g. `EDT`.
    pub timezone: Option<String>,
    /// Exchange zone, when the reported IANA name is recognised.
    pub exchange_timezone: Option<Tz>,
    pub regular_market_price: Option<f64>,
    pub previous_close: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub regular_market_day_high: Option<f64>,
    pub regular_market_day_low: Option<f64>,
    pub regular_market_volume: Option<u64>,
    pub trading_periods: TradingPeriods,
    pub data_granularity: Option<String>,
    pub range: Option<String>,
    pub valid_ranges: Vec<String>,
    /// Meta keys this crate does not model.
    pub extra: Map<String, Value>,
}

/// Pre-market, regular and post-market sessions of the current trading day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingPeriods {
    pub pre: Option<TradingPeriod>,
    pub regular: Option<TradingPeriod>,
    pub post: Option<TradingPeriod>,
}

/// A single trading session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingPeriod {
    pub timezone: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub gmtoffset: Option<i64>,
}

impl TradingPeriod {
    /// Whether `at` falls in `[start, end)`. False if either bound is unknown.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        match (self.start, self.end) {
            (Some(s), Some(e)) => s <= at && at < e,
            _ => false,
        }
    }
}

/// 52-week high and low; `0.0` where the API omitted a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketRange {
    pub fifty_two_week_high: f64,
    pub fifty_two_week_low: f64,
}

/// Column-oriented OHLCV series. Gaps reported as `null` stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    /// Unix seconds per bar, when the response carried them.
    pub timestamp: Vec<i64>,
    pub open: Vec<Option<f64>>,
    pub high: Vec<Option<f64>>,
    pub low: Vec<Option<f64>>,
    pub close: Vec<Option<f64>>,
    pub volume: Vec<Option<u64>>,
}

impl PriceHistory {
    pub fn len(&self) -> usize {
        self.close.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }
}

/// Price series of a comparison symbol returned alongside the main chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub high: Vec<Option<f64>>,
    pub low: Vec<Option<f64>>,
    pub open: Vec<Option<f64>>,
    pub close: Vec<Option<f64>>,
}

/// A cash dividend paid on `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividendEvent {
    pub date: DateTime<Utc>,
    pub amount: f64,
}

impl From<TradingPeriodNode> for TradingPeriod {
    fn from(n: TradingPeriodNode) -> Self {
        Self {
            timezone: n.timezone,
            start: n.start.and_then(ts_to_datetime),
            end: n.end.and_then(ts_to_datetime),
            gmtoffset: n.gmtoffset,
        }
    }
}

impl From<MetaNode> for StockMeta {
    fn from(n: MetaNode) -> Self {
        let trading_periods = n
            .current_trading_period
            .map(|p| TradingPeriods {
                pre: p.pre.map(Into::into),
                regular: p.regular.map(Into::into),
                post: p.post.map(Into::into),
            })
            .unwrap_or_default();

        Self {
            exchange_timezone: parse_tz(n.exchange_timezone_name.as_deref()),
            symbol: n.symbol,
            currency: n.currency,
            exchange_name: n.exchange_name,
            full_exchange_name: n.full_exchange_name,
            instrument_type: n.instrument_type,
            first_trade_date: n.first_trade_date.and_then(ts_to_datetime),
            regular_market_time: n.regular_market_time.and_then(ts_to_datetime),
            gmtoffset: n.gmtoffset,
            timezone: n.timezone,
            regular_market_price: n.regular_market_price,
            previous_close: n.chart_previous_close.or(n.previous_close),
            fifty_two_week_high: n.fifty_two_week_high,
            fifty_two_week_low: n.fifty_two_week_low,
            regular_market_day_high: n.regular_market_day_high,
            regular_market_day_low: n.regular_market_day_low,
            regular_market_volume: n.regular_market_volume,
            trading_periods,
            data_granularity: n.data_granularity,
            range: n.range,
            valid_ranges: n.valid_ranges,
            extra: n.extra,
        }
    }
}
