use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::core::wire::de_null_default;

#[derive(Debug, Deserialize)]
pub(crate) struct ChartEnvelope {
    pub(crate) chart: Option<ChartNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartNode {
    pub(crate) result: Option<Vec<ChartResult>>,
    pub(crate) error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartError {
    #[serde(default)]
    pub(crate) code: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct ChartResult {
    #[serde(default)]
    pub(crate) meta: Option<MetaNode>,
    #[serde(default)]
    pub(crate) timestamp: Option<Vec<i64>>,
    #[serde(default)]
    pub(crate) indicators: Option<Indicators>,
    #[serde(default)]
    pub(crate) events: Option<Events>,
    #[serde(default)]
    pub(crate) comparisons: Option<Vec<ComparisonNode>>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MetaNode {
    pub(crate) symbol: Option<String>,
    pub(crate) currency: Option<String>,
    pub(crate) exchange_name: Option<String>,
    pub(crate) full_exchange_name: Option<String>,
    pub(crate) instrument_type: Option<String>,
    pub(crate) first_trade_date: Option<i64>,
    pub(crate) regular_market_time: Option<i64>,
    pub(crate) gmtoffset: Option<i64>,
    pub(crate) timezone: Option<String>,
    pub(crate) exchange_timezone_name: Option<String>,
    pub(crate) regular_market_price: Option<f64>,
    pub(crate) chart_previous_close: Option<f64>,
    pub(crate) previous_close: Option<f64>,
    pub(crate) fifty_two_week_high: Option<f64>,
    pub(crate) fifty_two_week_low: Option<f64>,
    pub(crate) regular_market_day_high: Option<f64>,
    pub(crate) regular_market_day_low: Option<f64>,
    pub(crate) regular_market_volume: Option<u64>,
    pub(crate) current_trading_period: Option<CurrentTradingPeriod>,
    pub(crate) data_granularity: Option<String>,
    pub(crate) range: Option<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub(crate) valid_ranges: Vec<String>,
    /// Everything not modelled above, kept so callers can still reach it.
    #[serde(flatten)]
    pub(crate) extra: Map<String, Value>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct CurrentTradingPeriod {
    pub(crate) pre: Option<TradingPeriodNode>,
    pub(crate) regular: Option<TradingPeriodNode>,
    pub(crate) post: Option<TradingPeriodNode>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct TradingPeriodNode {
    pub(crate) timezone: Option<String>,
    pub(crate) start: Option<i64>,
    pub(crate) end: Option<i64>,
    pub(crate) gmtoffset: Option<i64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct Indicators {
    #[serde(default, deserialize_with = "de_null_default")]
    pub(crate) quote: Vec<QuoteBlock>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct QuoteBlock {
    #[serde(default, deserialize_with = "de_null_default")]
    pub(crate) open: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub(crate) high: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub(crate) low: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub(crate) close: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub(crate) volume: Vec<Option<u64>>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct Events {
    #[serde(default)]
    pub(crate) dividends: Option<BTreeMap<String, DividendNode>>,
}

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct DividendNode {
    pub(crate) amount: Option<f64>,
    pub(crate) date: Option<i64>,
}

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct ComparisonNode {
    #[serde(default)]
    pub(crate) symbol: Option<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub(crate) open: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub(crate) high: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub(crate) low: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub(crate) close: Vec<Option<f64>>,
}
