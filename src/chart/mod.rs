mod model;
pub(crate) mod wire;

pub use model::{
    Comparison, DividendEvent, MarketRange, PriceHistory, StockMeta, TradingPeriod, TradingPeriods,
};

use std::collections::BTreeMap;

use serde_json::Value;

use crate::core::client::constants::ENDPOINT_CHART;
use crate::core::conversions::ts_to_datetime;
use crate::core::{Interval, Range, RetryConfig, YhfClient, YhfError};
use crate::history::Candle;
use wire::{ChartEnvelope, ChartResult};

/// A builder for the `v8/finance/chart/{symbol}` endpoint.
///
/// Defaults mirror the API: one month of daily bars with comparisons included.
#[derive(Debug, Clone)]
pub struct ChartBuilder {
    client: YhfClient,
    symbol: String,
    range: Range,
    interval: Interval,
    include_comparisons: bool,
    retry_override: Option<RetryConfig>,
}

impl ChartBuilder {
    /// Creates a new `ChartBuilder` for a given symbol.
    pub fn new(client: &YhfClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            range: Range::M1,
            interval: Interval::D1,
            include_comparisons: true,
            retry_override: None,
        }
    }

    /// Sets the time range (default `1mo`).
    #[must_use]
    pub fn range(mut self, range: Range) -> Self {
        self.range = range;
        self
    }

    /// Sets the bar interval (default `1d`).
    #[must_use]
    pub fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Whether to ask for comparison series (default `true`).
    #[must_use]
    pub fn include_comparisons(mut self, yes: bool) -> Self {
        self.include_comparisons = yes;
        self
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Recorded fixtures are keyed by range so several ranges of one symbol can coexist.
    fn fixture_label(&self) -> String {
        format!("chart_{}", self.range.as_str())
    }

    async fn fetch_body(&self) -> Result<String, YhfError> {
        let label = self.fixture_label();
        let endpoint = format!("{ENDPOINT_CHART}{}", self.symbol);
        self.client
            .get_body(
                &endpoint,
                &[
                    ("range", self.range.as_str()),
                    ("interval", self.interval.as_str()),
                    (
                        "includeComparisons",
                        if self.include_comparisons { "true" } else { "false" },
                    ),
                ],
                &label,
                &self.symbol,
                self.retry_override.as_ref(),
            )
            .await
    }

    /// Fetches the chart and returns the JSON body untouched.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a non-JSON body.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn fetch_raw(&self) -> Result<Value, YhfError> {
        Ok(serde_json::from_str(&self.fetch_body().await?)?)
    }

    /// Fetches and decodes the first chart result.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, an `error`
    /// object in the payload, or an empty `result` array.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn fetch(&self) -> Result<ChartResponse, YhfError> {
        ChartResponse::from_json(&self.fetch_body().await?)
    }
}

/// The first `chart.result` entry of a chart response, with reshaping views.
#[derive(Debug, Clone)]
pub struct ChartResponse {
    result: ChartResult,
}

impl ChartResponse {
    /// Decode a chart body.
    ///
    /// # Errors
    ///
    /// [`YhfError::Json`] for malformed JSON, [`YhfError::Api`] when the
    /// payload carries `chart.error`, [`YhfError::Data`] when `result` is
    /// missing or empty.
    pub fn from_json(body: &str) -> Result<Self, YhfError> {
        let parsed: ChartEnvelope = serde_json::from_str(body)?;
        let chart = parsed
            .chart
            .ok_or_else(|| YhfError::Data("missing chart".into()))?;

        if let Some(err) = chart.error {
            return Err(YhfError::Api {
                code: err.code.unwrap_or_default(),
                description: err.description.unwrap_or_default(),
            });
        }

        let result = chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| YhfError::Data("empty chart result".into()))?;

        Ok(Self { result })
    }

    /// Instrument metadata; empty when the response carried none.
    pub fn meta(&self) -> StockMeta {
        self.result
            .meta
            .clone()
            .map(StockMeta::from)
            .unwrap_or_default()
    }

    /// `regularMarketPrice`, or `0.0` when absent.
    pub fn price(&self) -> f64 {
        self.result
            .meta
            .as_ref()
            .and_then(|m| m.regular_market_price)
            .unwrap_or(0.0)
    }

    /// 52-week range, `0.0` for absent bounds.
    pub fn market_range(&self) -> MarketRange {
        let meta = self.result.meta.as_ref();
        MarketRange {
            fifty_two_week_high: meta.and_then(|m| m.fifty_two_week_high).unwrap_or(0.0),
            fifty_two_week_low: meta.and_then(|m| m.fifty_two_week_low).unwrap_or(0.0),
        }
    }

    /// Pre/regular/post sessions from `meta.currentTradingPeriod`.
    pub fn trading_periods(&self) -> TradingPeriods {
        self.meta().trading_periods
    }

    /// OHLCV columns from `indicators.quote[0]`.
    ///
    /// # Errors
    ///
    /// [`YhfError::Data`] when there is no quote block.
    pub fn price_history(&self) -> Result<PriceHistory, YhfError> {
        let quote = self
            .result
            .indicators
            .as_ref()
            .and_then(|i| i.quote.first())
            .ok_or_else(|| YhfError::Data("missing indicators.quote".into()))?;

        Ok(PriceHistory {
            timestamp: self.result.timestamp.clone().unwrap_or_default(),
            open: quote.open.clone(),
            high: quote.high.clone(),
            low: quote.low.clone(),
            close: quote.close.clone(),
            volume: quote.volume.clone(),
        })
    }

    /// Comparison series keyed by symbol; empty when none were returned.
    ///
    /// Entries without a symbol cannot be keyed and are skipped.
    pub fn comparisons(&self) -> BTreeMap<String, Comparison> {
        self.result
            .comparisons
            .iter()
            .flatten()
            .filter_map(|c| {
                let symbol = c.symbol.clone()?;
                Some((
                    symbol,
                    Comparison {
                        high: c.high.clone(),
                        low: c.low.clone(),
                        open: c.open.clone(),
                        close: c.close.clone(),
                    },
                ))
            })
            .collect()
    }

    /// Dividends from `events.dividends`, oldest first.
    ///
    /// The event date comes from the map key (Unix seconds), falling back to
    /// the event's own `date` field.
    ///
    /// # Errors
    ///
    /// [`YhfError::Data`] for an event without an amount or a usable date.
    pub fn dividends(&self) -> Result<Vec<DividendEvent>, YhfError> {
        let Some(map) = self
            .result
            .events
            .as_ref()
            .and_then(|e| e.dividends.as_ref())
        else {
            return Ok(Vec::new());
        };

        let mut out = map
            .iter()
            .map(|(key, node)| -> Result<DividendEvent, YhfError> {
                let date = key
                    .parse::<i64>()
                    .ok()
                    .or(node.date)
                    .and_then(ts_to_datetime)
                    .ok_or_else(|| YhfError::Data(format!("dividend '{key}' has no usable date")))?;
                let amount = node
                    .amount
                    .ok_or_else(|| YhfError::Data(format!("dividend '{key}' has no amount")))?;
                Ok(DividendEvent { date, amount })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // BTreeMap orders keys lexically, not numerically.
        out.sort_by_key(|d| d.date);
        Ok(out)
    }

    /// Row-oriented bars; rows without a close are dropped.
    pub fn candles(&self) -> Vec<Candle> {
        let ts = self.result.timestamp.as_deref().unwrap_or_default();
        let Some(q) = self.result.indicators.as_ref().and_then(|i| i.quote.first()) else {
            return Vec::new();
        };
        fn at(v: &[Option<f64>], i: usize) -> Option<f64> {
            v.get(i).copied().flatten()
        }

        ts.iter()
            .enumerate()
            .filter_map(|(i, &t)| {
                let close = at(&q.close, i)?;
                Some(Candle {
                    ts: t,
                    open: at(&q.open, i),
                    high: at(&q.high, i),
                    low: at(&q.low, i),
                    close,
                    volume: q.volume.get(i).copied().flatten(),
                })
            })
            .collect()
    }
}
