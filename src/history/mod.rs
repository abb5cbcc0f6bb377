mod model;

pub use model::Candle;

use serde_json::Value;

use crate::chart::ChartResponse;
use crate::core::client::constants::ENDPOINT_HISTORY;
use crate::core::{Interval, Range, RetryConfig, YhfClient, YhfError};

/// A builder for historical data addressed as `v8/finance/chart?symbol=...`.
///
/// Unlike [`crate::ChartBuilder`], the symbol travels as a query parameter
/// and comparisons are never requested.
#[derive(Debug, Clone)]
pub struct HistoryBuilder {
    client: YhfClient,
    symbol: String,
    interval: Interval,
    range: Range,
    retry_override: Option<RetryConfig>,
}

impl HistoryBuilder {
    /// Creates a new `HistoryBuilder` for a given symbol (`1d` bars over `1mo`).
    pub fn new(client: &YhfClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            interval: Interval::D1,
            range: Range::M1,
            retry_override: None,
        }
    }

    /// Sets the time interval for each data point (candle).
    #[must_use]
    pub fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the relative time range for the request.
    #[must_use]
    pub fn range(mut self, range: Range) -> Self {
        self.range = range;
        self
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    async fn fetch_body(&self) -> Result<String, YhfError> {
        self.client
            .get_body(
                ENDPOINT_HISTORY,
                &[
                    ("symbol", self.symbol.as_str()),
                    ("interval", self.interval.as_str()),
                    ("range", self.range.as_str()),
                ],
                "history",
                &self.symbol,
                self.retry_override.as_ref(),
            )
            .await
    }

    /// Returns the JSON body untouched.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a non-JSON body.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn fetch_raw(&self) -> Result<Value, YhfError> {
        Ok(serde_json::from_str(&self.fetch_body().await?)?)
    }

    /// Fetches the history as candles, oldest first.
    ///
    /// # Errors
    ///
    /// As [`Self::fetch_raw`], plus the chart decoding errors of
    /// [`ChartResponse::from_json`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn fetch(&self) -> Result<Vec<Candle>, YhfError> {
        Ok(ChartResponse::from_json(&self.fetch_body().await?)?.candles())
    }
}
