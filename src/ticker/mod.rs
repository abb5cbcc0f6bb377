use std::collections::BTreeMap;

use serde_json::Value;

use crate::chart::{
    ChartBuilder, ChartResponse, Comparison, DividendEvent, MarketRange, PriceHistory, StockMeta,
    TradingPeriods,
};
use crate::core::{Interval, Range, RetryConfig, YhfClient, YhfError};
use crate::history::{Candle, HistoryBuilder};
use crate::insights::{Insights, InsightsBuilder};
use crate::quote::{EarningsData, fetch_quote_body};

/// A high-level interface for a single ticker symbol.
///
/// Each method issues one GET request against the YH Finance API and
/// reshapes the answer. Every returned model implements `Default`, so
/// `.unwrap_or_default()` gives an empty value when a failure should be
/// ignored rather than handled.
///
/// # Example
///
/// ```no_run
/// # use yhf::{Ticker, YhfClient, Range};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = YhfClient::from_env()?;
/// let msft = Ticker::new(&client, "MSFT");
///
/// let range = msft.market_range().await?;
/// println!("52w: {:.2} - {:.2}", range.fifty_two_week_low, range.fifty_two_week_high);
///
/// let history = msft.price_history(Range::M3).await?;
/// println!("fetched {} bars", history.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Ticker {
    client: YhfClient,
    symbol: String,
    retry_override: Option<RetryConfig>,
}

impl Ticker {
    /// Creates a new `Ticker` for a given symbol.
    pub fn new(client: &YhfClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            retry_override: None,
        }
    }

    /// The symbol this ticker is bound to.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Overrides the client's default retry policy for all subsequent API calls made by this `Ticker` instance.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// A chart builder for this symbol carrying this ticker's retry policy.
    pub fn chart(&self) -> ChartBuilder {
        ChartBuilder::new(&self.client, &self.symbol).retry_policy(self.retry_override.clone())
    }

    async fn chart_for(&self, range: Range) -> Result<ChartResponse, YhfError> {
        self.chart().range(range).fetch().await
    }

    /* ---------------- Raw passthroughs ---------------- */

    /// The quote for this symbol, as returned by the API.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn quote(&self) -> Result<Value, YhfError> {
        let body = fetch_quote_body(&self.client, &self.symbol, self.retry_override.as_ref()).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// The chart payload for `range` and `interval`, as returned by the API.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn stock_data(
        &self,
        range: Range,
        interval: Interval,
        include_comparisons: bool,
    ) -> Result<Value, YhfError> {
        self.chart()
            .range(range)
            .interval(interval)
            .include_comparisons(include_comparisons)
            .fetch_raw()
            .await
    }

    /* ---------------- Chart views ---------------- */

    /// Instrument metadata from a one-day chart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the chart has no result.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn meta(&self) -> Result<StockMeta, YhfError> {
        Ok(self.chart_for(Range::D1).await?.meta())
    }

    /// The current market price, `0.0` when the API reports none.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the chart has no result.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn price(&self) -> Result<f64, YhfError> {
        Ok(self.chart_for(Range::D1).await?.price())
    }

    /// OHLCV columns over `range`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the chart has no quote block.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn price_history(&self, range: Range) -> Result<PriceHistory, YhfError> {
        self.chart_for(range).await?.price_history()
    }

    /// Comparison series returned alongside the chart, keyed by symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the chart has no result.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn comparisons(&self, range: Range) -> Result<BTreeMap<String, Comparison>, YhfError> {
        Ok(self
            .chart()
            .range(range)
            .include_comparisons(true)
            .fetch()
            .await?
            .comparisons())
    }

    /// Dividends paid within `range`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or a dividend event is malformed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn dividends(&self, range: Range) -> Result<Vec<DividendEvent>, YhfError> {
        self.chart_for(range).await?.dividends()
    }

    /// Pre-market, regular and post-market sessions of the current day.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the chart has no result.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn trading_periods(&self) -> Result<TradingPeriods, YhfError> {
        Ok(self.chart_for(Range::D1).await?.trading_periods())
    }

    /// 52-week high and low.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the chart has no result.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn market_range(&self) -> Result<MarketRange, YhfError> {
        Ok(self.chart_for(Range::D1).await?.market_range())
    }

    /* ---------------- Quote views ---------------- */

    /// Earnings window and date from the quote.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the quote has no result.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn earnings(&self) -> Result<EarningsData, YhfError> {
        let body = fetch_quote_body(&self.client, &self.symbol, self.retry_override.as_ref()).await?;
        EarningsData::from_quote_json(&body)
    }

    /* ---------------- History & insights ---------------- */

    /// Candles from the query-addressed history endpoint.
    ///
    /// # Errors
    ///
    /// See [`HistoryBuilder::fetch`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn history(&self, interval: Interval, range: Range) -> Result<Vec<Candle>, YhfError> {
        HistoryBuilder::new(&self.client, &self.symbol)
            .interval(interval)
            .range(range)
            .retry_policy(self.retry_override.clone())
            .fetch()
            .await
    }

    /// Research insights for this symbol.
    ///
    /// # Errors
    ///
    /// See [`InsightsBuilder::fetch`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn insights(&self) -> Result<Insights, YhfError> {
        InsightsBuilder::new(&self.client, &self.symbol)
            .retry_policy(self.retry_override.clone())
            .fetch()
            .await
    }
}
