//! yhf-rs: async client for the YH Finance REST API (`https://yfapi.net/`).
//!
//! Every call is a single authenticated GET (`x-api-key` header) whose JSON
//! body is either handed back untouched or reshaped into a small model struct.
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), yhf::YhfError> {
//! let client = yhf::YhfClient::new("your-api-key")?;
//! let aapl = yhf::Ticker::new(&client, "AAPL");
//!
//! println!("last price: {:.2}", aapl.price().await?);
//! for div in aapl.dividends(yhf::Range::Y1).await? {
//!     println!("{:?} {}", div.date, div.amount);
//! }
//! # Ok(())
//! # }
//! ```

/// Client, configuration, errors and shared helpers.
pub mod core;

/// The `v8/finance/chart/{symbol}` endpoint and its reshaped views.
pub mod chart;
/// Historical data via `v8/finance/chart?symbol=`.
pub mod history;
/// Research insights via `v6/finance/insights`.
pub mod insights;
/// Quotes via `v6/finance/quote`.
pub mod quote;
/// Symbol-bound convenience facade.
pub mod ticker;

pub use crate::core::{
    Backoff, Interval, Range, RetryConfig, YhfClient, YhfClientBuilder, YhfError,
};
pub use chart::{
    ChartBuilder, ChartResponse, Comparison, DividendEvent, MarketRange, PriceHistory, StockMeta,
    TradingPeriod, TradingPeriods,
};
pub use history::{Candle, HistoryBuilder};
pub use insights::{
    Insights, InsightsBuilder, KeyTechnicals, Outlook, Recommendation, SignificantDevelopment,
    Valuation,
};
pub use quote::EarningsData;
pub use ticker::Ticker;
