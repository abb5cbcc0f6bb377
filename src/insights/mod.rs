mod model;
mod wire;

pub use model::{
    Insights, KeyTechnicals, Outlook, Recommendation, SignificantDevelopment, Valuation,
};

use serde_json::Value;

use crate::core::client::constants::ENDPOINT_INSIGHTS;
use crate::core::{RetryConfig, YhfClient, YhfError};
use wire::InsightsEnvelope;

/// A builder for `v6/finance/insights?symbol=...`.
#[derive(Debug, Clone)]
pub struct InsightsBuilder {
    client: YhfClient,
    symbol: String,
    retry_override: Option<RetryConfig>,
}

impl InsightsBuilder {
    /// Creates a new `InsightsBuilder` for a given symbol.
    pub fn new(client: &YhfClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            retry_override: None,
        }
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
                ENDPOINT_INSIGHTS,
                &[("symbol", self.symbol.as_str())],
                "insights",
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

    /// Fetches and decodes the insights.
    ///
    /// # Errors
    ///
    /// As [`Self::fetch_raw`], plus the errors of [`Insights::from_json`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn fetch(&self) -> Result<Insights, YhfError> {
        Insights::from_json(&self.fetch_body().await?)
    }
}

impl Insights {
    /// Decode an insights body.
    ///
    /// # Errors
    ///
    /// [`YhfError::Json`] for malformed bodies, [`YhfError::Api`] when
    /// `finance.error` is set, [`YhfError::Data`] when there is no result.
    pub fn from_json(body: &str) -> Result<Self, YhfError> {
        let env: InsightsEnvelope = serde_json::from_str(body)?;
        let finance = env
            .finance
            .ok_or_else(|| YhfError::Data("missing finance".into()))?;

        if let Some(err) = finance.error.filter(|v| !v.is_null()) {
            let field = |k: &str| err.get(k).and_then(Value::as_str).map(str::to_owned);
            return Err(YhfError::Api {
                code: field("code").unwrap_or_default(),
                description: field("description").unwrap_or_else(|| err.to_string()),
            });
        }

        finance
            .result
            .map(Self::from)
            .ok_or_else(|| YhfError::Data("missing insights result".into()))
    }
}
