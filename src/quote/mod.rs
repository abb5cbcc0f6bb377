//! Quotes from `v6/finance/quote/?symbol=`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::core::client::constants::ENDPOINT_QUOTE;
use crate::core::conversions::ts_to_datetime;
use crate::core::{RetryConfig, YhfClient, YhfError};

#[derive(Deserialize)]
struct QuoteEnvelope {
    #[serde(rename = "quoteResponse")]
    quote_response: Option<QuoteResponse>,
}

#[derive(Deserialize)]
struct QuoteResponse {
    result: Option<Vec<QuoteNode>>,
    error: Option<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteNode {
    #[serde(default, deserialize_with = "de_i64_from_any_number")]
    earnings_timestamp: Option<i64>,
    #[serde(default, deserialize_with = "de_i64_from_any_number")]
    earnings_timestamp_start: Option<i64>,
    #[serde(default, deserialize_with = "de_i64_from_any_number")]
    earnings_timestamp_end: Option<i64>,
}

/// Accepts integers and integer-valued floats (e.g. `1714075200.0`).
#[allow(clippy::cast_possible_truncation)]
fn de_i64_from_any_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AnyNumber {
        I64(i64),
        F64(f64),
    }

    match Option::<AnyNumber>::deserialize(deserializer)? {
        Some(AnyNumber::I64(i)) => Ok(Some(i)),
        Some(AnyNumber::F64(f)) if f.is_finite() && f.fract() == 0.0 => Ok(Some(f as i64)),
        Some(AnyNumber::F64(f)) => Err(serde::de::Error::custom(format!(
            "cannot convert float {f} to a timestamp"
        ))),
        None => Ok(None),
    }
}

/// Earnings window and date taken from a quote.
///
/// `earnings_start` / `earnings_end` are Unix seconds as reported, `0` when absent;
/// `earnings_date` is the epoch when the API has no earnings timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsData {
    pub earnings_start: i64,
    pub earnings_end: i64,
    pub earnings_date: DateTime<Utc>,
}

impl EarningsData {
    /// `earnings_start` as an instant, `None` when it was absent.
    pub fn start_datetime(&self) -> Option<DateTime<Utc>> {
        (self.earnings_start != 0)
            .then_some(self.earnings_start)
            .and_then(ts_to_datetime)
    }

    /// `earnings_end` as an instant, `None` when it was absent.
    pub fn end_datetime(&self) -> Option<DateTime<Utc>> {
        (self.earnings_end != 0)
            .then_some(self.earnings_end)
            .and_then(ts_to_datetime)
    }

    /// Extract earnings data from the first result of a quote body.
    ///
    /// # Errors
    ///
    /// [`YhfError::Json`] for malformed bodies, [`YhfError::Api`] when
    /// `quoteResponse.error` is set, [`YhfError::Data`] without any result.
    pub fn from_quote_json(body: &str) -> Result<Self, YhfError> {
        let env: QuoteEnvelope = serde_json::from_str(body)?;
        let resp = env
            .quote_response
            .ok_or_else(|| YhfError::Data("missing quoteResponse".into()))?;

        if let Some(err) = resp.error.filter(|v| !v.is_null()) {
            return Err(api_error(&err));
        }

        let node = resp
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| YhfError::Data("empty quote result".into()))?;

        Ok(Self {
            earnings_start: node.earnings_timestamp_start.unwrap_or(0),
            earnings_end: node.earnings_timestamp_end.unwrap_or(0),
            earnings_date: node
                .earnings_timestamp
                .and_then(ts_to_datetime)
                .unwrap_or_default(),
        })
    }
}

fn api_error(v: &Value) -> YhfError {
    let field = |k: &str| v.get(k).and_then(Value::as_str).map(str::to_owned);
    YhfError::Api {
        code: field("code").unwrap_or_default(),
        description: field("description").unwrap_or_else(|| v.to_string()),
    }
}

pub(crate) async fn fetch_quote_body(
    client: &YhfClient,
    symbol: &str,
    retry_override: Option<&RetryConfig>,
) -> Result<String, YhfError> {
    client
        .get_body(
            ENDPOINT_QUOTE,
            &[("symbol", symbol)],
            "quote",
            symbol,
            retry_override,
        )
        .await
}

/// Fetches the quote for `symbol` and returns the JSON body untouched.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or a non-JSON body.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn quote(client: &YhfClient, symbol: &str) -> Result<Value, YhfError> {
    Ok(serde_json::from_str(
        &fetch_quote_body(client, symbol, None).await?,
    )?)
}

/// Fetches the quote for `symbol` and extracts its earnings fields.
///
/// # Errors
///
/// See [`EarningsData::from_quote_json`]; transport and status errors as for [`quote`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn earnings(client: &YhfClient, symbol: &str) -> Result<EarningsData, YhfError> {
    EarningsData::from_quote_json(&fetch_quote_body(client, symbol, None).await?)
}
