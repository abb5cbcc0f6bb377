//! Public client surface + builder.
//! Internals are split into `retry` (backoff policy) and `constants` (UA, endpoints, headers).

pub(crate) mod constants;
mod retry;

pub use retry::{Backoff, RetryConfig};

use crate::core::{YhfError, net};
use constants::{API_KEY_HEADER, DEFAULT_BASE_URL, ENV_API_KEY, ENV_BASE_URL, USER_AGENT};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Holds the API key, the base URL and a configured HTTP client.
///
/// Cloning is cheap; the underlying `reqwest::Client` is reference counted.
#[derive(Clone)]
pub struct YhfClient {
    http: Client,
    api_key: String,
    base_url: Url,
    retry: RetryConfig,
}

impl fmt::Debug for YhfClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YhfClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl YhfClient {
    /// Create a new builder.
    pub fn builder() -> YhfClientBuilder {
        YhfClientBuilder::default()
    }

    /// Build a client with default settings and the given API key.
    ///
    /// # Errors
    ///
    /// Returns [`YhfError::MissingApiKey`] if the key is blank.
    pub fn new(api_key: impl Into<String>) -> Result<Self, YhfError> {
        Self::builder().api_key(api_key).build()
    }

    /// Build a client from `YHF_API_KEY` (required) and `YHF_BASE_URL` (optional).
    ///
    /// # Errors
    ///
    /// Returns [`YhfError::MissingApiKey`] if `YHF_API_KEY` is unset or blank, and
    /// [`YhfError::Url`] if `YHF_BASE_URL` does not parse.
    pub fn from_env() -> Result<Self, YhfError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, YhfError> {
        let mut builder = Self::builder();
        if let Some(key) = lookup(ENV_API_KEY) {
            builder = builder.api_key(key);
        }
        if let Some(base) = lookup(ENV_BASE_URL) {
            builder = builder.base_url(Url::parse(&base)?);
        }
        builder.build()
    }

    /// The base URL every endpoint is joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// Resolve `endpoint` against the base URL and append `params` as query pairs.
    pub(crate) fn endpoint_url(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<Url, YhfError> {
        let mut url = self.base_url.join(endpoint)?;
        if !params.is_empty() {
            let mut qp = url.query_pairs_mut();
            for (k, v) in params {
                qp.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// A GET request carrying the API key header.
    pub(crate) fn get(&self, url: Url) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .header("accept", "application/json")
    }

    /// Issue an authenticated GET for `endpoint` and return the body of a 2xx response.
    ///
    /// `label` and `symbol` name the fixture written in `test-mode` recording.
    pub(crate) async fn get_body(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        label: &str,
        symbol: &str,
        retry_override: Option<&RetryConfig>,
    ) -> Result<String, YhfError> {
        let url = self.endpoint_url(endpoint, params)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(url = %url, "GET");

        let resp = match self.send_with_retry(self.get(url.clone()), retry_override).await {
            Ok(resp) => resp,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(url = %url, error = %e, "request failed");
                return Err(e);
            }
        };

        let status = resp.status();
        if !status.is_success() {
            #[cfg(feature = "tracing")]
            tracing::warn!(url = %url, status = status.as_u16(), "non-success status");
            return Err(YhfError::from_status(status.as_u16(), &url));
        }

        Ok(net::get_text(resp, label, symbol, "json").await?)
    }
}

/* ----------------------- Builder ----------------------- */

/// Configures and builds a [`YhfClient`].
#[derive(Default)]
pub struct YhfClientBuilder {
    api_key: Option<String>,
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
}

impl YhfClientBuilder {
    /// Set the API key sent in the `x-api-key` header.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the API base (default `https://yfapi.net/`).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Replace the retry policy.
    #[must_use]
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Toggle retries while keeping the rest of the current policy.
    #[must_use]
    pub fn retry_enabled(mut self, enabled: bool) -> Self {
        let mut cfg = self.retry.take().unwrap_or_default();
        cfg.enabled = enabled;
        self.retry = Some(cfg);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// - [`YhfError::MissingApiKey`] when no non-blank key was set.
    /// - [`YhfError::Url`] when the base URL cannot carry a path.
    /// - [`YhfError::Http`] when the HTTP client cannot be constructed.
    pub fn build(self) -> Result<YhfClient, YhfError> {
        let api_key = self
            .api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(YhfError::MissingApiKey)?;

        let base_url = normalize_base(match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        })?;

        let mut httpb =
            Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(YhfClient {
            http: httpb.build()?,
            api_key,
            base_url,
            retry: self.retry.unwrap_or_default(),
        })
    }
}

/// `Url::join` drops the last path segment unless the base ends in `/`.
fn normalize_base(mut url: Url) -> Result<Url, YhfError> {
    if url.cannot_be_a_base() {
        return Err(YhfError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
