//! Centralized constants for default endpoints, headers and UA.

/// Default UA sent with every request unless overridden on the builder.
pub(crate) const USER_AGENT: &str = concat!("yhf-rs/", env!("CARGO_PKG_VERSION"));

/// YH Finance API base; endpoint paths are joined onto it.
pub(crate) const DEFAULT_BASE_URL: &str = "https://yfapi.net/";

/// Header carrying the API key.
pub(crate) const API_KEY_HEADER: &str = "x-api-key";

/// Environment variable read by `YhfClient::from_env`.
pub(crate) const ENV_API_KEY: &str = "YHF_API_KEY";

/// Optional environment override for the base URL.
pub(crate) const ENV_BASE_URL: &str = "YHF_BASE_URL";

/// Quote endpoint (symbol goes in the query string).
pub(crate) const ENDPOINT_QUOTE: &str = "v6/finance/quote/";

/// Chart endpoint prefix (symbol is appended to the path).
pub(crate) const ENDPOINT_CHART: &str = "v8/finance/chart/";

/// Chart endpoint addressed with `?symbol=` instead of a path segment.
pub(crate) const ENDPOINT_HISTORY: &str = "v8/finance/chart";

/// Insights endpoint (symbol goes in the query string).
pub(crate) const ENDPOINT_INSIGHTS: &str = "v6/finance/insights";
