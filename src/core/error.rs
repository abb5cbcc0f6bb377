use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum YhfError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not valid JSON for the expected shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// No API key was configured on the client.
    #[error("missing API key: set one on the builder or via YHF_API_KEY")]
    MissingApiKey,

    /// The API rejected the key (HTTP 401 or 403).
    #[error("Unauthorized (check the API key) at {url}")]
    Unauthorized {
        /// The URL that was rejected.
        url: String,
    },

    /// The requested resource was not found (HTTP 404).
    #[error("Not found at {url}")]
    NotFound {
        /// The URL that returned 404.
        url: String,
    },

    /// The request was rate-limited by the server (HTTP 429).
    #[error("Rate limited at {url}")]
    RateLimited {
        /// The URL that was rate-limited.
        url: String,
    },

    /// The server returned a 5xx error.
    #[error("Server error {status} at {url}")]
    ServerError {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The API answered with an error object inside a successful response.
    #[error("API error: {code} - {description}")]
    Api {
        /// The error code reported by the API.
        code: String,
        /// The human readable description.
        description: String,
    },

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}

impl YhfError {
    /// Maps a non-success HTTP status to the matching variant.
    pub(crate) fn from_status(status: u16, url: &url::Url) -> Self {
        let url = url.to_string();
        match status {
            401 | 403 => Self::Unauthorized { url },
            404 => Self::NotFound { url },
            429 => Self::RateLimited { url },
            500..=599 => Self::ServerError { status, url },
            _ => Self::Status { status, url },
        }
    }
}
