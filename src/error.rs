//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Price feed error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Malformed response body: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Price feed retrieval errors.
///
/// Either kind aborts catalog construction; there is never a partial catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Non-success status or connection failure.
    #[error("Failed to fetch prices: {0}")]
    Network(String),

    /// The body was not a well-formed list of price records.
    #[error("Malformed price feed: {0}")]
    Parse(String),
}

impl From<HttpError> for FetchError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Decode(e) => FetchError::Parse(e.to_string()),
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) if e.is_decode() => FetchError::Parse(e.to_string()),
            other => FetchError::Network(other.to_string()),
        }
    }
}
