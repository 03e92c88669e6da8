use thiserror::Error;

/// Failures surfaced by controller operations.
///
/// Every bridge request reports its outcome to the caller; nothing is
/// retried.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid bridge url '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("bridge url must start with http:// or https://: '{url}'")]
    UnsupportedScheme { url: String },
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        source: reqwest::Error,
    },
    #[error("bridge answered {endpoint} with status {status}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },
    #[error("failed to read mode response body: {0}")]
    Body(reqwest::Error),
}
