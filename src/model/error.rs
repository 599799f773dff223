use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error reported by the storage service itself, e.g. bucket not found or
/// bucket not empty. Always returned inside a [`StorageResponse`].
///
/// [`StorageResponse`]: crate::model::response::StorageResponse
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("storage error ({status}): {message}")]
pub struct StorageError {
    /// HTTP status of the response that carried the error
    pub status: u16,
    /// `statusCode` as reported in the payload, if any
    pub status_code: Option<String>,
    /// Short error code, e.g. `not_found`
    pub error: Option<String>,
    pub message: String,
}

/// Failure not attributable to the storage service. Never enveloped.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("unexpected response ({status}): {body}")]
    UnexpectedResponse { status: StatusCode, body: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid header name: {0}")]
    InvalidHeaderName(#[from] reqwest::header::InvalidHeaderName),

    #[error("invalid header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error("failed to parse header: {0}")]
    MalformedHeader(String),
}
