//! Typed error enum for the remote client.

use thiserror::Error;
use unidir_core::DirectoryError;

/// Errors from the remote search API.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

/// Every remote failure is a store-level read failure from the caller's side.
impl From<RemoteError> for DirectoryError {
    fn from(err: RemoteError) -> Self {
        Self::Query(err.to_string())
    }
}
