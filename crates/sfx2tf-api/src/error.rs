//! API error types

use sfx2tf_http::HttpError;
use thiserror::Error;

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// SignalFx API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport or status failure reported by the HTTP layer
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Response body did not match the expected shape
    #[error("Failed to decode {resource} {id}: {source}")]
    Decode {
        resource: &'static str,
        id: String,
        #[source]
        source: serde_json::Error,
    },

    /// Detector body matched neither the current nor the legacy schema
    #[error("Detector {id} has an unrecognized schema")]
    UnrecognizedSchema { id: String },

    /// Base URL cannot carry path segments
    #[error("Invalid API URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// Whether the server reported the resource as unknown
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Http(e) if e.is_not_found())
    }
}
