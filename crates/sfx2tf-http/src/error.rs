//! Transport and status errors

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HttpError>;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Request could not be completed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("No answer within {0:?}")]
    Timeout(Duration),

    #[error("Invalid URL {0}")]
    InvalidUrl(String),

    #[error("Unusable proxy: {0}")]
    InvalidProxy(String),

    #[error("Header {name} cannot be sent: {message}")]
    InvalidHeader { name: String, message: String },

    /// Non-2xx answer; `message` holds the start of the body
    #[error("HTTP {status}: {message}")]
    HttpStatus { status: StatusCode, message: String },

    #[error("Gave up after {attempts} attempts, last failure: {last_error}")]
    RetryLimitExceeded { attempts: u32, last_error: String },

    #[error("reqwest client could not be built: {0}")]
    BuildError(String),
}

impl HttpError {
    /// Worth another attempt: timeouts, connection trouble, 5xx and 429
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout(_) => true,
            Self::RequestFailed(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            Self::HttpStatus { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            _ => false,
        }
    }

    /// The endpoint does not know the id
    ///
    /// 400 counts as well as 404: the v2 API answers 400 for ids that only
    /// exist under the v1 schema.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::HttpStatus {
                status: StatusCode::NOT_FOUND | StatusCode::BAD_REQUEST,
                ..
            }
        )
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::RequestFailed(e) => e.status(),
            _ => None,
        }
    }
}
