use serde::Serialize;
use thiserror::Error;

/// Failure of a single catalog request.
///
/// Every variant is terminal for the call that produced it: nothing at the
/// client or aggregation layer retries.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FetchError {
    #[error("Invalid page number {value}: pages start at 1")]
    InvalidPage { value: i64 },

    #[error("Invalid page count {count}: at least one page must be requested")]
    InvalidPageCount { count: u32 },

    #[error("Invalid query: {message}")]
    InvalidQuery { message: String },

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Resource not found: {message}")]
    NotFound { message: String },

    #[error("Request timed out: {message}")]
    Timeout { message: String },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Malformed response body: {message}")]
    Decode { message: String },

    #[error("Invalid response payload: {message}")]
    InvalidPayload { message: String },
}

impl FetchError {
    /// HTTP status attached to the failure, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            FetchError::NotFound { .. } => Some(404),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            FetchError::InvalidQuery { message }
            | FetchError::Http { message, .. }
            | FetchError::NotFound { message }
            | FetchError::Timeout { message }
            | FetchError::Transport { message }
            | FetchError::Decode { message }
            | FetchError::InvalidPayload { message } => message.clone(),
            other => other.to_string(),
        }
    }

    /// True when the request was refused locally and never reached the network.
    pub fn is_rejected_locally(&self) -> bool {
        matches!(
            self,
            FetchError::InvalidPage { .. }
                | FetchError::InvalidPageCount { .. }
                | FetchError::InvalidQuery { .. }
        )
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout {
                message: err.to_string(),
            }
        } else if let Some(status) = err.status() {
            FetchError::Http {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else if err.is_decode() {
            FetchError::Decode {
                message: err.to_string(),
            }
        } else {
            FetchError::Transport {
                message: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode {
            message: err.to_string(),
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
