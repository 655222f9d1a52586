//! claimcheck error types

use std::time::Duration;

/// claimcheck error types
#[derive(Debug, thiserror::Error)]
pub enum ClaimCheckError {
    // Transport errors
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    // Service errors
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("model not found: {0}")]
    ModelNotFound(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The submitted claim was empty or whitespace only.
    #[error("claim text is empty")]
    EmptyClaim,

    #[error("empty response from model")]
    EmptyResponse,

    #[error("data error: {0}")]
    DataError(String),

    // Configuration errors
    #[error("no provider configured for {0}")]
    NoProvider(&'static str),

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ClaimCheckError {
    /// Whether the error happened before any HTTP response was received
    /// (connection failure, DNS, timeout).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Timeout(_))
    }

    /// HTTP status reported by the remote service, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::RateLimited { .. } => Some(429),
            Self::AuthenticationFailed => Some(401),
            Self::ModelNotFound(_) => Some(404),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClaimCheckError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClaimCheckError::Timeout(err.to_string())
        } else if err.is_decode() {
            ClaimCheckError::DataError(err.to_string())
        } else {
            ClaimCheckError::Http(err.to_string())
        }
    }
}

/// Result type alias for claimcheck operations
pub type Result<T> = std::result::Result<T, ClaimCheckError>;
