//! Error types for console API requests
//!
//! Every failure the transport can produce is one of two kinds: the server
//! answered with a non-success status, or no usable answer arrived at all.
//! The error is built once in the transport and propagated unchanged by the
//! service layer.

use thiserror::Error;

/// Result type for console API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Transport error.
///
/// `Network` covers connection failures, timeouts and undecodable
/// responses; it always reports status `0` and code `NETWORK_ERROR`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server responded with a non-success status
    #[error("{message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Application error code from the response body, if any
        code: Option<String>,
        /// Server-provided message, or a generic one naming the status
        message: String,
    },

    /// The request never produced a usable response
    #[error("{message}")]
    Network {
        /// Underlying failure description
        message: String,
    },
}

impl ApiError {
    /// Code carried by every network error.
    pub const NETWORK_ERROR: &'static str = "NETWORK_ERROR";

    /// Build an HTTP error, falling back to a generic message.
    pub fn http(status: u16, code: Option<String>, message: Option<String>) -> Self {
        ApiError::Http {
            status,
            code,
            message: message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| format!("HTTP error! status: {}", status)),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network {
            message: message.into(),
        }
    }

    /// HTTP status code, `0` for network errors.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Http { status, .. } => *status,
            ApiError::Network { .. } => 0,
        }
    }

    /// Application error code.
    pub fn code(&self) -> Option<&str> {
        match self {
            ApiError::Http { code, .. } => code.as_deref(),
            ApiError::Network { .. } => Some(Self::NETWORK_ERROR),
        }
    }

    /// Message suitable for display.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Http { message, .. } | ApiError::Network { message } => message,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network { .. })
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == 404
    }

    /// Check if this error is on the server side (5xx).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::network(format!("Request timed out: {}", err))
        } else {
            ApiError::network(err.to_string())
        }
    }
}
