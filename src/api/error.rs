//! Error classification for REST calls.
//!
//! Every transport outcome is sorted into one of three kinds at the client
//! boundary so the store never has to inspect raw HTTP responses.

use std::fmt;

use thiserror::Error;

/// Errors returned by the REST gateways.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (connect, timeout, TLS).
    #[error("Network error: {detail}")]
    Network { detail: String },

    /// The backend rejected the request (4xx).
    #[error("Request rejected ({status}): {detail}")]
    Validation { status: u16, detail: String },

    /// The backend failed, or answered with something we cannot use.
    #[error("Server error ({status}): {detail}")]
    Server { status: u16, detail: String },
}

/// Coarse error kind exposed to the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Network,
    Validation,
    Server,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ApiErrorKind::Network => "network",
            ApiErrorKind::Validation => "validation",
            ApiErrorKind::Server => "server",
        };
        f.write_str(label)
    }
}

impl ApiError {
    /// Classify a non-success HTTP status with its body text.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let detail = body.into();
        let detail = if detail.trim().is_empty() {
            format!("HTTP {}", status)
        } else {
            detail
        };
        if (400..500).contains(&status) {
            ApiError::Validation { status, detail }
        } else {
            ApiError::Server { status, detail }
        }
    }

    /// A success response whose body could not be decoded.
    pub fn decode(status: u16, err: impl fmt::Display) -> Self {
        ApiError::Server {
            status,
            detail: format!("invalid response body: {}", err),
        }
    }

    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::Network { .. } => ApiErrorKind::Network,
            ApiError::Validation { .. } => ApiErrorKind::Validation,
            ApiError::Server { .. } => ApiErrorKind::Server,
        }
    }

    /// HTTP status, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Network { .. } => None,
            ApiError::Validation { status, .. } | ApiError::Server { status, .. } => Some(*status),
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            ApiError::Network { detail }
            | ApiError::Validation { detail, .. }
            | ApiError::Server { detail, .. } => detail,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ApiError::from_status(status.as_u16(), err.to_string()),
            None if err.is_decode() => ApiError::decode(0, err),
            None => ApiError::Network {
                detail: err.to_string(),
            },
        }
    }
}
