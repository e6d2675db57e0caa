//! Errors raised while talking to the Functions API

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Why an invocation or status read did not produce an execution record
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never got an HTTP answer (DNS, connection, TLS, timeout)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The platform answered with a non-2xx status
    #[error("platform rejected the request (status {status}): {message}")]
    Rejected { status: u16, message: String },

    /// The function or execution id does not exist in the project
    #[error("not found: {0}")]
    NotFound(String),

    /// The answer was not an execution record
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Caught before sending
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// HTTP status the platform answered with, if it answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::NotFound(_) => Some(404),
            _ => None,
        }
    }

    /// Missing or invalid credentials: bad API key, key without the
    /// executions scopes, or a project id the key does not belong to
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
