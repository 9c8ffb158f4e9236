//! Errors returned by the token client.

use reqwest::StatusCode;
use thiserror::Error;

/// Every failure is scoped to a single call; the client stays usable afterwards.
#[derive(Error, Debug)]
pub enum SethealthError {
    /// Building, sending or reading the HTTP exchange failed (DNS, refused
    /// connection, TLS, timeout, broken body stream).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with anything other than 200. The response body is
    /// never inspected.
    #[error("invalid credentials (status {status})")]
    InvalidCredentials { status: StatusCode },

    /// A 200 response whose body is not `{"token": "<string>"}`.
    #[error("failed to decode token response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SethealthError {
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, SethealthError::InvalidCredentials { .. })
    }

    /// HTTP status of a rejected request. Only `InvalidCredentials` carries one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SethealthError::InvalidCredentials { status } => Some(*status),
            SethealthError::Transport(_) | SethealthError::Decode(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SethealthError>;
