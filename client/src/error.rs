//! Client error handling
//!
//! Non-2xx responses surface as [`ClientError::RequestFailed`] carrying the
//! status line; the response body is not inspected for failures. Transport
//! failures propagate unmodified from reqwest. There is no local recovery,
//! retry, or fallback.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the API client
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("API request failed: {status}")]
    RequestFailed { status: StatusCode },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid bearer token: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
