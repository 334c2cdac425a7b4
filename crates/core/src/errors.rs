use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::validation::ValidationErrors;

#[derive(Error, Debug)]
pub enum ClinicError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Backend error (status {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Backend { status: u16, message: Option<String> },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Internal error: {0}")]
    Internal(#[from] eyre::Report),
}

pub type ClinicResult<T> = Result<T, ClinicError>;

/// Error body returned by the backend on failed writes.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ClinicError {
    /// Builds a backend error from a non-success response, keeping the
    /// body's `message` when it has one.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.trim().is_empty());

        ClinicError::Backend { status, message }
    }

    /// The text shown to the user for this error.
    ///
    /// Backend messages pass through verbatim; anything without one falls
    /// back to the operation's generic message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClinicError::Backend {
                message: Some(message),
                ..
            } => message.clone(),
            ClinicError::Validation(errors) => errors.to_string(),
            ClinicError::Timeout(_) => "Request timed out".to_string(),
            _ => fallback.to_string(),
        }
    }

    /// True when the failure happened before or outside the network.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ClinicError::Validation(_) | ClinicError::NotFound(_) | ClinicError::InvalidState(_)
        )
    }
}
