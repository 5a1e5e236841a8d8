//! Errors for API answers the dashboard cannot read.

use thiserror::Error;

/// The server answered with 2xx, but the body is not usable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PayloadError {
    /// Body is not valid JSON at all
    #[error("Invalid JSON from {endpoint}: {message}")]
    InvalidJson { endpoint: String, message: String },

    /// JSON is valid but `data` does not have the expected shape
    #[error("Unexpected shape for {endpoint}: expected {expected}")]
    UnexpectedShape {
        endpoint: String,
        expected: &'static str,
    },
}

impl PayloadError {
    pub fn error_code(&self) -> &'static str {
        match self {
            PayloadError::InvalidJson { .. } => "E_PAYLOAD_JSON",
            PayloadError::UnexpectedShape { .. } => "E_PAYLOAD_SHAPE",
        }
    }
}
