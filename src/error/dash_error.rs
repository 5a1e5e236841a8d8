//! Unified error type for the dashboard.
//!
//! `DashError` consolidates the domain-specific error types into a single
//! enum so every layer can categorize and report errors the same way.

use std::fmt;

use super::category::ErrorCategory;
use super::context::ErrorContext;
use super::network::NetworkError;
use super::payload::PayloadError;
use crate::traits::HttpError;

/// Unified error type for the dashboard.
#[derive(Debug)]
pub enum DashError {
    /// Transport-level failure (connection, timeout, non-2xx).
    Network(NetworkError),

    /// 2xx answer whose body could not be used.
    Payload(PayloadError),

    /// Invalid configuration.
    Config { message: String },

    /// Wrapped error with additional context.
    WithContext {
        error: Box<DashError>,
        context: ErrorContext,
    },
}

impl DashError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            DashError::Network(err) => {
                if err.is_server_side() {
                    ErrorCategory::Server
                } else if matches!(
                    err,
                    NetworkError::HttpStatus { .. } | NetworkError::InvalidUrl { .. }
                ) {
                    ErrorCategory::Client
                } else {
                    ErrorCategory::Network
                }
            }
            DashError::Payload(_) => ErrorCategory::Payload,
            DashError::Config { .. } => ErrorCategory::Configuration,
            DashError::WithContext { error, .. } => error.category(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            DashError::Network(err) => err.is_retryable(),
            DashError::Payload(_) => false,
            DashError::Config { .. } => false,
            DashError::WithContext { error, .. } => error.is_retryable(),
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            DashError::Network(err) => err.user_message(),
            DashError::Payload(err) => err.to_string(),
            DashError::Config { message } => format!("Configuration error: {}", message),
            DashError::WithContext { error, .. } => error.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            DashError::Network(err) => err.error_code(),
            DashError::Payload(err) => err.error_code(),
            DashError::Config { .. } => "E_CONFIG",
            DashError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        DashError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    /// Get the context if this error has one attached.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            DashError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the inner error without context.
    pub fn inner(&self) -> &DashError {
        match self {
            DashError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for DashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashError::Network(err) => write!(f, "{}", err),
            DashError::Payload(err) => write!(f, "{}", err),
            DashError::Config { message } => write!(f, "Configuration error: {}", message),
            DashError::WithContext { error, context } => {
                write!(f, "{} ({})", error, context)
            }
        }
    }
}

impl std::error::Error for DashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashError::Network(err) => Some(err),
            DashError::Payload(err) => Some(err),
            DashError::Config { .. } => None,
            DashError::WithContext { error, .. } => error.source(),
        }
    }
}

impl From<NetworkError> for DashError {
    fn from(err: NetworkError) -> Self {
        DashError::Network(err)
    }
}

impl From<PayloadError> for DashError {
    fn from(err: PayloadError) -> Self {
        DashError::Payload(err)
    }
}

impl From<HttpError> for DashError {
    fn from(err: HttpError) -> Self {
        DashError::Network(err.into())
    }
}
