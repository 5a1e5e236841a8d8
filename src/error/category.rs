//! Error category classification for unified error handling.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS or timeout problems. Generally transient.
    Network,

    /// The API answered with a server-side failure (HTTP 5xx).
    Server,

    /// The API answered, but not with something the dashboard can read.
    Payload,

    /// The request itself was wrong (HTTP 4xx, bad URL).
    Client,

    /// Missing or invalid settings.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient
    /// and the operation can be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Payload => "payload",
            ErrorCategory::Client => "client",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check that the API server is reachable and try again",
            ErrorCategory::Server => {
                "The API server is having issues. Please try again later"
            }
            ErrorCategory::Payload => {
                "The API returned unexpected data. Check that client and server versions match"
            }
            ErrorCategory::Client => "Check the request parameters",
            ErrorCategory::Configuration => "Check the TVDASH_* environment variables",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
