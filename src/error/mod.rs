//! Unified error handling for the dashboard.
//!
//! - **Error Categories**: high-level classification for handling decisions
//! - **Domain-specific Errors**: network (transport) and payload (shape) errors
//! - **Unified Error Type**: `DashError` consolidates all error types
//! - **Error Context**: operation/endpoint information attached to errors
//! - **Result Type Alias**: `DashResult<T>`
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, timeout | Yes |
//! | Server | API 5xx | Yes |
//! | Payload | Unreadable 2xx body | No |
//! | Client | API 4xx, bad URL | No |
//! | Configuration | Bad settings | No |

mod category;
mod context;
mod dash_error;
mod network;
mod payload;
mod result;

pub use category::ErrorCategory;
pub use context::ErrorContext;
pub use dash_error::DashError;
pub use network::NetworkError;
pub use payload::PayloadError;
pub use result::{DashResult, ResultExt};
