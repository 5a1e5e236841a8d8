//! Startup configuration and process setup.
//!
//! - [`config`] - `DashConfig` from environment and builder overrides
//! - [`logging`] - tracing subscriber installation

pub mod config;
pub mod logging;

pub use config::DashConfig;
pub use logging::configure_logging;
