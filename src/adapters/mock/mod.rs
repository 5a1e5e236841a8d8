//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses and gates

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
