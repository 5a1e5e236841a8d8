//! Mock implementations for test fixtures.
//!
//! This module re-exports the mock implementations from `tvdash::adapters::mock`
//! and provides additional test-specific mock configurations.

pub use tvdash::adapters::mock::{MockHttpClient, MockResponse};
pub use tvdash::traits::{Headers, HttpClient, HttpError, Response};

use bytes::Bytes;

/// Base URL every mock client answers under.
pub const MOCK_BASE_URL: &str = "http://api.test";

/// Configuration for setting up mock HTTP responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    /// Creates a new mock HTTP configuration.
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Configures a JSON response for an API path (matched as a prefix).
    pub fn with_json_response(self, path: &str, status: u16, json: &str) -> Self {
        self.client.set_response(
            &format!("{}{}", MOCK_BASE_URL, path),
            MockResponse::Success(Response::new(status, Bytes::from(json.to_string()))),
        );
        self
    }

    /// Configures a transport failure for an API path.
    pub fn with_transport_error(self, path: &str, error: HttpError) -> Self {
        self.client.set_response(
            &format!("{}{}", MOCK_BASE_URL, path),
            MockResponse::Error(error),
        );
        self
    }

    /// Configures a default success response for unmatched URLs.
    pub fn with_default_success(self, status: u16, body: &str) -> Self {
        self.client
            .set_default_response(MockResponse::Success(Response::new(
                status,
                Bytes::from(body.to_string()),
            )));
        self
    }

    /// Builds the configured MockHttpClient.
    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
