//! Common test utilities for integration tests.
//!
//! This module provides reusable fixtures, mock configurations and
//! helper functions for integration testing the store and API client.
//!
//! # Example
//!
//! ```ignore
//! use common::{healthy_api, mock_store};
//!
//! let store = mock_store(healthy_api().build());
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use serde_json::{json, Value};
use std::sync::Arc;
use tvdash::api::ShowsApi;
use tvdash::state::ShowStore;

/// One show record as the API sends it.
pub fn show_json(title: &str, rate: Value, year: i64, categories: &[&str]) -> Value {
    let slug = title.to_lowercase().replace(' ', "-");
    json!({
        "title": title,
        "url": format!("https://movie.douban.com/subject/{}/", slug),
        "cover": format!("https://img.example/{}.jpg", slug),
        "rate": rate,
        "description": format!("About {}", title),
        "category": categories,
        "directors": ["Someone"],
        "actors": ["Somebody"],
        "year": year,
        "update_time": "2025-03-01"
    })
}

/// Envelope around a page of show records.
pub fn shows_envelope(items: Vec<Value>) -> String {
    json!({
        "code": 200,
        "message": "获取热门电视剧列表成功",
        "data": {"total": items.len(), "page": 1, "page_size": 1000, "items": items}
    })
    .to_string()
}

/// Envelope around a distribution.
pub fn stats_envelope(pairs: &[(&str, f64)]) -> String {
    let data: Vec<Value> = pairs
        .iter()
        .map(|(name, value)| json!({"name": name, "value": value}))
        .collect();
    json!({"code": 200, "message": "ok", "data": data}).to_string()
}

/// The two-show dataset used across the store tests.
pub fn scenario_items() -> Vec<Value> {
    vec![
        show_json("A", json!(9.1), 2020, &["Drama"]),
        show_json("B", json!("7.5"), 2023, &["Comedy"]),
    ]
}

/// Mock API answering every endpoint with well-formed data.
pub fn healthy_api() -> MockHttpConfig {
    MockHttpConfig::new()
        .with_json_response(
            "/api/douban/rate-stats",
            200,
            &stats_envelope(&[("0-5", 0.0), ("7-8", 1.0), ("9-10", 1.0)]),
        )
        .with_json_response(
            "/api/douban/category-stats",
            200,
            &stats_envelope(&[("Drama", 1.0), ("Comedy", 1.0)]),
        )
        .with_json_response(
            "/api/douban/year-stats",
            200,
            &stats_envelope(&[("2020", 1.0), ("2023", 1.0)]),
        )
        .with_json_response("/api/douban/area-stats", 200, &stats_envelope(&[("US", 2.0)]))
        .with_json_response("/api/douban/hot-tv", 200, &shows_envelope(scenario_items()))
}

/// Store over a mock client.
pub fn mock_store(client: MockHttpClient) -> Arc<ShowStore<MockHttpClient>> {
    Arc::new(ShowStore::new(ShowsApi::new(client, MOCK_BASE_URL)))
}
