//! Response envelope shared by every API endpoint.

use serde::{Deserialize, Serialize};

use super::{deserialize_nullable_string, Show};

/// `{ "code": 200, "message": "...", "data": ... }`
///
/// `data` is kept as raw JSON: the store checks its shape itself and falls
/// back to empty/unchanged values when it is not what it expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default = "default_code")]
    pub code: i64,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub message: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

fn default_code() -> i64 {
    200
}

impl ApiEnvelope {
    /// `data` when it is a JSON array.
    pub fn data_array(&self) -> Option<&Vec<serde_json::Value>> {
        self.data.as_array()
    }

    /// `data.items` when present and not null.
    pub fn data_items(&self) -> Option<&serde_json::Value> {
        self.data.get("items").filter(|items| !items.is_null())
    }
}

/// One page of the show list (`data` of the hot-tv endpoint).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShowPage {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub items: Vec<Show>,
}

/// Service description served at the API root.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiInfo {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub api_name: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub version: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub documentation: String,
}
