//! Typed client for the TV-show REST API.
//!
//! Wraps an [`HttpClient`] with the endpoint table, query encoding and the
//! response policy (non-2xx is an error carrying the server's message; a
//! body that is not JSON is a payload error). Shape checks on `data` are
//! left to callers, because the store treats a malformed `data` as "keep
//! what you had", not as a failure.

use tracing::debug;

use crate::error::{DashResult, NetworkError, PayloadError};
use crate::models::{ApiEnvelope, ApiInfo, Show, ShowPage, ShowQuery, StatKind};
use crate::startup::DashConfig;
use crate::traits::{Headers, HttpClient, Response};

pub const SHOWS_PATH: &str = "/api/douban/hot-tv";
pub const DETAIL_PATH: &str = "/api/douban/tv-detail";
pub const IMAGE_PROXY_PATH: &str = "/api/proxy/image";
pub const ROOT_PATH: &str = "/";

/// Message used when an error response carries none of its own.
const FALLBACK_ERROR_MESSAGE: &str = "Network error";

/// Client for the TV-show API.
pub struct ShowsApi<C> {
    /// Base URL, without trailing slash
    base_url: String,
    client: C,
}

impl<C: HttpClient> ShowsApi<C> {
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn from_config(client: C, config: &DashConfig) -> Self {
        Self::new(client, config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// GET /api/douban/hot-tv with the set query parameters.
    pub async fn fetch_shows(&self, query: &ShowQuery) -> DashResult<ApiEnvelope> {
        self.get_envelope(SHOWS_PATH, &query.to_query_pairs()).await
    }

    /// Like [`fetch_shows`](Self::fetch_shows), but decodes `data` strictly
    /// into a [`ShowPage`].
    pub async fn fetch_show_page(&self, query: &ShowQuery) -> DashResult<ShowPage> {
        let envelope = self.fetch_shows(query).await?;
        serde_json::from_value(envelope.data).map_err(|_| {
            PayloadError::UnexpectedShape {
                endpoint: SHOWS_PATH.to_string(),
                expected: "a page of shows",
            }
            .into()
        })
    }

    /// GET one of the statistic endpoints.
    pub async fn fetch_stats(&self, kind: StatKind) -> DashResult<ApiEnvelope> {
        self.get_envelope(kind.path(), &[]).await
    }

    pub async fn fetch_rate_stats(&self) -> DashResult<ApiEnvelope> {
        self.fetch_stats(StatKind::Rate).await
    }

    pub async fn fetch_category_stats(&self) -> DashResult<ApiEnvelope> {
        self.fetch_stats(StatKind::Category).await
    }

    pub async fn fetch_year_stats(&self) -> DashResult<ApiEnvelope> {
        self.fetch_stats(StatKind::Year).await
    }

    pub async fn fetch_area_stats(&self) -> DashResult<ApiEnvelope> {
        self.fetch_stats(StatKind::Area).await
    }

    /// GET /api/douban/tv-detail for the show identified by `url`.
    ///
    /// The server answers an unknown URL with `{"code": 404, "data": null}`
    /// and HTTP 200, which maps to `Ok(None)`.
    pub async fn fetch_show_detail(&self, url: &str) -> DashResult<Option<Show>> {
        let envelope = self
            .get_envelope(DETAIL_PATH, &[("url", url.to_string())])
            .await?;
        if envelope.data.is_null() {
            return Ok(None);
        }
        let show = serde_json::from_value(envelope.data).map_err(|_| {
            PayloadError::UnexpectedShape {
                endpoint: DETAIL_PATH.to_string(),
                expected: "a show object",
            }
        })?;
        Ok(Some(show))
    }

    /// GET / for the service description.
    pub async fn fetch_api_info(&self) -> DashResult<ApiInfo> {
        let envelope = self.get_envelope(ROOT_PATH, &[]).await?;
        Ok(serde_json::from_value(envelope.data).unwrap_or_default())
    }

    /// URL of a cover image routed through the API's image proxy.
    ///
    /// Cover hosts refuse hot-linking, so presentation code loads covers
    /// through this instead of `show.cover` directly. No request is made.
    pub fn proxy_image_url(&self, cover: &str) -> String {
        self.build_url(IMAGE_PROXY_PATH, &[("url", cover.to_string())])
    }

    fn build_url(&self, path: &str, params: &[(&str, String)]) -> String {
        if params.is_empty() {
            return format!("{}{}", self.base_url, path);
        }
        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}{}?{}", self.base_url, path, query)
    }

    async fn get_envelope(&self, path: &str, params: &[(&str, String)]) -> DashResult<ApiEnvelope> {
        let url = self.build_url(path, params);
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        debug!(url = %url, "GET");
        let response = self
            .client
            .get(&url, &headers)
            .await
            .map_err(|e| NetworkError::from_http(e, &url))?;

        if !response.is_success() {
            return Err(NetworkError::HttpStatus {
                status: response.status,
                message: error_message(&response),
            }
            .into());
        }

        response.json::<ApiEnvelope>().map_err(|e| {
            PayloadError::InvalidJson {
                endpoint: path.to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }
}

/// Pull a human-readable message out of an error body.
///
/// The envelope's `message` wins; FastAPI's `detail` is the fallback.
fn error_message(response: &Response) -> String {
    let body: serde_json::Value = match response.json() {
        Ok(value) => value,
        Err(_) => return FALLBACK_ERROR_MESSAGE.to_string(),
    };
    ["message", "detail"]
        .iter()
        .filter_map(|key| body.get(*key).and_then(|v| v.as_str()))
        .find(|msg| !msg.is_empty())
        .unwrap_or(FALLBACK_ERROR_MESSAGE)
        .to_string()
}
