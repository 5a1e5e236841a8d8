//! Dashboard configuration.
//!
//! Settings come from `TVDASH_*` environment variables with builder-style
//! overrides on top.

use std::time::Duration;
use tracing::warn;

use crate::error::{DashError, DashResult};
use crate::models::BULK_PAGE_SIZE;

/// Base URL used when `TVDASH_API_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Transport timeout used when `TVDASH_TIMEOUT_SECS` is not set.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Shows at or above this rating make the high-rated view.
pub const DEFAULT_HIGH_RATED_THRESHOLD: f64 = 8.0;

/// Number of shows in the recent view.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

pub const ENV_BASE_URL: &str = "TVDASH_API_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "TVDASH_TIMEOUT_SECS";
pub const ENV_PAGE_SIZE: &str = "TVDASH_PAGE_SIZE";

/// Configuration for the API client and the show store.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use tvdash::startup::DashConfig;
///
/// let config = DashConfig::default()
///     .with_base_url("http://127.0.0.1:9000/")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url, "http://127.0.0.1:9000");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DashConfig {
    /// API base URL, without trailing slash
    pub base_url: String,
    /// Per-request transport timeout
    pub timeout: Duration,
    /// Page size of the bulk show-list request
    pub page_size: u32,
    /// Minimum rating for the high-rated view
    pub high_rated_threshold: f64,
    /// Length of the recent view
    pub recent_limit: usize,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_size: BULK_PAGE_SIZE,
            high_rated_threshold: DEFAULT_HIGH_RATED_THRESHOLD,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl DashConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL. A trailing `/` is dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_high_rated_threshold(mut self, threshold: f64) -> Self {
        self.high_rated_threshold = threshold;
        self
    }

    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }

    /// Create config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup.
    ///
    /// Unparseable numbers fall back to their defaults with a warning rather
    /// than failing startup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            config = config.with_base_url(url.trim());
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!(
                    var = ENV_TIMEOUT_SECS,
                    value = %raw,
                    "Ignoring invalid timeout, using {}s",
                    DEFAULT_TIMEOUT_SECS
                ),
            }
        }

        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            match raw.trim().parse::<u32>() {
                Ok(size) if size > 0 => config.page_size = size,
                _ => warn!(
                    var = ENV_PAGE_SIZE,
                    value = %raw,
                    "Ignoring invalid page size, using {}",
                    BULK_PAGE_SIZE
                ),
            }
        }

        config
    }

    /// Check the settings that would make every request fail.
    pub fn validate(&self) -> DashResult<()> {
        if self.base_url.is_empty() {
            return Err(DashError::Config {
                message: "API base URL is empty".to_string(),
            });
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(DashError::Config {
                message: format!("API base URL '{}' must start with http:// or https://", self.base_url),
            });
        }
        if self.page_size == 0 {
            return Err(DashError::Config {
                message: "page size must be positive".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = DashConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(config.page_size, 1000);
        assert_eq!(config.high_rated_threshold, 8.0);
        assert_eq!(config.recent_limit, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = DashConfig::from_lookup(lookup_from(&[
            (ENV_BASE_URL, "https://api.example.com/"),
            (ENV_TIMEOUT_SECS, "30"),
            (ENV_PAGE_SIZE, "250"),
        ]));
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.page_size, 250);
    }

    #[test]
    fn test_from_lookup_invalid_numbers_fall_back() {
        let config = DashConfig::from_lookup(lookup_from(&[
            (ENV_TIMEOUT_SECS, "soon"),
            (ENV_PAGE_SIZE, "0"),
        ]));
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.page_size, BULK_PAGE_SIZE);
    }

    #[test]
    fn test_blank_base_url_ignored() {
        let config = DashConfig::from_lookup(lookup_from(&[(ENV_BASE_URL, "   ")]));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        assert!(DashConfig::default().with_base_url("").validate().is_err());
        assert!(DashConfig::default()
            .with_base_url("ftp://files")
            .validate()
            .is_err());
        assert!(DashConfig::default().with_page_size(0).validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        std::env::set_var(ENV_BASE_URL, "http://10.0.0.5:8000");
        std::env::remove_var(ENV_TIMEOUT_SECS);
        std::env::remove_var(ENV_PAGE_SIZE);

        let config = DashConfig::from_env();

        std::env::remove_var(ENV_BASE_URL);
        assert_eq!(config.base_url, "http://10.0.0.5:8000");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
