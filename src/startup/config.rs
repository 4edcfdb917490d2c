//! Configuration types.
//!
//! Values come from defaults, then environment variables, then CLI flags
//! (applied by `main` through the `with_*` builders).

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";

/// Unsplash caps `per_page` at 30.
pub const MAX_PER_PAGE: u32 = 30;

pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

pub const ENV_ACCESS_KEY: &str = "UNSPLASH_ACCESS_KEY";
pub const ENV_API_URL: &str = "UNSPLASH_API_URL";
pub const ENV_PER_PAGE: &str = "UNSPLASH_PER_PAGE";
pub const ENV_TIMEOUT_SECS: &str = "UNSPLASH_TIMEOUT_SECS";
pub const ENV_LOG_DIR: &str = "UNSPLASH_TUI_LOG_DIR";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("UNSPLASH_ACCESS_KEY is not set; create an app at https://unsplash.com/developers")]
    MissingAccessKey,

    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("could not build HTTP client: {0}")]
    HttpClient(#[from] crate::traits::HttpError),
}

/// Settings for talking to the photo API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Sent as `Authorization: Client-ID <key>`
    pub access_key: Option<String>,
    pub per_page: u32,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_key: None,
            per_page: MAX_PER_PAGE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_access_key(mut self, key: impl Into<String>) -> Self {
        self.access_key = Some(key.into());
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Access key, or an error explaining how to get one.
    pub fn require_access_key(&self) -> Result<&str, ConfigError> {
        self.access_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingAccessKey)
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    /// Search to run instead of the listing on startup
    pub initial_query: Option<String>,
    /// Directory for the log file; platform cache dir when unset
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api(mut self, api: ApiConfig) -> Self {
        self.api = api;
        self
    }

    pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
        self.initial_query = Some(query.into());
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Build from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut api = ApiConfig::default();

        if let Some(key) = lookup(ENV_ACCESS_KEY) {
            api.access_key = Some(key.trim().to_string());
        }

        if let Some(url) = lookup(ENV_API_URL) {
            let url = url.trim().trim_end_matches('/').to_string();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    var: ENV_API_URL,
                    value: url,
                    reason: "must start with http:// or https://",
                });
            }
            api.base_url = url;
        }

        if let Some(raw) = lookup(ENV_PER_PAGE) {
            api.per_page = match raw.trim().parse::<u32>() {
                Ok(n) if (1..=MAX_PER_PAGE).contains(&n) => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: ENV_PER_PAGE,
                        value: raw,
                        reason: "must be between 1 and 30",
                    })
                }
            };
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or(ConfigError::InvalidValue {
                    var: ENV_TIMEOUT_SECS,
                    value: raw.clone(),
                    reason: "must be a positive number of seconds",
                })?;
            api.timeout = Duration::from_secs(secs);
        }

        Ok(Self {
            api,
            initial_query: None,
            log_dir: lookup(ENV_LOG_DIR).map(PathBuf::from),
        })
    }
}
