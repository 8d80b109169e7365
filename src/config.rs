use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::constants::{
    DEFAULT_BACKEND_HOST, DEFAULT_IDEAS_API_URL, DEFAULT_IMAGE_PATH,
    DEFAULT_PAGE_RENDER_BUDGET_SECS, DEFAULT_STATIC_ASSETS_HOST,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Web Server
    pub web_host: String,
    pub web_port: u16,
    pub public_dir: PathBuf,
    /// Longest a page request waits for its listing before rendering the
    /// loading placeholder.
    pub page_render_budget: Duration,

    // Remote content API
    pub ideas_api_url: String,
    pub upstream_timeout: Option<Duration>,

    // Page data source; when unset the page talks to the upstream API in-process
    pub ideas_proxy_url: Option<String>,

    // Image URL resolution
    pub static_assets_host: String,
    pub backend_host: String,
    pub default_image_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Web Server
            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("WEB_PORT", 8080)?,
            public_dir: PathBuf::from(env_or_default("PUBLIC_DIR", "./public")),
            page_render_budget: Duration::from_secs(
                parse_env_u64_opt("PAGE_RENDER_BUDGET_SECS")?
                    .unwrap_or(DEFAULT_PAGE_RENDER_BUDGET_SECS),
            ),

            // Remote content API
            ideas_api_url: env_or_default("IDEAS_API_URL", DEFAULT_IDEAS_API_URL),
            upstream_timeout: parse_env_u64_opt("UPSTREAM_TIMEOUT_SECS")?.map(Duration::from_secs),

            ideas_proxy_url: optional_env("IDEAS_PROXY_URL"),

            // Image URL resolution
            static_assets_host: env_or_default("STATIC_ASSETS_HOST", DEFAULT_STATIC_ASSETS_HOST),
            backend_host: env_or_default("BACKEND_HOST", DEFAULT_BACKEND_HOST),
            default_image_path: env_or_default("DEFAULT_IMAGE_PATH", DEFAULT_IMAGE_PATH),
        })
    }

    /// Configuration with built-in defaults, for tests.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            web_host: "127.0.0.1".to_string(),
            web_port: 0,
            public_dir: PathBuf::from("./public"),
            page_render_budget: Duration::from_secs(DEFAULT_PAGE_RENDER_BUDGET_SECS),
            ideas_api_url: DEFAULT_IDEAS_API_URL.to_string(),
            upstream_timeout: None,
            ideas_proxy_url: None,
            static_assets_host: DEFAULT_STATIC_ASSETS_HOST.to_string(),
            backend_host: DEFAULT_BACKEND_HOST.to_string(),
            default_image_path: DEFAULT_IMAGE_PATH.to_string(),
        }
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_http_url("IDEAS_API_URL", &self.ideas_api_url)?;
        if let Some(ref proxy_url) = self.ideas_proxy_url {
            validate_http_url("IDEAS_PROXY_URL", proxy_url)?;
        }
        if self.default_image_path.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "DEFAULT_IMAGE_PATH".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if self.page_render_budget.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "PAGE_RENDER_BUDGET_SECS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.upstream_timeout == Some(Duration::ZERO) {
            return Err(ConfigError::InvalidValue {
                name: "UPSTREAM_TIMEOUT_SECS".to_string(),
                message: "must be at least 1 when set".to_string(),
            });
        }
        Ok(())
    }
}

fn validate_http_url(name: &str, value: &str) -> Result<(), ConfigError> {
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        Ok(parsed) => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            message: format!("unsupported scheme '{}'", parsed.scheme()),
        }),
        Err(e) => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            message: e.to_string(),
        }),
    }
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64_opt(name: &str) -> Result<Option<u64>, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => {
            val.parse()
                .map(Some)
                .map_err(|e| ConfigError::ParseInt {
                    name: name.to_string(),
                    source: e,
                })
        }
        _ => Ok(None),
    }
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}
