//! Provider configuration.
//!
//! The provider block accepts an API key, an API URL and transport settings.
//! Unset values fall back to the environment and then to defaults.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::ProviderError;
use crate::schema::{Attribute, Schema};

/// API endpoint used when neither the config nor the environment sets one.
pub const DEFAULT_API_URL: &str = "https://api.ukfast.io";

/// Environment variables consulted for the API key, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["ANS_API_KEY", "UKF_API_KEY"];

/// Environment variable consulted for the API URL.
pub const API_URL_ENV_VAR: &str = "ANS_API_URL";

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_PAGE_SIZE: u32 = 100;
const MAX_PAGE_SIZE: u32 = 1000;

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    api_url: Option<String>,
    #[serde(default)]
    timeout_seconds: Option<u64>,
    #[serde(default)]
    page_size: Option<u32>,
}

/// Validated provider configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// API key sent in the `Authorization` header.
    pub api_key: String,
    /// Base URL of the API.
    pub api_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Records requested per page when listing.
    pub page_size: u32,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url.as_str())
            .field("timeout", &self.timeout)
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl ProviderConfig {
    /// Build a configuration from an API key, using defaults for the rest.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ProviderError> {
        Ok(Self {
            api_key: api_key.into(),
            api_url: parse_api_url(DEFAULT_API_URL)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Override the API URL.
    pub fn with_api_url(mut self, api_url: &str) -> Result<Self, ProviderError> {
        self.api_url = parse_api_url(api_url)?;
        Ok(self)
    }

    /// Parse the provider block, falling back to the process environment.
    pub fn from_value(config: serde_json::Value) -> Result<Self, ProviderError> {
        Self::from_value_with_env(config, |name| std::env::var(name).ok())
    }

    /// Parse the provider block, reading fallbacks through `env`.
    pub fn from_value_with_env<F>(config: serde_json::Value, env: F) -> Result<Self, ProviderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw: RawConfig = match config {
            serde_json::Value::Null => RawConfig::default(),
            other => serde_json::from_value(other)?,
        };

        let api_key = non_empty(raw.api_key)
            .or_else(|| API_KEY_ENV_VARS.iter().find_map(|name| non_empty(env(name))))
            .ok_or_else(|| {
                ProviderError::Configuration(format!(
                    "api_key must be set in the provider block or via {}",
                    API_KEY_ENV_VARS.join("/")
                ))
            })?;

        let api_url = non_empty(raw.api_url)
            .or_else(|| non_empty(env(API_URL_ENV_VAR)))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_seconds = raw.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS);
        if timeout_seconds == 0 {
            return Err(ProviderError::Configuration(
                "timeout_seconds must be greater than zero".to_string(),
            ));
        }

        let page_size = raw.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(ProviderError::Configuration(format!(
                "page_size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }

        Ok(Self {
            api_key,
            api_url: parse_api_url(&api_url)?,
            timeout: Duration::from_secs(timeout_seconds),
            page_size,
        })
    }

    /// Schema of the provider block.
    pub fn schema() -> Schema {
        Schema::v0()
            .with_description("eCloud provider configuration")
            .with_attribute(
                "api_key",
                Attribute::optional_string()
                    .sensitive()
                    .with_description("API key; defaults to ANS_API_KEY or UKF_API_KEY"),
            )
            .with_attribute(
                "api_url",
                Attribute::optional_string()
                    .with_description("API base URL; defaults to ANS_API_URL or https://api.ukfast.io"),
            )
            .with_attribute(
                "timeout_seconds",
                Attribute::optional_int64().with_description("Per-request timeout in seconds"),
            )
            .with_attribute(
                "page_size",
                Attribute::optional_int64().with_description("Records requested per list page"),
            )
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_api_url(raw: &str) -> Result<Url, ProviderError> {
    let url = Url::parse(raw)
        .map_err(|e| ProviderError::Configuration(format!("invalid api_url '{}': {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ProviderError::Configuration(format!(
            "api_url must use http or https, got '{}'",
            scheme
        ))),
    }
}
