use std::time::Duration;

use crate::error::ConfigError;

/// Backend used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5288/api";

pub const API_URL_VAR: &str = "HEALCHECK_API_URL";
pub const ASSET_HOST_VAR: &str = "HEALCHECK_ASSET_HOST";
pub const TIMEOUT_VAR: &str = "HEALCHECK_TIMEOUT_SECS";
pub const POLL_VAR: &str = "HEALCHECK_POLL_SECS";

/// Portal configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL every API path is appended to, without a trailing slash.
    pub api_base_url: String,

    /// Host prefix for uploaded images; `image_path` values are appended to it.
    ///
    /// Defaults to the API base URL with its trailing `/api` segment removed, which is where
    /// the backend serves its static upload directory.
    pub asset_host: String,

    /// Maximum time a single request may take before it fails as a network error (seconds).
    pub request_timeout_seconds: u64,

    /// How often the admin panel refreshes its stats (seconds).
    pub stats_poll_interval_seconds: u64,
}

impl Config {
    /// Create a new configuration for the given API base URL with default timings
    pub fn new(api_base_url: &str) -> Self {
        let api_base_url = api_base_url.trim_end_matches('/').to_string();
        let asset_host = derive_asset_host(&api_base_url);

        Self {
            api_base_url,
            asset_host,
            request_timeout_seconds: 30,
            stats_poll_interval_seconds: 30,
        }
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Load configuration from the process environment.
    ///
    /// Values compiled in with `option_env!` are used when the variable is absent at runtime,
    /// which is always the case in the browser.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| {
            std::env::var(var).ok().or_else(|| compiled_value(var).map(str::to_string))
        })
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(url) = lookup(API_URL_VAR) {
            builder = builder.api_base_url(&url);
        }
        if let Some(host) = lookup(ASSET_HOST_VAR) {
            builder = builder.asset_host(&host);
        }
        if let Some(value) = lookup(TIMEOUT_VAR) {
            builder = builder.request_timeout_seconds(parse_seconds(TIMEOUT_VAR, &value)?);
        }
        if let Some(value) = lookup(POLL_VAR) {
            builder = builder.stats_poll_interval_seconds(parse_seconds(POLL_VAR, &value)?);
        }

        builder.build()
    }

    /// Full URL for an API path such as `/users/login`
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Get stats poll interval as Duration
    pub fn stats_poll_interval(&self) -> Duration {
        Duration::from_secs(self.stats_poll_interval_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

/// Builder for [`Config`]; validation happens in [`ConfigBuilder::build`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    api_base_url: Option<String>,
    asset_host: Option<String>,
    request_timeout_seconds: Option<u64>,
    stats_poll_interval_seconds: Option<u64>,
}

impl ConfigBuilder {
    pub fn api_base_url(mut self, url: &str) -> Self {
        self.api_base_url = Some(url.to_string());
        self
    }

    pub fn asset_host(mut self, host: &str) -> Self {
        self.asset_host = Some(host.to_string());
        self
    }

    pub fn request_timeout_seconds(mut self, seconds: u64) -> Self {
        self.request_timeout_seconds = Some(seconds);
        self
    }

    pub fn stats_poll_interval_seconds(mut self, seconds: u64) -> Self {
        self.stats_poll_interval_seconds = Some(seconds);
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let api_base_url = self
            .api_base_url
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        validate_http_url(API_URL_VAR, &api_base_url)?;

        let mut config = Config::new(&api_base_url);

        if let Some(host) = self.asset_host {
            validate_http_url(ASSET_HOST_VAR, &host)?;
            config.asset_host = host.trim_end_matches('/').to_string();
        }
        if let Some(seconds) = self.request_timeout_seconds {
            config.request_timeout_seconds = non_zero(TIMEOUT_VAR, seconds)?;
        }
        if let Some(seconds) = self.stats_poll_interval_seconds {
            config.stats_poll_interval_seconds = non_zero(POLL_VAR, seconds)?;
        }

        Ok(config)
    }
}

fn derive_asset_host(api_base_url: &str) -> String {
    api_base_url
        .strip_suffix("/api")
        .unwrap_or(api_base_url)
        .to_string()
}

fn compiled_value(var: &str) -> Option<&'static str> {
    match var {
        API_URL_VAR => option_env!("HEALCHECK_API_URL"),
        ASSET_HOST_VAR => option_env!("HEALCHECK_ASSET_HOST"),
        TIMEOUT_VAR => option_env!("HEALCHECK_TIMEOUT_SECS"),
        POLL_VAR => option_env!("HEALCHECK_POLL_SECS"),
        _ => None,
    }
}

fn validate_http_url(var: &str, value: &str) -> Result<(), ConfigError> {
    let parsed = reqwest::Url::parse(value).map_err(|e| ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("unsupported scheme {:?}, expected http or https", scheme),
        }),
    }
}

fn parse_seconds(var: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

fn non_zero(var: &str, seconds: u64) -> Result<u64, ConfigError> {
    if seconds == 0 {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(seconds)
}
