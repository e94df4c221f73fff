//! Client configuration.
//!
//! A [`ClientConfig`] is built either explicitly through
//! [`ClientConfig::builder`] or from `PAYRAIL_*` environment variables with
//! [`ClientConfig::from_env`].

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};
use url::Url;

use crate::error::ConfigError;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.payrail.dev";

/// Header carrying the access key.
pub const ACCESS_KEY_HEADER: &str = "access_key";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_BASE_URL: &str = "PAYRAIL_BASE_URL";
const ENV_ACCESS_KEY: &[&str] = &["PAYRAIL_ACCESS_KEY", "PAYRAIL_API_KEY"];
const ENV_TIMEOUT_SECS: &str = "PAYRAIL_TIMEOUT_SECS";

/// Validated settings for a [`PayrailClient`](crate::PayrailClient).
#[derive(Clone)]
pub struct ClientConfig {
    base_url: Url,
    default_headers: Vec<(String, String)>,
    timeout: Duration,
    user_agent: String,
}

impl ClientConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Reads configuration from the environment.
    ///
    /// - `PAYRAIL_BASE_URL` - API base URL (default [`DEFAULT_BASE_URL`])
    /// - `PAYRAIL_ACCESS_KEY`, then `PAYRAIL_API_KEY` - access key
    /// - `PAYRAIL_TIMEOUT_SECS` - request timeout in whole seconds
    ///
    /// ## Errors
    ///
    /// Returns an error if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut builder = Self::builder();
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            builder = builder.base_url(base_url);
        }
        if let Some(key) = ENV_ACCESS_KEY.iter().find_map(|&name| lookup(name)) {
            builder = builder.access_key(key);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout { value: raw.clone() })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }

    /// Returns the API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns headers sent with every request.
    pub fn default_headers(&self) -> &[(String, String)] {
        &self.default_headers
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the `User-Agent` header value.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .default_headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case(ACCESS_KEY_HEADER) {
                    (name.as_str(), "<redacted>")
                } else {
                    (name.as_str(), value.as_str())
                }
            })
            .collect();
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("default_headers", &headers)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Builder for [`ClientConfig`].
#[derive(Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    default_headers: Vec<(String, String)>,
    access_key: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientConfigBuilder {
    /// Sets the API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Adds a header sent with every request.
    ///
    /// Headers set by an individual request replace a default header of the
    /// same name, ignoring case.
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Sets the access key, sent verbatim as the `access_key` header.
    pub fn access_key(mut self, key: impl Into<String>) -> Self {
        self.access_key = Some(key.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Validates the settings and builds the configuration.
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL is not an absolute HTTP(S) URL, a
    /// header is not valid HTTP, or the timeout is zero.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                scheme: base_url.scheme().to_string(),
            });
        }

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                value: format!("{timeout:?}"),
            });
        }

        let mut default_headers = self.default_headers;
        if let Some(key) = self.access_key {
            default_headers.retain(|(name, _)| !name.eq_ignore_ascii_case(ACCESS_KEY_HEADER));
            default_headers.push((ACCESS_KEY_HEADER.to_string(), key));
        }
        for (name, value) in &default_headers {
            HeaderName::try_from(name.as_str()).map_err(|e| ConfigError::invalid_header(name, e))?;
            HeaderValue::try_from(value.as_str())
                .map_err(|e| ConfigError::invalid_header(name, e))?;
        }

        Ok(ClientConfig {
            base_url,
            default_headers,
            timeout,
            user_agent: self.user_agent.unwrap_or_else(|| {
                format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
            }),
        })
    }
}
