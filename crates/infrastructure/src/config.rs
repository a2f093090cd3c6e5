//! Client configuration
//!
//! Settings come from defaults, a YAML document, or `PUBCHEM_*` environment
//! variables layered over the defaults.

use std::time::Duration;

use pubchem_application::{HttpClientError, RetryPolicy};
use pubchem_domain::PROLOG;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::adapters::ReqwestHttpClient;

/// Environment variable overriding [`ClientConfig::prolog`].
pub const ENV_PROLOG: &str = "PUBCHEM_PROLOG";
/// Environment variable overriding [`ClientConfig::user_agent`].
pub const ENV_USER_AGENT: &str = "PUBCHEM_USER_AGENT";
/// Environment variable overriding [`ClientConfig::timeout_ms`].
pub const ENV_TIMEOUT_MS: &str = "PUBCHEM_TIMEOUT_MS";
/// Environment variable overriding [`ClientConfig::max_attempts`].
pub const ENV_MAX_ATTEMPTS: &str = "PUBCHEM_MAX_ATTEMPTS";
/// Environment variable overriding [`ClientConfig::retry_delay_ms`].
pub const ENV_RETRY_DELAY_MS: &str = "PUBCHEM_RETRY_DELAY_MS";

/// Errors raised while loading configuration or building the client.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The YAML document could not be parsed.
    #[error("invalid YAML configuration: {0}")]
    Yaml(String),

    /// An environment variable holds something that is not a number.
    #[error("{variable} must be a non-negative integer, got {value:?}")]
    InvalidNumber {
        /// Variable name.
        variable: &'static str,
        /// Raw value found.
        value: String,
    },

    /// The prolog is not an absolute http(s) URL.
    #[error("invalid prolog {prolog:?}: {message}")]
    InvalidProlog {
        /// The configured prolog.
        prolog: String,
        /// Why it was rejected.
        message: String,
    },

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] HttpClientError),
}

/// Settings for a PubChem client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL requests are rendered against.
    pub prolog: String,
    /// User-Agent header value.
    pub user_agent: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Total attempts for requests answered with 503.
    pub max_attempts: u32,
    /// Wait between attempts in milliseconds.
    pub retry_delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            prolog: PROLOG.to_string(),
            user_agent: ReqwestHttpClient::DEFAULT_USER_AGENT.to_string(),
            timeout_ms: 30_000,
            max_attempts: RetryPolicy::DEFAULT_MAX_ATTEMPTS,
            retry_delay_ms: 5_000,
        }
    }
}

impl ClientConfig {
    /// Parses a YAML document. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Yaml` if the document is malformed.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Yaml(e.to_string()))
    }

    /// Reads `PUBCHEM_*` environment variables over the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidNumber` if a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidNumber` if a numeric variable does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(prolog) = lookup(ENV_PROLOG) {
            config.prolog = prolog;
        }
        if let Some(user_agent) = lookup(ENV_USER_AGENT) {
            config.user_agent = user_agent;
        }
        if let Some(value) = lookup(ENV_TIMEOUT_MS) {
            config.timeout_ms = parse_number(ENV_TIMEOUT_MS, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_ATTEMPTS) {
            config.max_attempts = parse_number(ENV_MAX_ATTEMPTS, &value)?;
        }
        if let Some(value) = lookup(ENV_RETRY_DELAY_MS) {
            config.retry_delay_ms = parse_number(ENV_RETRY_DELAY_MS, &value)?;
        }

        Ok(config)
    }

    /// Checks that the prolog is an absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidProlog` otherwise.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidProlog {
            prolog: self.prolog.clone(),
            message,
        };

        let url = Url::parse(&self.prolog).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(invalid(format!("unsupported scheme {other}"))),
        }
    }

    /// Per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Retry policy built from `max_attempts` and `retry_delay_ms`.
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, Duration::from_millis(self.retry_delay_ms))
    }
}

fn parse_number<T>(variable: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        variable,
        value: value.to_string(),
    })
}
