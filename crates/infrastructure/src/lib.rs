//! PubChem Infrastructure - Adapters and configuration
//!
//! This crate provides the reqwest implementation of the `HttpClient` port
//! and the configuration that wires it into a ready search facade.

pub mod adapters;
pub mod config;

use std::sync::Arc;

use pubchem_application::PubChemSearch;

pub use adapters::ReqwestHttpClient;
pub use config::{ClientConfig, ConfigError};

/// Builds a search facade from `config`.
///
/// # Errors
///
/// Returns an error if the prolog is invalid or the HTTP client cannot be built.
pub fn connect(config: &ClientConfig) -> Result<PubChemSearch<ReqwestHttpClient>, ConfigError> {
    config.validate()?;
    let client = ReqwestHttpClient::with_settings(&config.user_agent, config.timeout())?;
    tracing::debug!(
        prolog = %config.prolog,
        max_attempts = config.max_attempts,
        retry_delay_ms = config.retry_delay_ms,
        "PubChem client ready"
    );

    Ok(PubChemSearch::new(Arc::new(client))
        .with_prolog(config.prolog.clone())
        .with_retry_policy(config.retry_policy()))
}
