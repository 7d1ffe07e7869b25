// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Client configuration and parameter document loading.
//!
//! Connection settings come from command line flags first and fall back to
//! `BLOXONE_CSP_URL` / `BLOXONE_API_KEY`. Empty strings count as unset, so an
//! exported-but-empty variable behaves like a missing one.

use crate::constants::{DEFAULT_CSP_URL, DEFAULT_HTTP_TIMEOUT_SECS, ENV_API_KEY, ENV_CSP_URL};
use crate::errors::ConfigError;
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Connection settings for the BloxOne DDI API.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base CSP URL without trailing slash
    pub csp_url: String,
    /// API key sent as `Authorization: Token <key>`
    pub api_key: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("csp_url", &self.csp_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Resolve settings from explicit values with process environment fallback.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is available or the CSP URL is malformed.
    pub fn resolve(csp_url: Option<String>, api_key: Option<String>) -> Result<Self, ConfigError> {
        Self::resolve_with(csp_url, api_key, |name| std::env::var(name).ok())
    }

    /// Resolve settings using `lookup` in place of the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is available or the CSP URL is malformed.
    pub fn resolve_with<F>(
        csp_url: Option<String>,
        api_key: Option<String>,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let csp_url = non_empty(csp_url)
            .or_else(|| non_empty(lookup(ENV_CSP_URL)))
            .unwrap_or_else(|| DEFAULT_CSP_URL.to_string());
        let api_key = non_empty(api_key)
            .or_else(|| non_empty(lookup(ENV_API_KEY)))
            .ok_or(ConfigError::MissingApiKey { env: ENV_API_KEY })?;

        let parsed = Url::parse(&csp_url).map_err(|e| ConfigError::InvalidCspUrl {
            url: csp_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidCspUrl {
                url: csp_url,
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let config = Self {
            csp_url: csp_url.trim_end_matches('/').to_string(),
            api_key,
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };
        debug!(csp_url = %config.csp_url, "Resolved client configuration");
        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Load a YAML or JSON parameter document from a file, or stdin when `source` is `-`.
///
/// # Errors
///
/// Returns an error if the source cannot be read or does not match `T`.
pub fn load_params<T: DeserializeOwned>(source: &Path) -> Result<T, ConfigError> {
    let source_name = source.display().to_string();
    let text = if source_name == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| ConfigError::ParamsUnreadable {
                source_name: source_name.clone(),
                reason: e.to_string(),
            })?;
        buf
    } else {
        std::fs::read_to_string(source).map_err(|e| ConfigError::ParamsUnreadable {
            source_name: source_name.clone(),
            reason: e.to_string(),
        })?
    };

    parse_params(&text, &source_name)
}

/// Parse a YAML or JSON parameter document.
///
/// YAML is a superset of JSON, so one parser covers both.
///
/// # Errors
///
/// Returns an error if the text does not deserialize into `T`.
pub fn parse_params<T: DeserializeOwned>(text: &str, source_name: &str) -> Result<T, ConfigError> {
    // An empty document means "no parameters"
    let text = if text.trim().is_empty() { "{}" } else { text };
    serde_yaml::from_str(text).map_err(|e| ConfigError::ParamsInvalid {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
