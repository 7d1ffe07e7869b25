// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! BloxOne DDI REST API client.
//!
//! This module provides a thin client for the DDI API of the Infoblox Cloud
//! Services Portal. It handles:
//!
//! - Building collection and resource URLs below `/api/ddi/v1`
//! - Token authentication
//! - Mapping HTTP failures to [`ApiError`](crate::errors::ApiError)
//! - Typed per-collection handles implementing [`ResourceApi`]
//!
//! # Example
//!
//! ```rust,no_run
//! use b1ddi::client::{BloxOneClient, Inherit, ResourceApi};
//! use b1ddi::config::ClientConfig;
//! use b1ddi::resources::ViewConfig;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ClientConfig::resolve(None, Some("my-api-key".to_string()))?;
//! let client = BloxOneClient::new(&config)?;
//!
//! let views = client.api_for::<ViewConfig>();
//! let view = views.read("dns/view/0b2f7a3c", Inherit::Full).await?;
//! println!("{view:?}");
//! # Ok(())
//! # }
//! ```

pub(crate) mod request;
pub mod resource_api;

pub use resource_api::{HttpResourceApi, Inherit, ListParams, RemoteObject, ResourceApi};

use crate::config::ClientConfig;
use crate::constants::USER_AGENT;
use crate::errors::ConfigError;
use crate::resources::ResourceKind;
use reqwest::Client as HttpClient;
use std::sync::Arc;

/// Connection to one CSP tenant.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct BloxOneClient {
    /// HTTP client for API requests
    http: Arc<HttpClient>,
    /// CSP base URL
    csp_url: Arc<String>,
    /// API key
    api_key: Arc<String>,
}

impl std::fmt::Debug for BloxOneClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BloxOneClient")
            .field("csp_url", &self.csp_url)
            .finish_non_exhaustive()
    }
}

impl BloxOneClient {
    /// Create a client from resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (e.g. TLS backend failure).
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            http: Arc::new(http),
            csp_url: Arc::new(config.csp_url.clone()),
            api_key: Arc::new(config.api_key.clone()),
        })
    }

    /// Build the API URL for a collection or a single resource.
    ///
    /// This is a public method for testing purposes.
    #[must_use]
    pub fn build_api_url(csp_url: &str, api_path: &str, id: Option<&str>) -> String {
        request::build_api_url(csp_url, api_path, id)
    }

    /// Handle for an arbitrary collection path.
    #[must_use]
    pub fn resource(&self, api_path: &'static str) -> HttpResourceApi {
        HttpResourceApi::new(self.clone(), api_path)
    }

    /// Handle for the collection of resource kind `R`.
    #[must_use]
    pub fn api_for<R: ResourceKind>(&self) -> HttpResourceApi {
        self.resource(R::DESCRIPTOR.api_path)
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    pub(crate) fn csp_url(&self) -> &str {
        &self.csp_url
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
}
