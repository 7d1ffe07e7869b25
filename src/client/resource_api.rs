// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The resource API boundary consumed by the reconciler.
//!
//! [`ResourceApi`] is the seam between reconciliation logic and the network.
//! [`HttpResourceApi`] implements it over the BloxOne DDI REST API; tests
//! implement it in memory.

use super::request::{api_request, build_api_url, decode, parse_url};
use super::BloxOneClient;
use crate::constants::{QUERY_FILTER, QUERY_INHERIT, QUERY_LIMIT, QUERY_OFFSET, QUERY_TAG_FILTER};
use crate::errors::ApiError;
use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

/// A resource as stored by the remote service.
pub type RemoteObject = Map<String, Value>;

/// How much inheritance provenance the API should include in returned objects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Inherit {
    /// Effective values plus inheritance sources
    #[default]
    Full,
    /// Inheritance sources without resolved parent values
    Partial,
    /// No inheritance metadata
    None,
}

impl Inherit {
    /// Query parameter value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Partial => "partial",
            Self::None => "none",
        }
    }
}

/// Parameters of a list call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// `_filter` expression
    pub filter: Option<String>,
    /// `_tfilter` expression over tags
    pub tag_filter: Option<String>,
    /// Page offset
    pub offset: Option<u32>,
    /// Page size
    pub limit: Option<u32>,
    /// Inheritance metadata mode
    pub inherit: Inherit,
}

/// CRUD operations on one kind of remote resource.
///
/// Every method maps to exactly one remote call.
#[async_trait]
pub trait ResourceApi: Send + Sync {
    /// Fetch one resource by id. A missing resource is an [`ApiError`] for which
    /// [`ApiError::is_not_found`] holds.
    async fn read(&self, id: &str, inherit: Inherit) -> Result<RemoteObject, ApiError>;

    /// List resources matching `params`.
    async fn list(&self, params: &ListParams) -> Result<Vec<RemoteObject>, ApiError>;

    /// Create a resource and return it as stored.
    async fn create(&self, body: &RemoteObject, inherit: Inherit) -> Result<RemoteObject, ApiError>;

    /// Update a resource and return it as stored.
    async fn update(
        &self,
        id: &str,
        body: &RemoteObject,
        inherit: Inherit,
    ) -> Result<RemoteObject, ApiError>;

    /// Delete a resource.
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

#[derive(Debug, Deserialize)]
struct ResultEnvelope {
    result: RemoteObject,
}

#[derive(Debug, Deserialize)]
struct ResultsEnvelope {
    #[serde(default)]
    results: Vec<RemoteObject>,
}

/// [`ResourceApi`] over HTTP for one collection path (e.g. `dns/view`).
#[derive(Debug, Clone)]
pub struct HttpResourceApi {
    client: BloxOneClient,
    api_path: &'static str,
}

impl HttpResourceApi {
    pub(crate) fn new(client: BloxOneClient, api_path: &'static str) -> Self {
        Self { client, api_path }
    }

    /// Collection path this handle operates on.
    #[must_use]
    pub fn api_path(&self) -> &'static str {
        self.api_path
    }

    fn url(&self, id: Option<&str>, query: &[(&str, String)]) -> Result<Url, ApiError> {
        let mut url = parse_url(&build_api_url(self.client.csp_url(), self.api_path, id))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        url: &Url,
        body: Option<&RemoteObject>,
    ) -> Result<String, ApiError> {
        api_request(self.client.http(), self.client.api_key(), method, url, body).await
    }
}

fn list_query(params: &ListParams) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(filter) = &params.filter {
        query.push((QUERY_FILTER, filter.clone()));
    }
    if let Some(tag_filter) = &params.tag_filter {
        query.push((QUERY_TAG_FILTER, tag_filter.clone()));
    }
    if let Some(offset) = params.offset {
        query.push((QUERY_OFFSET, offset.to_string()));
    }
    if let Some(limit) = params.limit {
        query.push((QUERY_LIMIT, limit.to_string()));
    }
    query.push((QUERY_INHERIT, params.inherit.as_str().to_string()));
    query
}

#[async_trait]
impl ResourceApi for HttpResourceApi {
    async fn read(&self, id: &str, inherit: Inherit) -> Result<RemoteObject, ApiError> {
        let url = self.url(Some(id), &[(QUERY_INHERIT, inherit.as_str().to_string())])?;
        let text = self.send(Method::GET, &url, None).await?;
        Ok(decode::<ResultEnvelope>(&url, &text)?.result)
    }

    async fn list(&self, params: &ListParams) -> Result<Vec<RemoteObject>, ApiError> {
        let url = self.url(None, &list_query(params))?;
        let text = self.send(Method::GET, &url, None).await?;
        let results = decode::<ResultsEnvelope>(&url, &text)?.results;
        debug!(
            api_path = self.api_path,
            count = results.len(),
            "Listed resources"
        );
        Ok(results)
    }

    async fn create(&self, body: &RemoteObject, inherit: Inherit) -> Result<RemoteObject, ApiError> {
        let url = self.url(None, &[(QUERY_INHERIT, inherit.as_str().to_string())])?;
        let text = self.send(Method::POST, &url, Some(body)).await?;
        Ok(decode::<ResultEnvelope>(&url, &text)?.result)
    }

    async fn update(
        &self,
        id: &str,
        body: &RemoteObject,
        inherit: Inherit,
    ) -> Result<RemoteObject, ApiError> {
        let url = self.url(Some(id), &[(QUERY_INHERIT, inherit.as_str().to_string())])?;
        let text = self.send(Method::PATCH, &url, Some(body)).await?;
        Ok(decode::<ResultEnvelope>(&url, &text)?.result)
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let url = self.url(Some(id), &[])?;
        self.send(Method::DELETE, &url, None).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "resource_api_tests.rs"]
mod resource_api_tests;
