// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Low-level HTTP plumbing for the BloxOne DDI REST API.
//!
//! All resource calls go through [`api_request`]. It performs exactly one HTTP
//! exchange; there is no retry at this layer.

use crate::constants::{AUTH_SCHEME, DDI_API_PREFIX};
use crate::errors::ApiError;
use reqwest::{Client as HttpClient, Method};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error, info};
use url::Url;

/// Build the URL of a resource collection, or of one resource when `id` is given.
///
/// Accepts a CSP URL with or without scheme and with or without trailing slash.
/// Ids returned by the API carry their collection path (`dns/view/<uuid>`); that
/// prefix is stripped so it is not repeated in the URL.
pub(crate) fn build_api_url(csp_url: &str, api_path: &str, id: Option<&str>) -> String {
    let base = csp_url.trim_end_matches('/');
    let base = if base.starts_with("http://") || base.starts_with("https://") {
        base.to_string()
    } else {
        format!("https://{base}")
    };
    let api_path = api_path.trim_matches('/');

    match id {
        Some(id) => format!(
            "{base}{DDI_API_PREFIX}/{api_path}/{}",
            resource_id_segment(api_path, id)
        ),
        None => format!("{base}{DDI_API_PREFIX}/{api_path}"),
    }
}

/// Strip the collection path from a full resource id.
pub(crate) fn resource_id_segment<'a>(api_path: &str, id: &'a str) -> &'a str {
    let id = id.trim_matches('/');
    id.strip_prefix(api_path)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(id)
}

/// Execute one request against the API and return the response body.
///
/// # Arguments
/// * `client` - HTTP client
/// * `api_key` - CSP API key
/// * `method` - HTTP method
/// * `url` - Full URL, query string included
/// * `body` - Optional JSON body for POST/PATCH requests
///
/// # Errors
///
/// Returns [`ApiError::Transport`] when no response arrives and
/// [`ApiError::Status`] for any non-success status code.
pub(crate) async fn api_request<T: Serialize + std::fmt::Debug>(
    client: &HttpClient,
    api_key: &str,
    method: Method,
    url: &Url,
    body: Option<&T>,
) -> Result<String, ApiError> {
    info!(method = %method, url = %url, "HTTP API request to BloxOne");
    debug!(body = ?body, "HTTP API request body");

    let mut request = client
        .request(method.clone(), url.clone())
        .header("Authorization", format!("{AUTH_SCHEME} {api_key}"));
    if let Some(body_data) = body {
        request = request.json(body_data);
    }

    let response = request.send().await.map_err(|e| ApiError::Transport {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        error!(
            method = %method,
            url = %url,
            status = %status,
            error = %error_text,
            "HTTP API request failed"
        );
        return Err(ApiError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            body: error_text,
        });
    }

    let text = response.text().await.map_err(|e| ApiError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    info!(
        method = %method,
        url = %url,
        status = %status,
        response_len = text.len(),
        "HTTP API request successful"
    );

    Ok(text)
}

/// Decode a JSON response body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the body does not match `T`.
pub(crate) fn decode<T: DeserializeOwned>(url: &Url, text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a URL string produced by [`build_api_url`].
///
/// # Errors
///
/// Returns [`ApiError::Transport`] if the string is not a valid URL.
pub(crate) fn parse_url(raw: &str) -> Result<Url, ApiError> {
    Url::parse(raw).map_err(|e| ApiError::Transport {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod request_tests;
