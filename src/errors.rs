// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for b1ddi.
//!
//! This module provides specialized error types for:
//! - BloxOne DDI HTTP API operations (read, list, create, update, delete)
//! - Reconciliation failures (lookup ambiguity, immutable fields, bad parameters)
//! - Client configuration problems
//!
//! The reconciler never recovers from these locally. The only exception is a
//! not-found read while `state=absent`, which is reinterpreted as "no resource".

use serde_json::Value;
use thiserror::Error;

/// Errors returned by the remote resource API.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    /// The API answered with a non-success status code.
    ///
    /// The body is kept verbatim so upstream validation messages reach the caller.
    #[error("{status} {reason} {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase for the status code
        reason: String,
        /// Response body text
        body: String,
    },

    /// The request never produced a response (DNS, TLS, connection refused, timeout).
    #[error("HTTP request to {url} failed: {reason}")]
    Transport {
        /// Request URL
        url: String,
        /// Underlying client error
        reason: String,
    },

    /// The response arrived but could not be decoded.
    #[error("Failed to decode response from {url}: {reason}")]
    Decode {
        /// Request URL
        url: String,
        /// Decoder error
        reason: String,
    },
}

impl ApiError {
    /// HTTP status code, when the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }

    /// Whether this error is an HTTP 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Errors raised while reconciling or reading resources.
#[derive(Error, Debug)]
pub enum ReconcileError {
    /// An explicit id was given with `state=present` and no such resource exists.
    #[error("{kind} '{id}' not found")]
    NotFound {
        /// Resource kind (e.g. `AuthZone`)
        kind: &'static str,
        /// The id that was looked up
        id: String,
    },

    /// More than one resource matched the natural-key filter.
    #[error("Found multiple {kind} matching {filter}: {}", format_matches(.matches))]
    AmbiguousMatch {
        /// Resource kind
        kind: &'static str,
        /// Filter expression that was sent
        filter: String,
        /// The conflicting remote objects
        matches: Vec<Value>,
    },

    /// The desired value of a read-only field differs from the stored one.
    #[error("{field} cannot be updated on {kind}: existing {existing}, desired {desired}")]
    ImmutableFieldConflict {
        /// Resource kind
        kind: &'static str,
        /// Field name
        field: String,
        /// Stored value
        existing: Value,
        /// Requested value
        desired: Value,
    },

    /// Required parameters are missing for the requested state.
    #[error("{kind}: missing required parameters: {}", .fields.join(", "))]
    MissingParameter {
        /// Resource kind
        kind: &'static str,
        /// Names of the missing parameters
        fields: Vec<&'static str>,
    },

    /// A parameter was present but unusable.
    #[error("{kind}: invalid value for {field}: {reason}")]
    InvalidParameter {
        /// Resource kind
        kind: &'static str,
        /// Parameter name
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// A filter value contains a single quote, which the filter grammar cannot express.
    #[error("cannot filter on {field}=={value}: single quotes are not supported in filter values")]
    UnquotableFilterValue {
        /// Filter field name
        field: String,
        /// Offending value
        value: String,
    },

    /// Parameters that cannot be combined were given together.
    #[error("parameters are mutually exclusive: {}", .fields.join("|"))]
    MutuallyExclusive {
        /// The conflicting parameter names
        fields: Vec<&'static str>,
    },

    /// Remote API failure, propagated verbatim.
    #[error("Failed to execute command: {0}")]
    Api(#[from] ApiError),

    /// A configuration could not be turned into a JSON payload.
    #[error("Failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors building the client configuration or loading parameter documents.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No API key was provided by flag or environment.
    #[error("no API key configured (set --api-key or {env})")]
    MissingApiKey {
        /// Environment variable consulted
        env: &'static str,
    },

    /// The CSP URL does not parse or is not http(s).
    #[error("invalid CSP URL '{url}': {reason}")]
    InvalidCspUrl {
        /// Offending URL
        url: String,
        /// Parser message
        reason: String,
    },

    /// The parameter document could not be read.
    #[error("failed to read parameters from {source_name}: {reason}")]
    ParamsUnreadable {
        /// File path or `-` for stdin
        source_name: String,
        /// I/O error message
        reason: String,
    },

    /// The parameter document is not valid YAML/JSON for the command.
    #[error("failed to parse parameters from {source_name}: {reason}")]
    ParamsInvalid {
        /// File path or `-` for stdin
        source_name: String,
        /// Parser message
        reason: String,
    },

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

fn format_matches(matches: &[Value]) -> String {
    let rendered: Vec<String> = matches.iter().map(Value::to_string).collect();
    format!("[{}]", rendered.join(", "))
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod errors_tests;
