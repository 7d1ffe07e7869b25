// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Types used in reconciliation and bulk reads.

use crate::client::{Inherit, RemoteObject};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Explicitly provided fields of a desired configuration.
///
/// Never contains control fields (`state`, `id`, credentials) or unset fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DesiredConfig(pub Map<String, Value>);

impl DesiredConfig {
    /// The underlying field map.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Value of one field, if provided.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

impl From<Map<String, Value>> for DesiredConfig {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// How a resource is located.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Identity {
    /// Explicit id; takes precedence over the natural key
    pub id: Option<String>,
    /// Exact-match clauses, `None` when the natural key is incomplete
    pub natural_key: Option<Vec<(&'static str, Value)>>,
}

/// What to do with a read-only field whose desired value differs on update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ImmutableFieldPolicy {
    /// Abort with [`ReconcileError::ImmutableFieldConflict`](crate::errors::ReconcileError::ImmutableFieldConflict)
    #[default]
    Fail,
    /// Remove the field from the update payload and log a warning
    Drop,
}

/// Before/after snapshots of one reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Diff {
    /// Remote object before the call, `{}` if it did not exist
    pub before: RemoteObject,
    /// Remote object after the call, `{}` if it no longer exists
    pub after: RemoteObject,
}

/// Outcome of one reconciliation.
///
/// In dry-run mode only `changed`, `id` (always `None`) and `msg` are populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReconciliationResult {
    /// Whether a mutating call was (or would be) issued
    pub changed: bool,
    /// Resource as stored after the call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<RemoteObject>,
    /// Id of the resource
    pub id: Option<String>,
    /// Before/after snapshots
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<Diff>,
    /// Human-readable summary of the action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

/// Parameter document of an `_info` command.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InfoQuery {
    /// Read exactly this resource
    #[serde(default)]
    pub id: Option<String>,
    /// Exact-match filters joined with `and`
    #[serde(default)]
    pub filters: Option<Map<String, Value>>,
    /// Raw `_filter` expression
    #[serde(default)]
    pub filter_query: Option<String>,
    /// Exact-match tag filters joined with `and`
    #[serde(default)]
    pub tag_filters: Option<Map<String, Value>>,
    /// Raw `_tfilter` expression
    #[serde(default)]
    pub tag_filter_query: Option<String>,
    /// Inheritance metadata mode
    #[serde(default)]
    pub inherit: Inherit,
    /// Per-document CSP URL override
    #[serde(default, alias = "bloxone_csp_url")]
    pub csp_url: Option<String>,
    /// Per-document API key override
    #[serde(default, alias = "bloxone_api_key")]
    pub api_key: Option<String>,
}

/// Outcome of an `_info` command.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InfoResult {
    /// Matching objects, null members removed
    pub objects: Vec<RemoteObject>,
}
