// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Typed desired-state configurations for BloxOne DDI resources.
//!
//! Each resource kind is a plain struct of tri-state [`Field`]s plus a
//! [`ResourceKind`] implementation describing where it lives in the API, how
//! it is found without an id, and which fields must not change after creation.
//!
//! Scalar fields are typed. Deeply nested vendor structures (ACLs, inheritance
//! sources, DHCP and ASM configuration, ...) are carried as opaque JSON.
//!
//! # Example
//!
//! ```rust
//! use b1ddi::resources::{ModuleParams, State, ViewConfig};
//!
//! let params: ModuleParams<ViewConfig> =
//!     serde_json::from_str(r#"{"name": "view1", "comment": null}"#).unwrap();
//! assert_eq!(params.state, State::Present);
//! assert!(params.resource.comment.is_provided());
//! assert!(params.resource.disabled.is_unset());
//! ```

pub mod address;
pub mod address_block;
pub mod auth_nsg;
pub mod auth_zone;
pub mod delegation;
pub mod dhcp;
pub mod forward_zone;
pub mod host;
pub mod ip_space;
mod network;
pub mod subnet;
pub mod view;

pub use address::AddressConfig;
pub use address_block::AddressBlockConfig;
pub use auth_nsg::AuthNsgConfig;
pub use auth_zone::AuthZoneConfig;
pub use delegation::DelegationConfig;
pub use dhcp::DhcpDdnsSettings;
pub use forward_zone::ForwardZoneConfig;
pub use host::HostConfig;
pub use ip_space::IpSpaceConfig;
pub use subnet::SubnetConfig;
pub use view::ViewConfig;

use crate::errors::ReconcileError;
use crate::field::Field;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Static facts about a resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Display name used in messages (e.g. `AuthZone`)
    pub kind: &'static str,
    /// Collection path below `/api/ddi/v1`
    pub api_path: &'static str,
    /// Fields forming the natural key, in filter order
    pub natural_key: &'static [&'static str],
    /// Fields the server refuses to change after creation
    pub read_only_on_update: &'static [&'static str],
}

/// Requested end state of a resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    /// The resource must exist and match the desired configuration
    #[default]
    Present,
    /// The resource must not exist
    Absent,
}

impl State {
    /// Lowercase name as written in parameter documents.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

/// A desired-state configuration of one resource kind.
pub trait ResourceKind: Serialize + DeserializeOwned + Send + Sync {
    /// Static description of the kind.
    const DESCRIPTOR: ResourceDescriptor;

    /// Names of the fields required for `state=present` that are not set.
    fn missing_for_present(&self) -> Vec<&'static str>;

    /// Exact-match clauses locating the resource without an id, or `None` if
    /// the configuration does not carry the complete natural key.
    fn natural_key(&self) -> Option<Vec<(&'static str, Value)>>;

    /// Canonicalize field values before comparison and sending.
    ///
    /// # Errors
    ///
    /// Returns [`ReconcileError::InvalidParameter`] for values that cannot be used.
    fn normalize(self) -> Result<Self, ReconcileError> {
        Ok(self)
    }

    /// Provided fields as a JSON object: unset fields are absent, explicit
    /// nulls are `null`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not serialize to an object.
    fn to_payload(&self) -> Result<Map<String, Value>, ReconcileError> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(ReconcileError::InvalidParameter {
                kind: Self::DESCRIPTOR.kind,
                field: "<root>",
                reason: format!("expected an object, got {other}"),
            }),
        }
    }
}


/// Parameter document of a write command: control fields plus the resource.
///
/// The control fields are `id`, `state`, `csp_url` (alias `bloxone_csp_url`)
/// and `api_key` (alias `bloxone_api_key`). Every other key must be a field of
/// `R`; unknown keys are an error.
#[derive(Debug, Clone, Default)]
pub struct ModuleParams<R> {
    /// Explicit resource id; bypasses natural-key lookup
    pub id: Option<String>,
    /// Requested state
    pub state: State,
    /// Per-document CSP URL override
    pub csp_url: Option<String>,
    /// Per-document API key override
    pub api_key: Option<String>,
    /// Desired resource fields
    pub resource: R,
}

impl<'de, R: ResourceKind> Deserialize<'de> for ModuleParams<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut document = Map::<String, Value>::deserialize(deserializer)?;

        let id = take::<Option<String>, D::Error>(&mut document, "id")?.flatten();
        let state = take::<Option<State>, D::Error>(&mut document, "state")?
            .flatten()
            .unwrap_or_default();
        let csp_url = take_aliased::<D::Error>(&mut document, "csp_url", "bloxone_csp_url")?;
        let api_key = take_aliased::<D::Error>(&mut document, "api_key", "bloxone_api_key")?;

        let resource: R = serde_json::from_value(Value::Object(document.clone()))
            .map_err(D::Error::custom)?;

        // Every provided field, null or not, comes back out of the payload
        let accepted = resource.to_payload().map_err(D::Error::custom)?;
        let unknown: Vec<&str> = document
            .keys()
            .filter(|key| !accepted.contains_key(key.as_str()))
            .map(String::as_str)
            .collect();
        if !unknown.is_empty() {
            return Err(D::Error::custom(format!(
                "{}: unsupported parameters: {}",
                R::DESCRIPTOR.kind,
                unknown.join(", ")
            )));
        }

        Ok(Self {
            id,
            state,
            csp_url,
            api_key,
            resource,
        })
    }
}

/// A string control field that may also be spelled `alias`; the primary name wins.
fn take_aliased<E: serde::de::Error>(
    document: &mut Map<String, Value>,
    key: &str,
    alias: &str,
) -> Result<Option<String>, E> {
    let primary = take::<Option<String>, E>(document, key)?.flatten();
    let aliased = take::<Option<String>, E>(document, alias)?.flatten();
    Ok(primary.or(aliased))
}

fn take<T: DeserializeOwned, E: serde::de::Error>(
    document: &mut Map<String, Value>,
    key: &str,
) -> Result<Option<T>, E> {
    document
        .remove(key)
        .map(|value| serde_json::from_value(value).map_err(|e| E::custom(format!("{key}: {e}"))))
        .transpose()
}

/// Names of `fields` whose value is not set.
pub(crate) fn missing(fields: &[(&'static str, bool)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, is_set)| !is_set)
        .map(|(name, _)| *name)
        .collect()
}

/// A single string-valued natural key clause.
pub(crate) fn string_key(name: &'static str, field: &Field<String>) -> Option<Vec<(&'static str, Value)>> {
    field
        .as_set()
        .map(|value| vec![(name, Value::String(value.clone()))])
}
