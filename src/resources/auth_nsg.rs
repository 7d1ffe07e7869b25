// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Authoritative name server group configuration.

use super::{missing, string_key, ResourceDescriptor, ResourceKind};
use crate::constants::{API_PATH_DNS_AUTH_NSG, KIND_AUTH_NSG};
use crate::field::{lenient_string, Field};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Desired state of a name server group, located by `name`.
///
/// Primary and secondary lists carry TSIG keys and are passed through as JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthNsgConfig {
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub comment: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub external_primaries: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub external_secondaries: Field<Value>,
    /// `[{host}]` BloxOne hosts acting as secondaries
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub internal_secondaries: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub name: Field<String>,
    /// Nested name server groups
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub nsgs: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tags: Field<Map<String, Value>>,
}

impl ResourceKind for AuthNsgConfig {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        kind: KIND_AUTH_NSG,
        api_path: API_PATH_DNS_AUTH_NSG,
        natural_key: &["name"],
        read_only_on_update: &[],
    };

    fn missing_for_present(&self) -> Vec<&'static str> {
        missing(&[("name", self.name.as_set().is_some())])
    }

    fn natural_key(&self) -> Option<Vec<(&'static str, Value)>> {
        string_key("name", &self.name)
    }
}

#[cfg(test)]
#[path = "auth_nsg_tests.rs"]
mod auth_nsg_tests;
