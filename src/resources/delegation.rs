// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone delegation configuration.

use super::{missing, string_key, ResourceDescriptor, ResourceKind};
use crate::constants::{API_PATH_DNS_DELEGATION, KIND_DELEGATION};
use crate::field::{lenient_string, Field};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Desired state of a delegation, located by `fqdn`.
///
/// The server does not accept `view` in a delegation filter, so two views
/// delegating the same name make the lookup ambiguous. `fqdn` and `view`
/// are fixed at creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DelegationConfig {
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub comment: Field<String>,
    /// `[{address, fqdn}]` name servers of the child zone
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub delegation_servers: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub disabled: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub fqdn: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub parent: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tags: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub view: Field<String>,
}

impl ResourceKind for DelegationConfig {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        kind: KIND_DELEGATION,
        api_path: API_PATH_DNS_DELEGATION,
        natural_key: &["fqdn"],
        read_only_on_update: &["fqdn", "view"],
    };

    fn missing_for_present(&self) -> Vec<&'static str> {
        missing(&[
            ("fqdn", self.fqdn.as_set().is_some()),
            ("delegation_servers", self.delegation_servers.as_set().is_some()),
            ("view", self.view.as_set().is_some()),
        ])
    }

    fn natural_key(&self) -> Option<Vec<(&'static str, Value)>> {
        string_key("fqdn", &self.fqdn)
    }
}

#[cfg(test)]
#[path = "delegation_tests.rs"]
mod delegation_tests;
