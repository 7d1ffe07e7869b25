// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Forward zone configuration.

use super::{missing, string_key, ResourceDescriptor, ResourceKind};
use crate::constants::{API_PATH_DNS_FORWARD_ZONE, KIND_FORWARD_ZONE};
use crate::field::{lenient_string, Field};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Desired state of a forward zone, located by `fqdn`.
///
/// `fqdn` is fixed at creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForwardZoneConfig {
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub comment: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub disabled: Field<bool>,
    /// `[{address, fqdn}]` forwarders outside BloxOne
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub external_forwarders: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub forward_only: Field<bool>,
    /// Zone name, e.g. `corp.example.`
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub fqdn: Field<String>,
    /// DNS host ids serving the zone
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub hosts: Field<Vec<String>>,
    /// Forwarder host ids
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub internal_forwarders: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub nsgs: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub parent: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tags: Field<Map<String, Value>>,
    /// Owning view id
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub view: Field<String>,
}

impl ResourceKind for ForwardZoneConfig {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        kind: KIND_FORWARD_ZONE,
        api_path: API_PATH_DNS_FORWARD_ZONE,
        natural_key: &["fqdn"],
        read_only_on_update: &["fqdn"],
    };

    fn missing_for_present(&self) -> Vec<&'static str> {
        missing(&[("fqdn", self.fqdn.as_set().is_some())])
    }

    fn natural_key(&self) -> Option<Vec<(&'static str, Value)>> {
        string_key("fqdn", &self.fqdn)
    }
}

#[cfg(test)]
#[path = "forward_zone_tests.rs"]
mod forward_zone_tests;
