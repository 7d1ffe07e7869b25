// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Authoritative DNS zone configuration.

use super::{missing, string_key, ResourceDescriptor, ResourceKind};
use crate::constants::{API_PATH_DNS_AUTH_ZONE, KIND_AUTH_ZONE};
use crate::field::{lenient_string, Field};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Desired state of an authoritative zone, located by `fqdn`.
///
/// `fqdn` and `primary_type` are fixed at creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthZoneConfig {
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub comment: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub disabled: Field<bool>,
    /// External primaries for a secondary zone
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub external_primaries: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub external_secondaries: Field<Value>,
    /// Zone name, e.g. `example.com.`
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub fqdn: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub gss_tsig_enabled: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub inheritance_sources: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub initial_soa_serial: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub internal_secondaries: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub notify: Field<bool>,
    /// Name server group ids
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub nsgs: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub parent: Field<String>,
    /// `cloud` or `external`
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub primary_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub query_acl: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tags: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub transfer_acl: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub update_acl: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub use_forwarders_for_subzones: Field<bool>,
    /// Owning view id
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub view: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub zone_authority: Field<Value>,
}

impl ResourceKind for AuthZoneConfig {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        kind: KIND_AUTH_ZONE,
        api_path: API_PATH_DNS_AUTH_ZONE,
        natural_key: &["fqdn"],
        read_only_on_update: &["fqdn", "primary_type"],
    };

    fn missing_for_present(&self) -> Vec<&'static str> {
        missing(&[
            ("fqdn", self.fqdn.as_set().is_some()),
            ("primary_type", self.primary_type.as_set().is_some()),
        ])
    }

    fn natural_key(&self) -> Option<Vec<(&'static str, Value)>> {
        string_key("fqdn", &self.fqdn)
    }
}
