// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! DNS view configuration.

use super::{missing, string_key, ResourceDescriptor, ResourceKind};
use crate::constants::{API_PATH_DNS_VIEW, KIND_VIEW};
use crate::field::{lenient_string, Field};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Desired state of a DNS view, located by `name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub add_edns_option_in_outgoing_query: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub comment: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub custom_root_ns: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub custom_root_ns_enabled: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub disabled: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub dnssec_enable_validation: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub dnssec_enabled: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub dnssec_trust_anchors: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub dnssec_validate_expiry: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub dtc_config: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ecs_enabled: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ecs_forwarding: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ecs_zones: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub edns_udp_size: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub filter_aaaa_acl: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub forwarders: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub forwarders_only: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub gss_tsig_enabled: Field<bool>,
    /// Per-field inherit/override actions, passed through untouched
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub inheritance_sources: Field<Value>,
    /// Ids of the IP spaces this view serves
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ip_spaces: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub lame_ttl: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub match_clients_acl: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub match_destinations_acl: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub match_recursive_only: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub max_cache_ttl: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub max_negative_ttl: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub max_udp_size: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub minimal_responses: Field<bool>,
    /// View name, unique per account
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub notify: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub query_acl: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub recursion_acl: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub recursion_enabled: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub sort_list: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub synthesize_address_records_from_https: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tags: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub transfer_acl: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub update_acl: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub use_forwarders_for_subzones: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub zone_authority: Field<Value>,
}

impl ResourceKind for ViewConfig {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        kind: KIND_VIEW,
        api_path: API_PATH_DNS_VIEW,
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
