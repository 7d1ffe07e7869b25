// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! IP space configuration.

use super::{missing, string_key, DhcpDdnsSettings, ResourceDescriptor, ResourceKind};
use crate::constants::{API_PATH_IPAM_IP_SPACE, KIND_IP_SPACE};
use crate::field::{lenient_string, Field};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Desired state of an IP space, located by `name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpSpaceConfig {
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub comment: Field<String>,
    #[serde(flatten)]
    pub dhcp: DhcpDdnsSettings,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub inheritance_sources: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tags: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub vendor_specific_option_option_space: Field<String>,
}

impl ResourceKind for IpSpaceConfig {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        kind: KIND_IP_SPACE,
        api_path: API_PATH_IPAM_IP_SPACE,
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
