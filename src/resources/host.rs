// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! IPAM host configuration.

use super::{missing, string_key, ResourceDescriptor, ResourceKind};
use crate::constants::{API_PATH_IPAM_HOST, KIND_IPAM_HOST};
use crate::field::{lenient_string, Field};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Desired state of an IPAM host, located by `name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    /// `[{address, ref, space}]`
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub addresses: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub auto_generate_records: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub comment: Field<String>,
    /// `[{alias, name, primary_name, zone}]`
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub host_names: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tags: Field<Map<String, Value>>,
}

impl ResourceKind for HostConfig {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        kind: KIND_IPAM_HOST,
        api_path: API_PATH_IPAM_HOST,
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
#[path = "host_tests.rs"]
mod host_tests;
