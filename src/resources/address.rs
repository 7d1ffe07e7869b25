// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! IP address reservation configuration.

use super::{missing, ResourceDescriptor, ResourceKind};
use crate::constants::{API_PATH_IPAM_ADDRESS, KIND_ADDRESS};
use crate::field::{lenient_string, Field};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Desired state of a reserved address, located by `(address, space)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressConfig {
    /// Bare IP address
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub address: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub comment: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub host: Field<String>,
    /// MAC address
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub hwaddr: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub interface: Field<String>,
    /// `[{name, type}]`
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub names: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub parent: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub range: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub space: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tags: Field<Map<String, Value>>,
}

impl ResourceKind for AddressConfig {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        kind: KIND_ADDRESS,
        api_path: API_PATH_IPAM_ADDRESS,
        natural_key: &["address", "space"],
        read_only_on_update: &[],
    };

    fn missing_for_present(&self) -> Vec<&'static str> {
        missing(&[
            ("address", self.address.as_set().is_some()),
            ("space", self.space.as_set().is_some()),
        ])
    }

    fn natural_key(&self) -> Option<Vec<(&'static str, Value)>> {
        let address = self.address.as_set()?;
        let space = self.space.as_set()?;
        Some(vec![
            ("address", Value::String(address.clone())),
            ("space", Value::String(space.clone())),
        ])
    }
}

#[cfg(test)]
#[path = "address_tests.rs"]
mod address_tests;
