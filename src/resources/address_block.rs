// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Address block configuration.

use super::network::{network_key, normalize_network};
use super::{missing, DhcpDdnsSettings, ResourceDescriptor, ResourceKind};
use crate::constants::{API_PATH_IPAM_ADDRESS_BLOCK, KIND_ADDRESS_BLOCK};
use crate::errors::ReconcileError;
use crate::field::{lenient_string, Field};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Desired state of an address block, located by `(address, space, cidr)`.
///
/// All three key fields are fixed at creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressBlockConfig {
    /// `a.b.c.d` or `a.b.c.d/n`
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub address: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub cidr: Field<u8>,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub comment: Field<String>,
    #[serde(flatten)]
    pub dhcp: DhcpDdnsSettings,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub inheritance_parent: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub inheritance_sources: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub parent: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub space: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tags: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub threshold: Field<Value>,
}

impl ResourceKind for AddressBlockConfig {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        kind: KIND_ADDRESS_BLOCK,
        api_path: API_PATH_IPAM_ADDRESS_BLOCK,
        natural_key: &["address", "space", "cidr"],
        read_only_on_update: &["address", "space", "cidr"],
    };

    fn missing_for_present(&self) -> Vec<&'static str> {
        missing(&[
            ("address", self.address.as_set().is_some()),
            ("space", self.space.as_set().is_some()),
        ])
    }

    fn natural_key(&self) -> Option<Vec<(&'static str, Value)>> {
        network_key(&self.address, &self.space, &self.cidr)
    }

    fn normalize(mut self) -> Result<Self, ReconcileError> {
        normalize_network(KIND_ADDRESS_BLOCK, &mut self.address, &mut self.cidr)?;
        Ok(self)
    }
}

#[cfg(test)]
#[path = "address_block_tests.rs"]
mod address_block_tests;
