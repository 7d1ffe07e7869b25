// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Subnet configuration.

use super::network::{network_key, normalize_network};
use super::{missing, DhcpDdnsSettings, ResourceDescriptor, ResourceKind};
use crate::constants::{API_PATH_IPAM_SUBNET, KIND_SUBNET};
use crate::errors::ReconcileError;
use crate::field::{lenient_string, Field};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Desired state of a subnet, located by `(address, space, cidr)`.
///
/// `space` is fixed at creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubnetConfig {
    /// `a.b.c.d` or `a.b.c.d/n`
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub address: Field<String>,
    /// Prefix length; required when `address` has no `/n`
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub cidr: Field<u8>,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub comment: Field<String>,
    #[serde(flatten)]
    pub dhcp: DhcpDdnsSettings,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub dhcp_host: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub disable_dhcp: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub inheritance_parent: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub inheritance_sources: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub parent: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub rebind_time: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub renew_time: Field<i64>,
    /// Owning IP space id
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub space: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tags: Field<Map<String, Value>>,
    /// Utilization threshold settings
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub threshold: Field<Value>,
}

impl ResourceKind for SubnetConfig {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        kind: KIND_SUBNET,
        api_path: API_PATH_IPAM_SUBNET,
        natural_key: &["address", "space", "cidr"],
        read_only_on_update: &["space"],
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
        normalize_network(KIND_SUBNET, &mut self.address, &mut self.cidr)?;
        Ok(self)
    }
}

#[cfg(test)]
#[path = "subnet_tests.rs"]
mod subnet_tests;
