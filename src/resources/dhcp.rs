// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! DHCP and DDNS settings shared by IP spaces, address blocks and subnets.

use crate::field::{lenient_string, Field};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// DHCP/DDNS fields common to [`IpSpaceConfig`](super::IpSpaceConfig),
/// [`AddressBlockConfig`](super::AddressBlockConfig) and
/// [`SubnetConfig`](super::SubnetConfig). Flattened into each.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DhcpDdnsSettings {
    /// Address Space Management configuration
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub asm_config: Field<Value>,
    /// DDNS client update mode (`client`, `server`, `ignore`, `over_client`, `over_no_update`)
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub ddns_client_update: Field<String>,
    /// DDNS conflict resolution mode
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub ddns_conflict_resolution_mode: Field<String>,
    /// Domain name for DDNS updates
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub ddns_domain: Field<String>,
    /// Generate a hostname when the client does not supply one
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ddns_generate_name: Field<bool>,
    /// Prefix for generated hostnames
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub ddns_generated_prefix: Field<String>,
    /// Send DDNS updates
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ddns_send_updates: Field<bool>,
    /// DDNS record TTL as a percentage of the lease time
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ddns_ttl_percent: Field<f64>,
    /// Update DNS on lease renewal
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ddns_update_on_renew: Field<bool>,
    /// Use DHCID-based conflict resolution
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ddns_use_conflict_resolution: Field<bool>,
    /// Shared DHCP configuration
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub dhcp_config: Field<Value>,
    /// DHCP options
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub dhcp_options: Field<Value>,
    /// Header option `file` field
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub header_option_filename: Field<String>,
    /// Header option `siaddr` field
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub header_option_server_address: Field<String>,
    /// Header option `sname` field
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub header_option_server_name: Field<String>,
    /// Replacement character for invalid hostname characters
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub hostname_rewrite_char: Field<String>,
    /// Rewrite client-supplied hostnames
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub hostname_rewrite_enabled: Field<bool>,
    /// Characters considered invalid in hostnames
    #[serde(default, skip_serializing_if = "Field::is_unset", deserialize_with = "lenient_string")]
    pub hostname_rewrite_regex: Field<String>,
}
