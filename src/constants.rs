// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for b1ddi.
//!
//! This module contains all numeric and string constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// API Constants
// ============================================================================

/// Default Cloud Services Portal URL
pub const DEFAULT_CSP_URL: &str = "https://csp.infoblox.com";

/// Path prefix of the DDI REST API below the CSP URL
pub const DDI_API_PREFIX: &str = "/api/ddi/v1";

/// Authorization header scheme used by the CSP
pub const AUTH_SCHEME: &str = "Token";

/// API path for DNS views
pub const API_PATH_DNS_VIEW: &str = "dns/view";

/// API path for authoritative DNS zones
pub const API_PATH_DNS_AUTH_ZONE: &str = "dns/auth_zone";

/// API path for IP spaces
pub const API_PATH_IPAM_IP_SPACE: &str = "ipam/ip_space";

/// API path for subnets
pub const API_PATH_IPAM_SUBNET: &str = "ipam/subnet";

/// API path for forward zones
pub const API_PATH_DNS_FORWARD_ZONE: &str = "dns/forward_zone";

/// API path for delegations
pub const API_PATH_DNS_DELEGATION: &str = "dns/delegation";

/// API path for authoritative name server groups
pub const API_PATH_DNS_AUTH_NSG: &str = "dns/auth_nsg";

/// API path for address blocks
pub const API_PATH_IPAM_ADDRESS_BLOCK: &str = "ipam/address_block";

/// API path for IP addresses
pub const API_PATH_IPAM_ADDRESS: &str = "ipam/address";

/// API path for IPAM hosts
pub const API_PATH_IPAM_HOST: &str = "ipam/host";

// ============================================================================
// Resource Kind Names
// ============================================================================

/// Kind name for DNS views
pub const KIND_VIEW: &str = "View";

/// Kind name for authoritative zones
pub const KIND_AUTH_ZONE: &str = "AuthZone";

/// Kind name for IP spaces
pub const KIND_IP_SPACE: &str = "IpSpace";

/// Kind name for subnets
pub const KIND_SUBNET: &str = "Subnet";

/// Kind name for forward zones
pub const KIND_FORWARD_ZONE: &str = "ForwardZone";

/// Kind name for delegations
pub const KIND_DELEGATION: &str = "Delegation";

/// Kind name for authoritative name server groups
pub const KIND_AUTH_NSG: &str = "AuthNsg";

/// Kind name for address blocks
pub const KIND_ADDRESS_BLOCK: &str = "AddressBlock";

/// Kind name for IP addresses
pub const KIND_ADDRESS: &str = "Address";

/// Kind name for IPAM hosts
pub const KIND_IPAM_HOST: &str = "IpamHost";

// ============================================================================
// Query Parameter Names
// ============================================================================

/// Filter expression query parameter
pub const QUERY_FILTER: &str = "_filter";

/// Tag filter expression query parameter
pub const QUERY_TAG_FILTER: &str = "_tfilter";

/// Page offset query parameter
pub const QUERY_OFFSET: &str = "_offset";

/// Page size query parameter
pub const QUERY_LIMIT: &str = "_limit";

/// Inheritance metadata query parameter
pub const QUERY_INHERIT: &str = "_inherit";

// ============================================================================
// Pagination
// ============================================================================

/// Page size used by the `_info` bulk reader
pub const INFO_LIST_PAGE_SIZE: u32 = 1000;

// ============================================================================
// Configuration
// ============================================================================

/// Environment variable holding the CSP API key
pub const ENV_API_KEY: &str = "BLOXONE_API_KEY";

/// Environment variable holding the CSP URL
pub const ENV_CSP_URL: &str = "BLOXONE_CSP_URL";

/// Default HTTP request timeout
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("b1ddi/", env!("CARGO_PKG_VERSION"));
