// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # b1ddi - Desired-state management for BloxOne DDI
//!
//! b1ddi converges BloxOne DDI resources towards a declared configuration. A
//! caller describes what a DNS view, zone, name server group, IP space, address
//! block, subnet or address should look like; b1ddi finds the existing
//! resource, works out whether it differs, and creates, updates or deletes it
//! with at most one API call.
//!
//! ## Overview
//!
//! - Typed per-kind configurations with tri-state fields (unset, null, set)
//! - Lookup by explicit id or by natural key (name, fqdn, address+space+cidr)
//! - Containment-based change detection that ignores undeclared fields
//! - Check mode reporting the change without applying it
//! - Paginated bulk reads for the `*-info` commands
//!
//! ## Modules
//!
//! - [`resources`] - Typed configurations and per-kind metadata
//! - [`reconcilers`] - Lookup, change detection, reconciliation and bulk reads
//! - [`client`] - HTTP client for the BloxOne DDI REST API
//! - [`config`] - Connection settings and parameter documents
//! - [`commands`] - Command dispatch used by the `b1ddi` binary
//!
//! ## Example
//!
//! ```rust
//! use b1ddi::resources::{ModuleParams, ResourceKind, SubnetConfig};
//!
//! let params: ModuleParams<SubnetConfig> = serde_json::from_str(
//!     r#"{"address": "10.0.0.0/24", "space": "ipam/ip_space/abc"}"#,
//! )
//! .unwrap();
//!
//! let subnet = params.resource.normalize().unwrap();
//! assert_eq!(subnet.address.as_set().map(String::as_str), Some("10.0.0.0"));
//! assert_eq!(subnet.cidr.as_set(), Some(&24));
//! ```

pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod errors;
pub mod field;
pub mod reconcilers;
pub mod resources;
