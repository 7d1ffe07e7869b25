// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! `address` / `cidr` handling for network resources.
//!
//! The server stores `address` as a bare IP with the prefix length in `cidr`.
//! Callers may write `address: 10.0.0.0/24`; [`normalize_network`] splits that
//! form so the lookup filter and the change comparison see what the server
//! returns on read.

use crate::errors::ReconcileError;
use crate::field::Field;
use serde_json::Value;
use std::net::IpAddr;

/// Split a prefixed `address` into `address` + `cidr` and validate both.
///
/// An explicit `cidr` wins over the one embedded in the address.
///
/// # Errors
///
/// Returns [`ReconcileError::InvalidParameter`] for an unparsable address or
/// prefix, or a prefix longer than the address family allows.
pub(crate) fn normalize_network(
    kind: &'static str,
    address: &mut Field<String>,
    cidr: &mut Field<u8>,
) -> Result<(), ReconcileError> {
    let Some(raw) = address.as_set().cloned() else {
        return Ok(());
    };

    let (host, prefix) = split_address(kind, &raw)?;
    let ip: IpAddr = host.parse().map_err(|_| ReconcileError::InvalidParameter {
        kind,
        field: "address",
        reason: format!("'{host}' is not an IP address"),
    })?;

    if let Some(prefix) = prefix {
        if cidr.as_set().is_none() {
            *cidr = Field::Set(prefix);
        }
    }
    if let Some(len) = cidr.as_set() {
        let max = if ip.is_ipv4() { 32 } else { 128 };
        if *len > max {
            return Err(ReconcileError::InvalidParameter {
                kind,
                field: "cidr",
                reason: format!("{len} exceeds {max} for {ip}"),
            });
        }
    }

    *address = Field::Set(host.to_string());
    Ok(())
}

/// Split `a.b.c.d/n` into host and prefix length.
fn split_address<'a>(
    kind: &'static str,
    raw: &'a str,
) -> Result<(&'a str, Option<u8>), ReconcileError> {
    match raw.split_once('/') {
        None => Ok((raw.trim(), None)),
        Some((host, prefix)) => {
            let prefix = prefix
                .trim()
                .parse::<u8>()
                .map_err(|_| ReconcileError::InvalidParameter {
                    kind,
                    field: "address",
                    reason: format!("'{raw}' has an invalid prefix length"),
                })?;
            Ok((host.trim(), Some(prefix)))
        }
    }
}

/// `(address, space, cidr)` clauses, or `None` while any part is unknown.
pub(crate) fn network_key(
    address: &Field<String>,
    space: &Field<String>,
    cidr: &Field<u8>,
) -> Option<Vec<(&'static str, Value)>> {
    let address = address.as_set()?;
    let space = space.as_set()?;
    let cidr = cidr.as_set()?;
    Some(vec![
        ("address", Value::String(address.clone())),
        ("space", Value::String(space.clone())),
        ("cidr", Value::from(*cidr)),
    ])
}
