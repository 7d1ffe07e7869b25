// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Command dispatch for the `b1ddi` binary.
//!
//! Each command loads a parameter document, resolves connection settings and
//! runs either a [`Reconciler`] (write commands) or [`gather`] (`*-info`
//! commands). The result is returned as a JSON document.
//!
//! Connection settings are taken from command line flags first, then from the
//! `csp_url` / `api_key` members of the parameter document, then from the
//! environment.

use crate::client::BloxOneClient;
use crate::config::{load_params, ClientConfig};
use crate::constants::INFO_LIST_PAGE_SIZE;
use crate::errors::ConfigError;
use crate::reconcilers::{gather, ImmutableFieldPolicy, InfoQuery, Reconciler};
use crate::resources::{
    AddressBlockConfig, AddressConfig, AuthNsgConfig, AuthZoneConfig, DelegationConfig,
    ForwardZoneConfig, HostConfig, IpSpaceConfig, ModuleParams, ResourceKind, SubnetConfig,
    ViewConfig,
};
use anyhow::Result;
use clap::ValueEnum;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// A resource command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Command {
    /// Reconcile a DNS view
    DnsView,
    /// Read DNS views
    DnsViewInfo,
    /// Reconcile an authoritative DNS zone
    DnsAuthZone,
    /// Read authoritative DNS zones
    DnsAuthZoneInfo,
    /// Reconcile a forward zone
    DnsForwardZone,
    /// Read forward zones
    DnsForwardZoneInfo,
    /// Reconcile a zone delegation
    DnsDelegation,
    /// Read zone delegations
    DnsDelegationInfo,
    /// Reconcile an authoritative name server group
    DnsAuthNsg,
    /// Read authoritative name server groups
    DnsAuthNsgInfo,
    /// Reconcile an IP space
    IpamIpSpace,
    /// Read IP spaces
    IpamIpSpaceInfo,
    /// Reconcile a subnet
    IpamSubnet,
    /// Read subnets
    IpamSubnetInfo,
    /// Reconcile an address block
    IpamAddressBlock,
    /// Read address blocks
    IpamAddressBlockInfo,
    /// Reconcile a reserved IP address
    IpamAddress,
    /// Read reserved IP addresses
    IpamAddressInfo,
    /// Reconcile an IPAM host
    IpamHost,
    /// Read IPAM hosts
    IpamHostInfo,
}

/// Options shared by every command.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// CSP URL override
    pub csp_url: Option<String>,
    /// API key override
    pub api_key: Option<String>,
    /// Compute changes without issuing mutating calls
    pub check_mode: bool,
    /// Handling of read-only fields on update
    pub immutable_fields: ImmutableFieldPolicy,
}

/// Run `command` with the parameter document at `source` (`-` for stdin).
///
/// # Errors
///
/// Returns an error if the document cannot be loaded, the connection settings
/// are incomplete, or the reconciliation or read fails.
pub async fn execute(command: Command, source: &Path, options: &RunOptions) -> Result<Value> {
    debug!(command = ?command, source = %source.display(), "Executing command");
    match command {
        Command::DnsView => write::<ViewConfig>(source, options).await,
        Command::DnsViewInfo => read::<ViewConfig>(source, options).await,
        Command::DnsAuthZone => write::<AuthZoneConfig>(source, options).await,
        Command::DnsAuthZoneInfo => read::<AuthZoneConfig>(source, options).await,
        Command::DnsForwardZone => write::<ForwardZoneConfig>(source, options).await,
        Command::DnsForwardZoneInfo => read::<ForwardZoneConfig>(source, options).await,
        Command::DnsDelegation => write::<DelegationConfig>(source, options).await,
        Command::DnsDelegationInfo => read::<DelegationConfig>(source, options).await,
        Command::DnsAuthNsg => write::<AuthNsgConfig>(source, options).await,
        Command::DnsAuthNsgInfo => read::<AuthNsgConfig>(source, options).await,
        Command::IpamIpSpace => write::<IpSpaceConfig>(source, options).await,
        Command::IpamIpSpaceInfo => read::<IpSpaceConfig>(source, options).await,
        Command::IpamSubnet => write::<SubnetConfig>(source, options).await,
        Command::IpamSubnetInfo => read::<SubnetConfig>(source, options).await,
        Command::IpamAddressBlock => write::<AddressBlockConfig>(source, options).await,
        Command::IpamAddressBlockInfo => read::<AddressBlockConfig>(source, options).await,
        Command::IpamAddress => write::<AddressConfig>(source, options).await,
        Command::IpamAddressInfo => read::<AddressConfig>(source, options).await,
        Command::IpamHost => write::<HostConfig>(source, options).await,
        Command::IpamHostInfo => read::<HostConfig>(source, options).await,
    }
}

async fn write<R: ResourceKind>(source: &Path, options: &RunOptions) -> Result<Value> {
    let params: ModuleParams<R> = load_params(source)?;
    let client = connect(options, params.csp_url.clone(), params.api_key.clone())?;
    let api = client.api_for::<R>();

    let result = Reconciler::new(&api)
        .check_mode(options.check_mode)
        .immutable_fields(options.immutable_fields)
        .reconcile(params)
        .await?;

    Ok(serde_json::to_value(result)?)
}

async fn read<R: ResourceKind>(source: &Path, options: &RunOptions) -> Result<Value> {
    let query: InfoQuery = load_params(source)?;
    let client = connect(options, query.csp_url.clone(), query.api_key.clone())?;
    let api = client.api_for::<R>();

    let result = gather(&api, &query, INFO_LIST_PAGE_SIZE, options.check_mode).await?;

    Ok(serde_json::to_value(result)?)
}

fn connect(
    options: &RunOptions,
    csp_url: Option<String>,
    api_key: Option<String>,
) -> Result<BloxOneClient, ConfigError> {
    let config = ClientConfig::resolve(
        options.csp_url.clone().or(csp_url),
        options.api_key.clone().or(api_key),
    )?;
    BloxOneClient::new(&config)
}
