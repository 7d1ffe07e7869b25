// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Desired-state reconciliation and bulk reads for BloxOne DDI resources.
//!
//! # Reconciliation Architecture
//!
//! Every write command follows the same procedure:
//!
//! 1. **Lookup** - Read by explicit id, or list with the natural key as filter
//! 2. **Compare** - Test whether any declared field differs from the remote object
//! 3. **Act** - Create, update, or delete with at most one mutating call
//! 4. **Report** - Return a [`ReconciliationResult`] with before/after snapshots
//!
//! # Available Operations
//!
//! - [`Reconciler::reconcile`] - Converge one typed resource configuration
//! - [`Reconciler::reconcile_desired`] - Converge an already-built [`DesiredConfig`]
//! - [`gather`] - Read one resource by id or every resource matching filters
//!
//! # Example: Creating a Subnet
//!
//! ```rust,no_run
//! use b1ddi::client::BloxOneClient;
//! use b1ddi::config::ClientConfig;
//! use b1ddi::reconcilers::{ImmutableFieldPolicy, Reconciler};
//! use b1ddi::resources::{ModuleParams, SubnetConfig};
//!
//! async fn ensure_subnet(client: &BloxOneClient) -> anyhow::Result<()> {
//!     let api = client.api_for::<SubnetConfig>();
//!     let params: ModuleParams<SubnetConfig> = serde_json::from_str(
//!         r#"{"address": "10.0.0.0/24", "space": "ipam/ip_space/abc"}"#,
//!     )?;
//!
//!     let result = Reconciler::new(&api)
//!         .immutable_fields(ImmutableFieldPolicy::Fail)
//!         .reconcile(params)
//!         .await?;
//!     println!("{}", serde_json::to_string(&result)?);
//!     Ok(())
//! }
//! ```

pub mod diff;
pub mod filter;
pub mod info;
pub mod lookup;
pub mod pagination;
pub mod reconcile;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use info::gather;
pub use reconcile::Reconciler;
pub use types::{
    DesiredConfig, Diff, Identity, ImmutableFieldPolicy, InfoQuery, InfoResult,
    ReconciliationResult,
};
