// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Locating the existing remote resource for a reconciliation.

use super::diff::prune_nulls;
use super::filter::{exact_match, is_quotable};
use super::types::Identity;
use crate::client::{Inherit, ListParams, RemoteObject, ResourceApi};
use crate::errors::ReconcileError;
use crate::resources::{ResourceDescriptor, State};
use serde_json::Value;
use tracing::{debug, info};

/// Find the resource addressed by `identity`.
///
/// - With an explicit id the resource is read directly. A 404 means "no
///   resource" when `state` is absent and is an error otherwise: a pinned id
///   that does not exist is never silently created.
/// - Without an id the natural key is used as an exact-match filter. Zero
///   matches means "no resource", more than one is an error.
///
/// The returned object has its null members removed.
///
/// # Errors
///
/// Returns [`ReconcileError::NotFound`], [`ReconcileError::AmbiguousMatch`],
/// [`ReconcileError::MissingParameter`] when neither id nor natural key is
/// available, [`ReconcileError::InvalidParameter`] for a natural-key value
/// that cannot be quoted, or the propagated API error.
pub async fn find_existing<A>(
    api: &A,
    descriptor: &ResourceDescriptor,
    identity: &Identity,
    state: State,
    inherit: Inherit,
) -> Result<Option<RemoteObject>, ReconcileError>
where
    A: ResourceApi + ?Sized,
{
    if let Some(id) = &identity.id {
        debug!(kind = descriptor.kind, id = %id, "Looking up resource by id");
        return match api.read(id, inherit).await {
            Ok(object) => Ok(Some(prune_nulls(object))),
            Err(e) if e.is_not_found() && state == State::Absent => {
                info!(kind = descriptor.kind, id = %id, "Resource already absent");
                Ok(None)
            }
            Err(e) if e.is_not_found() => Err(ReconcileError::NotFound {
                kind: descriptor.kind,
                id: id.clone(),
            }),
            Err(e) => Err(e.into()),
        };
    }

    let Some(key) = &identity.natural_key else {
        return Err(ReconcileError::MissingParameter {
            kind: descriptor.kind,
            fields: descriptor.natural_key.to_vec(),
        });
    };
    if let Some((field, value)) = key.iter().find(|(_, value)| !is_quotable(value)) {
        return Err(ReconcileError::InvalidParameter {
            kind: descriptor.kind,
            field: *field,
            reason: format!("{value} contains a single quote, which a filter cannot express"),
        });
    }
    let Some(filter) = exact_match(key.iter().map(|(k, v)| (*k, v)))? else {
        return Err(ReconcileError::MissingParameter {
            kind: descriptor.kind,
            fields: descriptor.natural_key.to_vec(),
        });
    };

    debug!(kind = descriptor.kind, filter = %filter, "Looking up resource by natural key");
    let params = ListParams {
        filter: Some(filter.clone()),
        inherit,
        ..Default::default()
    };
    let mut results = api.list(&params).await?;

    match results.len() {
        0 => Ok(None),
        1 => Ok(results.pop().map(prune_nulls)),
        _ => Err(ReconcileError::AmbiguousMatch {
            kind: descriptor.kind,
            filter,
            matches: results.into_iter().map(Value::Object).collect(),
        }),
    }
}
