// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Desired-state reconciliation for one resource.
//!
//! The reconciler looks the resource up, decides between create, update,
//! delete and no-op, and issues at most one mutating call. In check mode it
//! stops right before that call.
//!
//! | Remote  | `state`   | Action                             |
//! |---------|-----------|------------------------------------|
//! | absent  | `present` | create                             |
//! | absent  | `absent`  | no-op                              |
//! | present | `present` | update if a declared field differs |
//! | present | `absent`  | delete                             |

use super::diff::{is_changed, prune_nulls};
use super::lookup::find_existing;
use super::types::{
    DesiredConfig, Diff, Identity, ImmutableFieldPolicy, ReconciliationResult,
};
use crate::client::{Inherit, RemoteObject, ResourceApi};
use crate::errors::ReconcileError;
use crate::resources::{ModuleParams, ResourceDescriptor, ResourceKind, State};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

/// Converges one remote resource towards a desired configuration.
///
/// The API handle is injected; the reconciler holds no other state and can be
/// reused for any number of resources of the same collection.
///
/// # Example
///
/// ```rust,no_run
/// use b1ddi::client::BloxOneClient;
/// use b1ddi::config::ClientConfig;
/// use b1ddi::reconcilers::Reconciler;
/// use b1ddi::resources::{ModuleParams, ViewConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = BloxOneClient::new(&ClientConfig::resolve(None, None)?)?;
/// let api = client.api_for::<ViewConfig>();
///
/// let params: ModuleParams<ViewConfig> = serde_json::from_str(r#"{"name": "view1"}"#)?;
/// let result = Reconciler::new(&api).reconcile(params).await?;
/// println!("changed: {}", result.changed);
/// # Ok(())
/// # }
/// ```
pub struct Reconciler<'a, A: ResourceApi + ?Sized> {
    api: &'a A,
    check_mode: bool,
    inherit: Inherit,
    immutable_fields: ImmutableFieldPolicy,
}

impl<'a, A: ResourceApi + ?Sized> Reconciler<'a, A> {
    /// Reconciler issuing real calls, `inherit=full`, failing on immutable-field conflicts.
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            check_mode: false,
            inherit: Inherit::Full,
            immutable_fields: ImmutableFieldPolicy::Fail,
        }
    }

    /// Compute the change but issue no mutating call.
    #[must_use]
    pub fn check_mode(mut self, check_mode: bool) -> Self {
        self.check_mode = check_mode;
        self
    }

    /// Inheritance metadata mode for every call.
    #[must_use]
    pub fn inherit(mut self, inherit: Inherit) -> Self {
        self.inherit = inherit;
        self
    }

    /// Handling of read-only fields on update.
    #[must_use]
    pub fn immutable_fields(mut self, policy: ImmutableFieldPolicy) -> Self {
        self.immutable_fields = policy;
        self
    }

    /// Reconcile a typed parameter document.
    ///
    /// Normalizes the configuration, checks the fields required for
    /// `state=present` and, without an id, for the natural key, then runs
    /// [`Reconciler::reconcile_desired`].
    ///
    /// # Errors
    ///
    /// Returns an error for invalid or missing parameters, lookup failures,
    /// immutable-field conflicts, or API failures.
    pub async fn reconcile<R: ResourceKind>(
        &self,
        params: ModuleParams<R>,
    ) -> Result<ReconciliationResult, ReconcileError> {
        let descriptor = R::DESCRIPTOR;
        let resource = params.resource.normalize()?;

        if params.state == State::Present {
            let missing = resource.missing_for_present();
            if !missing.is_empty() {
                return Err(ReconcileError::MissingParameter {
                    kind: descriptor.kind,
                    fields: missing,
                });
            }
        }

        let desired = DesiredConfig::from(resource.to_payload()?);
        let identity = Identity {
            id: params.id,
            natural_key: resource.natural_key(),
        };
        if identity.id.is_none() && identity.natural_key.is_none() {
            return Err(ReconcileError::MissingParameter {
                kind: descriptor.kind,
                fields: unset_key_fields(&descriptor, &desired),
            });
        }

        self.reconcile_desired(&descriptor, &desired, &identity, params.state)
            .await
    }

    /// Reconcile an already-built desired configuration.
    ///
    /// # Errors
    ///
    /// Returns an error for lookup failures, immutable-field conflicts, or API failures.
    pub async fn reconcile_desired(
        &self,
        descriptor: &ResourceDescriptor,
        desired: &DesiredConfig,
        identity: &Identity,
        state: State,
    ) -> Result<ReconciliationResult, ReconcileError> {
        info!(
            kind = descriptor.kind,
            state = state.as_str(),
            id = ?identity.id,
            check_mode = self.check_mode,
            "Reconciling resource"
        );

        let existing =
            find_existing(self.api, descriptor, identity, state, self.inherit).await?;

        match (state, existing) {
            (State::Present, None) => self.create(descriptor, desired).await,
            (State::Present, Some(existing)) => self.update(descriptor, desired, existing).await,
            (State::Absent, Some(existing)) => self.delete(descriptor, existing).await,
            (State::Absent, None) => {
                debug!(kind = descriptor.kind, "Resource absent, nothing to do");
                Ok(self.unchanged(Map::new(), None))
            }
        }
    }

    async fn create(
        &self,
        descriptor: &ResourceDescriptor,
        desired: &DesiredConfig,
    ) -> Result<ReconciliationResult, ReconcileError> {
        let msg = format!("{} created", descriptor.kind);
        if self.check_mode {
            info!(kind = descriptor.kind, "Check mode: would create resource");
            return Ok(dry_run(msg));
        }

        let created = prune_nulls(self.api.create(desired.fields(), self.inherit).await?);
        info!(kind = descriptor.kind, id = ?object_id(&created), "Created resource");

        Ok(ReconciliationResult {
            changed: true,
            id: object_id(&created),
            diff: Some(Diff {
                before: Map::new(),
                after: created.clone(),
            }),
            object: Some(created),
            msg: Some(msg),
        })
    }

    async fn update(
        &self,
        descriptor: &ResourceDescriptor,
        desired: &DesiredConfig,
        existing: RemoteObject,
    ) -> Result<ReconciliationResult, ReconcileError> {
        let id = object_id(&existing);

        if !is_changed(&existing, desired.fields()) {
            debug!(kind = descriptor.kind, id = ?id, "Resource up to date");
            return Ok(self.unchanged(existing, id));
        }

        let body = strip_read_only(descriptor, &existing, desired, self.immutable_fields)?;
        if !is_changed(&existing, &body) {
            // Only dropped read-only fields differed
            return Ok(self.unchanged(existing, id));
        }

        let msg = format!("{} updated", descriptor.kind);
        if self.check_mode {
            info!(kind = descriptor.kind, id = ?id, "Check mode: would update resource");
            return Ok(dry_run(msg));
        }

        let Some(resource_id) = id.as_deref() else {
            return Err(ReconcileError::InvalidParameter {
                kind: descriptor.kind,
                field: "id",
                reason: "existing resource has no id".to_string(),
            });
        };
        let updated = prune_nulls(self.api.update(resource_id, &body, self.inherit).await?);
        info!(kind = descriptor.kind, id = %resource_id, "Updated resource");

        Ok(ReconciliationResult {
            changed: true,
            object: Some(updated.clone()),
            id,
            diff: Some(Diff {
                before: existing,
                after: updated,
            }),
            msg: Some(msg),
        })
    }

    async fn delete(
        &self,
        descriptor: &ResourceDescriptor,
        existing: RemoteObject,
    ) -> Result<ReconciliationResult, ReconcileError> {
        let id = object_id(&existing);
        let msg = format!("{} deleted", descriptor.kind);
        if self.check_mode {
            info!(kind = descriptor.kind, id = ?id, "Check mode: would delete resource");
            return Ok(dry_run(msg));
        }

        let Some(resource_id) = id.as_deref() else {
            return Err(ReconcileError::InvalidParameter {
                kind: descriptor.kind,
                field: "id",
                reason: "existing resource has no id".to_string(),
            });
        };
        self.api.delete(resource_id).await?;
        info!(kind = descriptor.kind, id = %resource_id, "Deleted resource");

        Ok(ReconciliationResult {
            changed: true,
            object: Some(Map::new()),
            id,
            diff: Some(Diff {
                before: existing,
                after: Map::new(),
            }),
            msg: Some(msg),
        })
    }

    fn unchanged(&self, existing: RemoteObject, id: Option<String>) -> ReconciliationResult {
        if self.check_mode {
            return ReconciliationResult::default();
        }
        ReconciliationResult {
            changed: false,
            object: Some(existing.clone()),
            id,
            diff: Some(Diff {
                before: existing.clone(),
                after: existing,
            }),
            msg: None,
        }
    }
}

fn dry_run(msg: String) -> ReconciliationResult {
    ReconciliationResult {
        changed: true,
        msg: Some(msg),
        ..Default::default()
    }
}

/// Natural-key fields the desired configuration leaves unset or null.
fn unset_key_fields(descriptor: &ResourceDescriptor, desired: &DesiredConfig) -> Vec<&'static str> {
    let unset: Vec<&'static str> = descriptor
        .natural_key
        .iter()
        .copied()
        .filter(|field| desired.get(field).map_or(true, Value::is_null))
        .collect();
    if unset.is_empty() {
        descriptor.natural_key.to_vec()
    } else {
        unset
    }
}

fn object_id(object: &RemoteObject) -> Option<String> {
    object.get("id").and_then(Value::as_str).map(str::to_string)
}

/// Build the update body: the desired fields minus the read-only ones.
///
/// A read-only field whose desired value matches the stored one is removed
/// silently. One that differs is an error under
/// [`ImmutableFieldPolicy::Fail`] and dropped with a warning under
/// [`ImmutableFieldPolicy::Drop`].
fn strip_read_only(
    descriptor: &ResourceDescriptor,
    existing: &RemoteObject,
    desired: &DesiredConfig,
    policy: ImmutableFieldPolicy,
) -> Result<Map<String, Value>, ReconcileError> {
    let mut body = desired.fields().clone();

    for field in descriptor.read_only_on_update {
        let Some(want) = body.remove(*field) else {
            continue;
        };
        let mut probe = Map::new();
        probe.insert((*field).to_string(), want.clone());
        if !is_changed(existing, &probe) {
            continue;
        }

        let have = existing.get(*field).cloned().unwrap_or(Value::Null);
        match policy {
            ImmutableFieldPolicy::Fail => {
                return Err(ReconcileError::ImmutableFieldConflict {
                    kind: descriptor.kind,
                    field: (*field).to_string(),
                    existing: have,
                    desired: want,
                });
            }
            ImmutableFieldPolicy::Drop => {
                warn!(
                    kind = descriptor.kind,
                    field = %field,
                    existing = %have,
                    desired = %want,
                    "Ignoring change to read-only field"
                );
            }
        }
    }

    Ok(body)
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod reconcile_tests;
