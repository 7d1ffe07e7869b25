// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! In-memory [`ResourceApi`] used by reconciler unit tests.

use crate::client::{Inherit, ListParams, RemoteObject, ResourceApi};
use crate::errors::ApiError;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Mutex;

/// One recorded call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Read(String),
    List(ListParams),
    Create(RemoteObject),
    Update(String, RemoteObject),
    Delete(String),
}

#[derive(Default)]
struct State {
    objects: Vec<RemoteObject>,
    next_id: u32,
    calls: Vec<Call>,
}

/// A collection stored in memory, with server-side `id` and `created_at`.
pub(crate) struct FakeApi {
    api_path: &'static str,
    state: Mutex<State>,
}

impl FakeApi {
    pub(crate) fn new(api_path: &'static str) -> Self {
        Self {
            api_path,
            state: Mutex::new(State::default()),
        }
    }

    /// Store `object` as if it already existed, assigning an id when missing.
    pub(crate) fn seed(&self, object: Value) -> String {
        let mut state = self.state.lock().unwrap();
        let mut object = object.as_object().cloned().unwrap();
        let id = match object.get("id").and_then(Value::as_str) {
            Some(id) => id.to_string(),
            None => {
                state.next_id += 1;
                let id = format!("{}/seed-{}", self.api_path, state.next_id);
                object.insert("id".to_string(), json!(id));
                id
            }
        };
        state.objects.push(object);
        id
    }

    pub(crate) fn objects(&self) -> Vec<RemoteObject> {
        self.state.lock().unwrap().objects.clone()
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::List(_)))
            .count()
    }

    pub(crate) fn mutating_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Create(_) | Call::Update(..) | Call::Delete(_)))
            .count()
    }

    fn record(&self, call: Call) {
        self.state.lock().unwrap().calls.push(call);
    }
}

fn not_found(id: &str) -> ApiError {
    ApiError::Status {
        status: 404,
        reason: "Not Found".to_string(),
        body: format!(r#"{{"error":"{id} not found"}}"#),
    }
}

/// Evaluate `a=='x' and b==1` against an object.
fn matches_filter(object: &RemoteObject, filter: &str) -> bool {
    filter.split(" and ").all(|clause| {
        let Some((field, literal)) = clause.split_once("==") else {
            return false;
        };
        let Some(value) = object.get(field.trim()) else {
            return false;
        };
        let literal = literal.trim();
        match literal.strip_prefix('\'').and_then(|l| l.strip_suffix('\'')) {
            Some(s) => value.as_str() == Some(s),
            None => value.to_string() == literal,
        }
    })
}

#[async_trait]
impl ResourceApi for FakeApi {
    async fn read(&self, id: &str, _inherit: Inherit) -> Result<RemoteObject, ApiError> {
        self.record(Call::Read(id.to_string()));
        self.state
            .lock()
            .unwrap()
            .objects
            .iter()
            .find(|o| o.get("id").and_then(Value::as_str) == Some(id))
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn list(&self, params: &ListParams) -> Result<Vec<RemoteObject>, ApiError> {
        self.record(Call::List(params.clone()));
        let state = self.state.lock().unwrap();
        let matching = state
            .objects
            .iter()
            .filter(|o| params.filter.as_deref().map_or(true, |f| matches_filter(o, f)))
            .skip(params.offset.unwrap_or(0) as usize)
            .take(params.limit.map_or(usize::MAX, |l| l as usize))
            .cloned()
            .collect();
        Ok(matching)
    }

    async fn create(&self, body: &RemoteObject, _inherit: Inherit) -> Result<RemoteObject, ApiError> {
        self.record(Call::Create(body.clone()));
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let mut object = body.clone();
        object.retain(|_, v| !v.is_null());
        object.insert(
            "id".to_string(),
            json!(format!("{}/{}", self.api_path, state.next_id)),
        );
        object.insert("created_at".to_string(), json!("2024-01-01T00:00:00Z"));
        state.objects.push(object.clone());
        Ok(object)
    }

    async fn update(
        &self,
        id: &str,
        body: &RemoteObject,
        _inherit: Inherit,
    ) -> Result<RemoteObject, ApiError> {
        self.record(Call::Update(id.to_string(), body.clone()));
        let mut state = self.state.lock().unwrap();
        let object = state
            .objects
            .iter_mut()
            .find(|o| o.get("id").and_then(Value::as_str) == Some(id))
            .ok_or_else(|| not_found(id))?;
        for (key, value) in body {
            if value.is_null() {
                object.remove(key);
            } else {
                object.insert(key.clone(), value.clone());
            }
        }
        Ok(object.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.record(Call::Delete(id.to_string()));
        let mut state = self.state.lock().unwrap();
        let before = state.objects.len();
        state
            .objects
            .retain(|o| o.get("id").and_then(Value::as_str) != Some(id));
        if state.objects.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}
