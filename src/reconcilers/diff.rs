// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Change detection between a desired configuration and a remote object.
//!
//! The comparison is a containment test over the declared keys, not full
//! equality: fields the remote object carries but the caller never mentioned
//! do not count as a change.

use crate::client::RemoteObject;
use serde_json::{Map, Value};

/// Whether any declared field differs from the existing object.
///
/// # Rules
///
/// - A declared `null` differs only if the existing object has that key
///   (existing objects are null-pruned, so presence means a real value).
/// - A declared key the existing object lacks is a change.
/// - Objects recurse over the declared keys.
/// - Lists must have the same length and match element-wise, in order.
/// - Everything else compares by equality.
///
/// # Example
///
/// ```rust
/// use b1ddi::reconcilers::diff::is_changed;
/// use serde_json::json;
///
/// let existing = json!({"id": "dns/view/1", "name": "v", "comment": "a"});
/// let desired = json!({"name": "v"});
/// assert!(!is_changed(existing.as_object().unwrap(), desired.as_object().unwrap()));
/// ```
#[must_use]
pub fn is_changed(existing: &Map<String, Value>, desired: &Map<String, Value>) -> bool {
    desired.iter().any(|(key, want)| match (existing.get(key), want) {
        (None, Value::Null) => false,
        (None, _) => true,
        (Some(have), want) => value_changed(have, want),
    })
}

fn value_changed(have: &Value, want: &Value) -> bool {
    match (have, want) {
        (Value::Object(have), Value::Object(want)) => is_changed(have, want),
        (Value::Array(have), Value::Array(want)) => {
            have.len() != want.len()
                || have
                    .iter()
                    .zip(want.iter())
                    .any(|(h, w)| value_changed(h, w))
        }
        (Value::Number(have), Value::Number(want)) => !numbers_equal(have, want),
        (have, want) => have != want,
    }
}

/// `24` and `24.0` are the same value to the API.
fn numbers_equal(a: &serde_json::Number, b: &serde_json::Number) -> bool {
    if a == b {
        return true;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Remove null members recursively, as the API omits unset fields on read.
#[must_use]
pub fn prune_nulls(object: RemoteObject) -> RemoteObject {
    object
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key, prune_value(value)))
        .collect()
}

fn prune_value(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(prune_nulls(map)),
        Value::Array(items) => Value::Array(items.into_iter().map(prune_value).collect()),
        other => other,
    }
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod diff_tests;
