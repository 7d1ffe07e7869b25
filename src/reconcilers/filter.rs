// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Exact-match filter expressions for list calls.
//!
//! Strings are single-quoted, everything else is written as its JSON literal:
//! `address=='10.0.0.0' and cidr==24`. The grammar has no escape for a quote
//! inside a string, so such values are refused.

use crate::errors::ReconcileError;
use serde_json::{Map, Value};

/// Whether `value` can be written as a filter literal.
#[must_use]
pub fn is_quotable(value: &Value) -> bool {
    !matches!(value, Value::String(s) if s.contains('\''))
}

/// One `field==value` clause.
///
/// # Errors
///
/// Returns [`ReconcileError::UnquotableFilterValue`] for a string containing `'`.
pub fn clause(field: &str, value: &Value) -> Result<String, ReconcileError> {
    match value {
        _ if !is_quotable(value) => Err(ReconcileError::UnquotableFilterValue {
            field: field.to_string(),
            value: value.to_string(),
        }),
        Value::String(s) => Ok(format!("{field}=='{s}'")),
        other => Ok(format!("{field}=={other}")),
    }
}

/// Conjunction of exact-match clauses, in the given order.
///
/// Returns `None` for an empty clause list so no `_filter` is sent.
///
/// # Errors
///
/// Returns [`ReconcileError::UnquotableFilterValue`] if any value cannot be quoted.
pub fn exact_match<'a, I>(clauses: I) -> Result<Option<String>, ReconcileError>
where
    I: IntoIterator<Item = (&'a str, &'a Value)>,
{
    let rendered = clauses
        .into_iter()
        .map(|(field, value)| clause(field, value))
        .collect::<Result<Vec<String>, _>>()?;
    if rendered.is_empty() {
        Ok(None)
    } else {
        Ok(Some(rendered.join(" and ")))
    }
}

/// Conjunction built from a `filters` / `tag_filters` map.
///
/// # Errors
///
/// Returns [`ReconcileError::UnquotableFilterValue`] if any value cannot be quoted.
pub fn from_map(filters: &Map<String, Value>) -> Result<Option<String>, ReconcileError> {
    exact_match(filters.iter().map(|(k, v)| (k.as_str(), v)))
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
