// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Tri-state configuration fields.
//!
//! A desired configuration must distinguish a field the caller never mentioned
//! from one the caller explicitly set to `null`. Only the latter is sent to the
//! API and compared against the remote object.
//!
//! | Document            | `Field`      | In payload   |
//! |---------------------|--------------|--------------|
//! | key absent          | `Unset`      | omitted      |
//! | `key: null`         | `Null`       | `null`       |
//! | `key: value`        | `Set(value)` | `value`      |
//!
//! Struct fields of this type need
//! `#[serde(default, skip_serializing_if = "Field::is_unset")]`. String fields
//! add `deserialize_with = "lenient_string"` so that `name: 2024` reads as the
//! string `"2024"`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A configuration value that may be unset, explicitly null, or set.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    /// Not provided by the caller
    Unset,
    /// Explicitly provided as null
    Null,
    /// Explicitly provided with a value
    Set(T),
}

impl<T> Field<T> {
    /// Whether the caller left this field out.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Whether the caller mentioned this field at all.
    #[must_use]
    pub fn is_provided(&self) -> bool {
        !self.is_unset()
    }

    /// The value, if one was set.
    #[must_use]
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unset | Self::Null => None,
        }
    }

    /// Consume the field, keeping only a set value.
    pub fn into_set(self) -> Option<T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unset | Self::Null => None,
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Set(value)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Set(value) => value.serialize(serializer),
            // Unset is skipped by the containing struct; serialize it as null if not.
            Self::Null | Self::Unset => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Only called when the key is present; absent keys fall back to Default.
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Self::Set(value),
            None => Self::Null,
        })
    }
}

/// Deserialize a string field, accepting numbers and booleans as their text.
///
/// # Errors
///
/// Fails for sequences and mappings.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Field<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(Field::Null),
        Some(Value::String(s)) => Ok(Field::Set(s)),
        Some(Value::Number(n)) => Ok(Field::Set(n.to_string())),
        Some(Value::Bool(b)) => Ok(Field::Set(b.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "invalid type: expected a string, got {other}"
        ))),
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod field_tests;
