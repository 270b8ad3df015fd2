// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};

use crate::value::Value;

/// The result of a parse: option ids, argument names and the command name
/// mapped to their values, in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Matches {
    entries: IndexMap<String, Value>,
    command: Option<String>,
}

impl Matches {
    /// Create an empty result.
    pub fn new() -> Self {
        Matches::default()
    }

    /// Set the value for `key`, keeping its original position if it
    /// already exists.
    pub fn set<V: Into<Value>>(&mut self, key: &str, value: V) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the value for `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns a mutable reference to the value for `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Determine if `key` has a value.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns `true` if `key` is a flag that is set or an argument that was
    /// found.
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.get(key), Some(Value::Bool(true)))
    }

    /// Returns the string value for `key`.
    pub fn string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Returns the numeric value for `key`.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// Returns the array value for `key`.
    pub fn array(&self, key: &str) -> Option<&[Value]> {
        self.get(key).and_then(Value::as_array)
    }

    /// Name of the command the arguments were routed to, if any.
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    pub(crate) fn set_command(&mut self, name: &str) {
        self.command = Some(name.into());
    }

    /// Iterate over all keys and values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serialised as a map of the entries only, in insertion order.
impl Serialize for Matches {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}
