// SPDX-License-Identifier: MIT

//! Variable bindings for a single example block

use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// Variables visible while one block runs
///
/// A fresh scope is built for every block, so nothing leaks from one
/// example into the next.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    fields: HashMap<String, Value>,
}

impl Scope {
    /// Create an empty Scope
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a Scope holding a block's literal bindings
    pub fn from_bindings(bindings: &BTreeMap<String, Value>) -> Self {
        Self {
            fields: bindings
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    /// Bind or rebind a variable
    pub fn set(&mut self, key: &str, value: Value) {
        self.fields.insert(key.to_string(), value);
    }

    /// Get a variable's value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Convert scope to JSON object
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<Map<String, Value>>(),
        )
    }
}
