//! Search filter assembly.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Search constraints sent to the registry.
///
/// Built fresh per invocation. A key is only present when a constraint was
/// actually supplied; an empty flag value never becomes an empty-string
/// constraint, so the service can distinguish "no filter" from "filter on
/// empty". Values are passed through unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SearchFilter {
    entries: BTreeMap<String, Value>,
}

impl SearchFilter {
    /// Creates an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrains the search to an event id, unless `id` is empty.
    pub fn id(self, id: &str) -> Self {
        self.entry("id", id)
    }

    /// Constrains the search to an event name, unless `name` is empty.
    pub fn name(self, name: &str) -> Self {
        self.entry("name", name)
    }

    /// Constrains the search to an event version, unless `version` is empty.
    pub fn version(self, version: &str) -> Self {
        self.entry("version", version)
    }

    /// Returns true if no constraints were supplied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the constraint stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    fn entry(mut self, key: &str, value: &str) -> Self {
        if !value.is_empty() {
            self.entries
                .insert(key.to_string(), Value::String(value.to_string()));
        }
        self
    }
}
