use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::value::Value;

/// Attribute record a compiled rule is evaluated against: a flat mapping from
/// attribute name to scalar [`Value`], supplied fresh per evaluation call.
///
/// `serde(transparent)`, so a transport layer can decode a JSON object like
/// `{"age": 35, "department": "Sales"}` straight into a `Record`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    data: HashMap<String, Value>,
}

impl Record {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, consuming and returning the record for chaining.
    #[must_use]
    pub fn set(mut self, attribute: &str, value: impl Into<Value>) -> Self {
        self.insert(attribute, value.into());
        self
    }

    /// Insert an attribute (mutable reference version).
    pub fn insert(&mut self, attribute: &str, value: Value) {
        self.data.insert(attribute.to_owned(), value);
    }

    /// Look up an attribute by name.
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.data.get(attribute)
    }
}
