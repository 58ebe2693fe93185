//! Persisted settings record
//!
//! A mapping from string keys to JSON values. Only the `address` field is
//! exercised today, but unknown keys already present in the file must
//! round-trip unchanged through a write that only updates the address.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::value_objects::Address;

/// Key holding the monitored address
const ADDRESS_KEY: &str = "address";

/// The settings record: a whole-document mapping, not a single field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsRecord {
    fields: Map<String, Value>,
}

impl SettingsRecord {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from an arbitrary parsed JSON value.
    ///
    /// Anything other than a top-level mapping (bare array, scalar, null)
    /// is treated as an empty record.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    /// The stored address, or the empty string if the key is absent
    /// or holds a non-string value
    #[must_use]
    pub fn address(&self) -> &str {
        self.fields
            .get(ADDRESS_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// True once an address has been saved
    #[must_use]
    pub fn has_address(&self) -> bool {
        !self.address().is_empty()
    }

    /// Replace the address, leaving every other field untouched
    pub fn set_address(&mut self, address: &Address) {
        self.fields.insert(
            ADDRESS_KEY.to_string(),
            Value::String(address.as_str().to_string()),
        );
    }

    /// Ensure the address key is present, initializing it to the empty
    /// string if absent
    pub fn ensure_address_key(&mut self) {
        self.fields
            .entry(ADDRESS_KEY)
            .or_insert_with(|| Value::String(String::new()));
    }

    /// Look up an arbitrary field
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Set an arbitrary field
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    /// Number of fields in the record
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the record holds no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
