//! Key-value documents.
//!
//! A `Document` is one persistence scope: a set of named attributes holding
//! JSON values. Attributes are read back with `get`, which treats a missing
//! attribute as the type's default (an empty collection for every attribute
//! the game stores).

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::core::StoreError;

/// Named attributes of one persistence scope.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    scope: String,
    values: BTreeMap<String, Value>,
}

impl Document {
    /// Create an empty document.
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            values: BTreeMap::new(),
        }
    }

    /// Create a document from raw values.
    pub fn from_values(scope: impl Into<String>, values: BTreeMap<String, Value>) -> Self {
        Self {
            scope: scope.into(),
            values,
        }
    }

    /// Scope name.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Raw values.
    #[must_use]
    pub fn values(&self) -> &BTreeMap<String, Value> {
        &self.values
    }

    /// Read an attribute, defaulting when it is absent.
    pub fn get<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, StoreError> {
        match self.values.get(key) {
            None | Some(Value::Null) => Ok(T::default()),
            Some(value) => {
                T::deserialize(value).map_err(|source| StoreError::Deserialization {
                    scope: self.scope.clone(),
                    key: key.to_string(),
                    source,
                })
            }
        }
    }

    /// Write an attribute.
    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let value = serde_json::to_value(value).map_err(|source| StoreError::Serialization {
            scope: self.scope.clone(),
            source,
        })?;
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    /// Check if the document has no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
