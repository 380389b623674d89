//! Persistence backends.
//!
//! A `StoreBackend` loads, saves and deletes whole documents by scope name.
//! Loading a scope that was never saved yields an empty document, and
//! deleting one is a no-op.
//!
//! - `JsonFileBackend`: one pretty-printed JSON file per scope
//! - `MemoryBackend`: in-process map, for tests and embedding

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde_json::Value;
use tracing::debug;

use super::document::Document;
use crate::core::StoreError;

/// File extension of persisted documents.
pub const DOCUMENT_SUFFIX: &str = "json";

/// Durable storage for documents.
pub trait StoreBackend {
    /// Load a scope. Missing scopes load as empty documents.
    fn load(&self, scope: &str) -> Result<Document, StoreError>;

    /// Write a document, replacing the previous content of its scope.
    fn save(&self, document: &Document) -> Result<(), StoreError>;

    /// Remove a scope. Removing a missing scope succeeds.
    fn delete(&self, scope: &str) -> Result<(), StoreError>;

    /// Check if a scope has been saved.
    fn exists(&self, scope: &str) -> bool;
}

/// One JSON file per scope under a root directory.
#[derive(Clone, Debug)]
pub struct JsonFileBackend {
    root: PathBuf,
}

impl JsonFileBackend {
    /// Store documents under `root` (created on first save).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// File holding a scope.
    #[must_use]
    pub fn path(&self, scope: &str) -> PathBuf {
        self.root.join(format!("{scope}.{DOCUMENT_SUFFIX}"))
    }
}

impl StoreBackend for JsonFileBackend {
    fn load(&self, scope: &str) -> Result<Document, StoreError> {
        let path = self.path(scope);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Document::new(scope)),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        let values: BTreeMap<String, Value> =
            serde_json::from_str(&content).map_err(|source| StoreError::Deserialization {
                scope: scope.to_string(),
                key: String::new(),
                source,
            })?;
        Ok(Document::from_values(scope, values))
    }

    fn save(&self, document: &Document) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(|source| StoreError::Io {
            path: self.root.clone(),
            source,
        })?;
        let path = self.path(document.scope());
        let content =
            serde_json::to_string_pretty(document.values()).map_err(|source| StoreError::Serialization {
                scope: document.scope().to_string(),
                source,
            })?;
        fs::write(&path, content).map_err(|source| StoreError::Io { path: path.clone(), source })?;
        debug!(path = %path.display(), "document saved");
        Ok(())
    }

    fn delete(&self, scope: &str) -> Result<(), StoreError> {
        let path = self.path(scope);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn exists(&self, scope: &str) -> bool {
        self.path(scope).is_file()
    }
}

/// Documents kept in memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    documents: RefCell<BTreeMap<String, BTreeMap<String, Value>>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreBackend for MemoryBackend {
    fn load(&self, scope: &str) -> Result<Document, StoreError> {
        let values = self.documents.borrow().get(scope).cloned().unwrap_or_default();
        Ok(Document::from_values(scope, values))
    }

    fn save(&self, document: &Document) -> Result<(), StoreError> {
        self.documents
            .borrow_mut()
            .insert(document.scope().to_string(), document.values().clone());
        Ok(())
    }

    fn delete(&self, scope: &str) -> Result<(), StoreError> {
        self.documents.borrow_mut().remove(scope);
        Ok(())
    }

    fn exists(&self, scope: &str) -> bool {
        self.documents.borrow().contains_key(scope)
    }
}
