//! Persistence and asset collaborators.
//!
//! ## Key Types
//!
//! - `Document`: attributes of one persistence scope
//! - `StoreBackend`: loads/saves documents (`JsonFileBackend`, `MemoryBackend`)
//! - `SavedGames`: repository of saved game names
//! - `AssetStore`: image checks and file moves (`FsAssets`)
//! - `Storage`: everything above plus the `TableConfig`, handed to each `Game`

pub mod assets;
pub mod backend;
pub mod document;
pub mod registry;

use std::rc::Rc;

pub use assets::{AssetStore, FsAssets};
pub use backend::{JsonFileBackend, MemoryBackend, StoreBackend};
pub use document::Document;
pub use registry::SavedGames;

use crate::core::TableConfig;

/// Collaborators shared by the games of one table.
///
/// Cloning is cheap; clones share the backend, the assets and the registry.
///
/// ```
/// use card_table::core::TableConfig;
/// use card_table::storage::Storage;
///
/// let storage = Storage::in_memory(TableConfig::new("/tmp/card-table-doc"));
/// assert!(storage.saved_games().names().unwrap().is_empty());
/// ```
#[derive(Clone)]
pub struct Storage {
    config: Rc<TableConfig>,
    backend: Rc<dyn StoreBackend>,
    assets: Rc<dyn AssetStore>,
    saved_games: SavedGames,
}

impl Storage {
    /// JSON documents and images on disk, both under `config.data_dir`.
    pub fn new(config: TableConfig) -> Self {
        let backend = Rc::new(JsonFileBackend::new(config.data_dir.clone()));
        Self::with_parts(config, backend, Rc::new(FsAssets::new()))
    }

    /// Documents in memory, images on disk.
    pub fn in_memory(config: TableConfig) -> Self {
        Self::with_parts(config, Rc::new(MemoryBackend::new()), Rc::new(FsAssets::new()))
    }

    /// Assemble from explicit collaborators.
    pub fn with_parts(config: TableConfig, backend: Rc<dyn StoreBackend>, assets: Rc<dyn AssetStore>) -> Self {
        let saved_games = SavedGames::new(
            backend.clone(),
            config.registry_scope.clone(),
            config.scratch_game.clone(),
        );
        Self {
            config: Rc::new(config),
            backend,
            assets,
            saved_games,
        }
    }

    /// Table configuration.
    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Document backend.
    #[must_use]
    pub fn backend(&self) -> &dyn StoreBackend {
        self.backend.as_ref()
    }

    /// Image file operations.
    #[must_use]
    pub fn assets(&self) -> &dyn AssetStore {
        self.assets.as_ref()
    }

    /// Saved-games registry.
    #[must_use]
    pub fn saved_games(&self) -> &SavedGames {
        &self.saved_games
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("config", &self.config)
            .field("saved_games", &self.saved_games)
            .finish_non_exhaustive()
    }
}
