//! Table configuration.
//!
//! `TableConfig` tells the game where its data lives and which names are
//! reserved:
//! - `data_dir`: root of the per-game asset folders and persisted documents
//! - `scratch_game`: the temporary game that is active when nothing else is
//! - `registry_scope`: document holding the list of saved games
//! - `seed`: optional fixed seed for draw-pile shuffles
//!
//! On disk a game named `g` owns `{data_dir}/g/box/`, `{data_dir}/g/deck/`
//! and the document `{data_dir}/g.json`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::storage::backend::DOCUMENT_SUFFIX;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "CARD_TABLE_DATA_DIR";

/// Application name used for the per-user data directory.
pub const APP_NAME: &str = "card-table";

/// Folder (inside a game folder) holding box cards and stickers.
pub const BOX_FOLDER: &str = "box";

/// Folder (inside a game folder) holding deck cards.
pub const DECK_FOLDER: &str = "deck";

/// Configuration shared by every game of a table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Root of all persisted data.
    pub data_dir: PathBuf,

    /// Name of the temporary game. Never registered as a saved game.
    pub scratch_game: String,

    /// Scope name of the saved-games registry document.
    pub registry_scope: String,

    /// Fixed shuffle seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl TableConfig {
    /// Create a configuration rooted at `data_dir` with default names.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            scratch_game: "temporary".to_string(),
            registry_scope: "saved_games".to_string(),
            seed: None,
        }
    }

    /// Configuration from the environment.
    ///
    /// Uses `CARD_TABLE_DATA_DIR` when set, otherwise the per-user data
    /// directory (`~/.local/share/card-table` on Linux). Falls back to
    /// `./card-table` when no home directory can be determined.
    pub fn from_env() -> Self {
        let data_dir = std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .or_else(|| {
                directories::ProjectDirs::from("org", APP_NAME, APP_NAME)
                    .map(|dirs| dirs.data_dir().to_path_buf())
            })
            .unwrap_or_else(|| PathBuf::from(APP_NAME));
        Self::new(data_dir)
    }

    /// Set the scratch game name.
    #[must_use]
    pub fn with_scratch_game(mut self, name: impl Into<String>) -> Self {
        self.scratch_game = name.into();
        self
    }

    /// Set the registry scope name.
    #[must_use]
    pub fn with_registry_scope(mut self, scope: impl Into<String>) -> Self {
        self.registry_scope = scope.into();
        self
    }

    /// Use a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Folder holding everything owned by a game.
    #[must_use]
    pub fn game_dir(&self, game: &str) -> PathBuf {
        self.data_dir.join(game)
    }

    /// Folder holding the box cards (and stickers) of a game.
    #[must_use]
    pub fn box_dir(&self, game: &str) -> PathBuf {
        self.game_dir(game).join(BOX_FOLDER)
    }

    /// Folder holding the deck cards of a game.
    #[must_use]
    pub fn deck_dir(&self, game: &str) -> PathBuf {
        self.game_dir(game).join(DECK_FOLDER)
    }

    /// Check if `name` is the scratch game.
    #[must_use]
    pub fn is_scratch(&self, name: &str) -> bool {
        name == self.scratch_game
    }

    /// Check if `name` can be used as a game name.
    ///
    /// Rejects empty names, the registry scope, anything that would
    /// escape `data_dir` once joined as a path component, and names whose
    /// folder would land on another game's document (`g.json`).
    #[must_use]
    pub fn is_valid_game_name(&self, name: &str) -> bool {
        !name.is_empty()
            && name != self.registry_scope
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\'])
            && Path::new(name).components().count() == 1
            && !Path::new(name).extension().is_some_and(|ext| ext == DOCUMENT_SUFFIX)
    }
}
