//! # card-table
//!
//! Core of a card-game sandbox: cards are imported as recto/verso image
//! pairs into a *box*, discovered into a *deck*, and moved between the deck
//! piles (draw, in play, discard, permanent). While a card sits in the draw
//! pile its identity is hidden behind a token unless it is flagged
//! always-visible.
//!
//! ## Design Principles
//!
//! 1. **One owner**: a `Game` owns all state of the active game and is the
//!    only thing that mutates it.
//!
//! 2. **Check, then mutate, then persist**: every rule is checked before any
//!    change; every successful mutation is written to the store before the
//!    operation returns.
//!
//! 3. **Injected collaborators**: persistence (`StoreBackend`), image files
//!    (`AssetStore`) and the saved-games registry (`SavedGames`) come in
//!    through `Storage`; nothing is global.
//!
//! ## Modules
//!
//! - `core`: errors, configuration, orientation, shuffle RNG
//! - `cards`: stored records, piles, display projections
//! - `zones`: the draw pile and its token scheme
//! - `storage`: documents, backends, registry, assets
//! - `game`: the `Game` state machine

pub mod cards;
pub mod core;
pub mod game;
pub mod storage;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{Error, Face, GameError, Orientation, Result, ShuffleRng, StoreError, TableConfig};

pub use crate::cards::{Card, CardRecord, Pile};

pub use crate::zones::{DrawPile, DrawPosition};

pub use crate::storage::{
    AssetStore, Document, FsAssets, JsonFileBackend, MemoryBackend, SavedGames, Storage, StoreBackend,
};

pub use crate::game::Game;
