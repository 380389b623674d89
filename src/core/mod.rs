//! Core types: errors, configuration, orientation, RNG.
//!
//! These are shared by the card, zone, storage and game modules and carry
//! no game state of their own.

pub mod config;
pub mod error;
pub mod orientation;
pub mod rng;

pub use config::TableConfig;
pub use error::{Error, GameError, Result, StoreError};
pub use orientation::{Face, Orientation};
pub use rng::ShuffleRng;
