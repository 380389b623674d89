//! Stored card records.
//!
//! `CardRecord` is the persisted state of one card: where its two images are,
//! how it lies on the table, and (once discovered) which pile it is in.
//! Records are owned by the game; consumers only ever see `Card` projections.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::pile::Pile;
use crate::core::Orientation;

/// Persisted state of a single card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Unique name within the game (box and deck together).
    pub card_name: String,

    /// Image of the front side.
    pub recto_path: PathBuf,

    /// Image of the back side.
    pub verso_path: PathBuf,

    /// Face and rotation.
    #[serde(default)]
    pub orientation: Orientation,

    /// Current pile. `None` while the card sits in the box.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pile: Option<Pile>,

    /// Show the real name even in the draw pile.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub always_visible: bool,
}

impl CardRecord {
    /// Create a box record (upright, no pile).
    #[must_use]
    pub fn new(card_name: impl Into<String>, recto_path: PathBuf, verso_path: PathBuf) -> Self {
        Self {
            card_name: card_name.into(),
            recto_path,
            verso_path,
            orientation: Orientation::UPRIGHT,
            pile: None,
            always_visible: false,
        }
    }

    /// Check if the record is in the given pile.
    #[must_use]
    pub fn is_in(&self, pile: Pile) -> bool {
        self.pile == Some(pile)
    }

    /// Project into a display card.
    #[must_use]
    pub fn to_card(&self) -> Card {
        Card::new(
            self.card_name.clone(),
            &self.recto_path,
            &self.verso_path,
            self.orientation,
        )
    }
}
