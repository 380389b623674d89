//! Persisted per-game state.
//!
//! `GameData` is everything a game stores in its document: box and deck
//! records, the draw pile (as three attributes) and the stickers. Loading
//! repairs records that break the pile invariants, so a hand-edited or
//! half-written document cannot put the game in an impossible state.

use std::collections::BTreeMap;
use std::path::PathBuf;

use rustc_hash::FxHashMap;
use tracing::warn;

use crate::cards::{CardRecord, Pile};
use crate::core::StoreError;
use crate::storage::Document;
use crate::zones::{DrawPile, DrawPosition};

pub const BOX_KEY: &str = "box";
pub const DECK_KEY: &str = "deck";
pub const DRAW_PILE_KEY: &str = "draw_pile";
pub const REAL_NAME_KEY: &str = "draw_cards_real_name";
pub const OBFUSCATE_NAME_KEY: &str = "draw_cards_obfuscate_name";
pub const STICKERS_KEY: &str = "stickers";

/// Box, deck, draw pile and stickers of one game.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct GameData {
    pub box_cards: BTreeMap<String, CardRecord>,
    pub deck: BTreeMap<String, CardRecord>,
    pub draw_pile: DrawPile,
    pub stickers: BTreeMap<String, PathBuf>,
}

impl GameData {
    /// Read from a document. Missing attributes are empty collections.
    pub fn from_document(document: &Document) -> Result<Self, StoreError> {
        let order: Vec<String> = document.get(DRAW_PILE_KEY)?;
        let real_names: FxHashMap<String, String> = document.get(REAL_NAME_KEY)?;
        let tokens: FxHashMap<String, String> = document.get(OBFUSCATE_NAME_KEY)?;

        let mut data = Self {
            box_cards: document.get(BOX_KEY)?,
            deck: document.get(DECK_KEY)?,
            draw_pile: DrawPile::from_parts(order, real_names, tokens),
            stickers: document.get(STICKERS_KEY)?,
        };
        data.repair(document.scope());
        Ok(data)
    }

    /// Write every attribute into a document.
    pub fn write_to(&self, document: &mut Document) -> Result<(), StoreError> {
        let real_names: BTreeMap<_, _> = self.draw_pile.real_names().iter().collect();
        let tokens: BTreeMap<_, _> = self.draw_pile.obfuscated_names().iter().collect();

        document.set(BOX_KEY, &self.box_cards)?;
        document.set(DECK_KEY, &self.deck)?;
        document.set(DRAW_PILE_KEY, self.draw_pile.tokens())?;
        document.set(REAL_NAME_KEY, &real_names)?;
        document.set(OBFUSCATE_NAME_KEY, &tokens)?;
        document.set(STICKERS_KEY, &self.stickers)?;
        Ok(())
    }

    /// Check if a card exists in box or deck.
    pub fn contains(&self, card_name: &str) -> bool {
        self.box_cards.contains_key(card_name) || self.deck.contains_key(card_name)
    }

    fn repair(&mut self, scope: &str) {
        let duplicated: Vec<String> = self
            .box_cards
            .keys()
            .filter(|name| self.deck.contains_key(*name))
            .cloned()
            .collect();
        for name in duplicated {
            warn!(game = scope, card = %name, "card in both box and deck, keeping the deck copy");
            self.box_cards.remove(&name);
        }

        for (name, record) in &mut self.box_cards {
            if record.pile.take().is_some() {
                warn!(game = scope, card = %name, "box card had a pile, cleared");
            }
        }
        for (name, record) in &mut self.deck {
            if record.pile.is_none() {
                warn!(game = scope, card = %name, "deck card had no pile, moved to discard");
                record.pile = Some(Pile::Discard);
            }
        }

        let stale: Vec<String> = self
            .draw_pile
            .obfuscated_names()
            .keys()
            .filter(|name| !self.deck.get(*name).is_some_and(|r| r.is_in(Pile::Draw)))
            .cloned()
            .collect();
        for name in stale {
            warn!(game = scope, card = %name, "draw pile entry without a draw card, dropped");
            self.draw_pile.remove(&name);
        }
        for (name, record) in &self.deck {
            if record.is_in(Pile::Draw) && !self.draw_pile.contains(name) {
                warn!(game = scope, card = %name, "draw card missing from the draw pile, put on top");
                self.draw_pile.push(name, record.always_visible, DrawPosition::Top);
            }
        }
    }
}
