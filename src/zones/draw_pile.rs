//! Draw pile with name obfuscation.
//!
//! The draw pile is an ordered stack of *tokens*: index 0 is the bottom, the
//! last index is the top. A token stands in for a card so the consumer can
//! show a face-down stack without learning which card is where. Cards flagged
//! always-visible use their real name as token.
//!
//! `DrawPile` keeps three pieces of state in lockstep:
//! - `order`: the token stack
//! - `real_names`: token -> card name
//! - `tokens`: card name -> token
//!
//! A mapping entry exists exactly for the cards currently in the stack, and
//! the two maps are inverse of each other.
//!
//! ## Token allocation
//!
//! Hidden cards get the decimal string of the first integer, counting up
//! from the number of assigned tokens, that is not already a token. With no
//! removals this hands out `0, 1, 2, ...`; after removals it may skip lower
//! free slots. Persisted piles depend on this exact sequence.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::ShuffleRng;

/// Where a card enters the draw pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawPosition {
    /// Drawn next.
    Top,
    /// Drawn last.
    Bottom,
}

impl DrawPosition {
    /// `Top` when `top` is true, `Bottom` otherwise.
    #[must_use]
    pub const fn from_top(top: bool) -> Self {
        if top {
            DrawPosition::Top
        } else {
            DrawPosition::Bottom
        }
    }
}

/// Ordered draw pile with a token <-> card name bijection.
///
/// ## Usage
///
/// ```
/// use card_table::zones::{DrawPile, DrawPosition};
///
/// let mut pile = DrawPile::new();
/// pile.push("dragon", false, DrawPosition::Top);
/// pile.push("knight", true, DrawPosition::Top);
///
/// // Hidden cards get numeric tokens, visible ones keep their name.
/// assert_eq!(pile.tokens(), &["0".to_string(), "knight".to_string()]);
/// assert_eq!(pile.real_name("0"), Some("dragon"));
///
/// pile.remove("knight");
/// assert_eq!(pile.top_card_name(), Some("dragon"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawPile {
    order: Vec<String>,
    real_names: FxHashMap<String, String>,
    tokens: FxHashMap<String, String>,
}

impl DrawPile {
    /// Create an empty draw pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted parts.
    ///
    /// Tokens in `order` without a mapping and mappings without a token in
    /// `order` are dropped, so the result always satisfies the bijection.
    #[must_use]
    pub fn from_parts(
        order: Vec<String>,
        real_names: FxHashMap<String, String>,
        tokens: FxHashMap<String, String>,
    ) -> Self {
        let mut pile = Self::new();
        for token in order {
            let Some(name) = real_names.get(&token) else {
                continue;
            };
            if tokens.get(name) != Some(&token) || pile.tokens.contains_key(name) {
                continue;
            }
            pile.real_names.insert(token.clone(), name.clone());
            pile.tokens.insert(name.clone(), token.clone());
            pile.order.push(token);
        }
        pile
    }

    /// Put a card on the top or bottom of the pile.
    ///
    /// Reuses the card's token if it already has one. Returns the token.
    pub fn push(&mut self, card_name: &str, always_visible: bool, position: DrawPosition) -> &str {
        let token = self.assign_token(card_name, always_visible);
        match position {
            DrawPosition::Top => self.order.push(token),
            DrawPosition::Bottom => self.order.insert(0, token),
        }
        let index = match position {
            DrawPosition::Top => self.order.len() - 1,
            DrawPosition::Bottom => 0,
        };
        &self.order[index]
    }

    /// Take a card out of the pile.
    ///
    /// Drops both mapping entries and the first matching token in the stack.
    /// Returns the token the card had, or `None` if it was not in the pile.
    pub fn remove(&mut self, card_name: &str) -> Option<String> {
        let token = self.tokens.remove(card_name)?;
        self.real_names.remove(&token);
        if let Some(index) = self.order.iter().position(|t| *t == token) {
            self.order.remove(index);
        }
        debug!(card = card_name, token = %token, "released draw token");
        Some(token)
    }

    /// Issue a fresh token for a card already in the pile, keeping its position.
    ///
    /// Used when the always-visible flag changes. Returns the new token, or
    /// `None` if the card is not in the pile.
    pub fn retoken(&mut self, card_name: &str, always_visible: bool) -> Option<&str> {
        let old = self.tokens.remove(card_name)?;
        self.real_names.remove(&old);
        let index = self.order.iter().position(|t| *t == old);
        let new = self.assign_token(card_name, always_visible);
        match index {
            Some(i) => {
                self.order[i] = new;
                Some(&self.order[i])
            }
            None => {
                self.order.push(new);
                self.order.last().map(String::as_str)
            }
        }
    }

    /// Shuffle the stack (mappings are unaffected).
    pub fn shuffle(&mut self, rng: &mut ShuffleRng) {
        rng.shuffle(&mut self.order);
    }

    /// Token stack, bottom first, top last.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.order
    }

    /// Token of the top card.
    #[must_use]
    pub fn top_token(&self) -> Option<&str> {
        self.order.last().map(String::as_str)
    }

    /// Real name of the top card.
    #[must_use]
    pub fn top_card_name(&self) -> Option<&str> {
        self.top_token().and_then(|t| self.real_name(t))
    }

    /// Resolve a token to the card behind it.
    #[must_use]
    pub fn real_name(&self, token: &str) -> Option<&str> {
        self.real_names.get(token).map(String::as_str)
    }

    /// Token currently standing in for a card.
    #[must_use]
    pub fn token(&self, card_name: &str) -> Option<&str> {
        self.tokens.get(card_name).map(String::as_str)
    }

    /// Check if a card is in the pile.
    #[must_use]
    pub fn contains(&self, card_name: &str) -> bool {
        self.tokens.contains_key(card_name)
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Token -> card name map.
    #[must_use]
    pub fn real_names(&self) -> &FxHashMap<String, String> {
        &self.real_names
    }

    /// Card name -> token map.
    #[must_use]
    pub fn obfuscated_names(&self) -> &FxHashMap<String, String> {
        &self.tokens
    }

    fn assign_token(&mut self, card_name: &str, always_visible: bool) -> String {
        if let Some(token) = self.tokens.get(card_name) {
            return token.clone();
        }
        let token = if always_visible && !self.real_names.contains_key(card_name) {
            card_name.to_string()
        } else {
            self.free_slot()
        };
        self.real_names.insert(token.clone(), card_name.to_string());
        self.tokens.insert(card_name.to_string(), token.clone());
        debug!(card = card_name, token = %token, "assigned draw token");
        token
    }

    fn free_slot(&self) -> String {
        let mut slot = self.real_names.len();
        loop {
            let token = slot.to_string();
            if !self.real_names.contains_key(&token) {
                return token;
            }
            slot += 1;
        }
    }
}
