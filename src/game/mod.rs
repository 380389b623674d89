//! The game: box, deck, piles and their persistence.
//!
//! A `Game` is the single owner of one game's state. The consumer (a table
//! controller or GUI) calls its operations one at a time; each operation
//! either fails with a `GameError` before touching anything, or applies its
//! change and writes the whole game document before returning.
//!
//! ## Card lifecycle
//!
//! ```text
//! import ──> box ──discover──> deck (discard) ──> draw / in_play / discard / permanent
//!             ^                   │
//!             └──────forget───────┘          destroy: from anywhere, files deleted
//! ```
//!
//! ## Files
//!
//! - `mod.rs`: lifecycle (open/new/load/delete) and queries
//! - `import.rs`: card and sticker import
//! - `transitions.rs`: pile transitions, orientation, visibility

mod data;
mod import;
mod transitions;

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::cards::{Card, CardRecord, Pile};
use crate::core::{GameError, Result, ShuffleRng};
use crate::storage::{Document, Storage};

use data::GameData;

/// One live game.
///
/// ## Usage
///
/// ```no_run
/// use card_table::core::TableConfig;
/// use card_table::storage::Storage;
/// use card_table::Game;
///
/// let storage = Storage::new(TableConfig::from_env());
/// let mut game = Game::scratch(storage)?;
/// game.new_game("campaign")?;
/// game.import_card("cards/dragon.png", "cards/back.png", None)?;
/// game.discover_card("dragon")?;
/// game.put_card_in_draw_pile("dragon", true)?;
/// assert_eq!(game.play_first_card()?, "dragon");
/// # Ok::<(), card_table::Error>(())
/// ```
#[derive(Debug)]
pub struct Game {
    name: String,
    storage: Storage,
    data: GameData,
    rng: ShuffleRng,
}

impl Game {
    /// Open a game by name.
    ///
    /// A registered game is loaded. An unknown name is registered and starts
    /// from whatever its document holds (nothing, for a fresh name).
    pub fn open(name: &str, storage: Storage) -> Result<Self> {
        if !storage.config().is_valid_game_name(name) {
            return Err(GameError::InvalidName(name.to_string()).into());
        }
        if storage.saved_games().register(name)? {
            info!(game = name, "registered game");
        }
        if !storage.backend().exists(name) {
            debug!(game = name, "no saved document, starting empty");
        }
        let data = Self::read_data(&storage, name)?;
        let rng = ShuffleRng::from_seed(storage.config().seed);
        Ok(Self {
            name: name.to_string(),
            storage,
            data,
            rng,
        })
    }

    /// Open the scratch game.
    pub fn scratch(storage: Storage) -> Result<Self> {
        let name = storage.config().scratch_game.clone();
        Self::open(&name, storage)
    }

    /// Names of all saved games.
    pub fn get_saved_games(storage: &Storage) -> Result<Vec<String>> {
        Ok(storage.saved_games().names()?)
    }

    /// Start a new, empty game and make it active.
    ///
    /// The scratch game is not a valid target: it is always present.
    pub fn new_game(&mut self, name: &str) -> Result<()> {
        let config = self.storage.config();
        if !config.is_valid_game_name(name) || config.is_scratch(name) {
            return Err(GameError::InvalidName(name.to_string()).into());
        }
        if self.storage.saved_games().contains(name)? {
            return Err(GameError::DuplicateGame(name.to_string()).into());
        }
        self.storage.saved_games().register(name)?;
        self.name = name.to_string();
        self.data = GameData::default();
        self.save()?;
        info!(game = name, "new game");
        Ok(())
    }

    /// Make a saved game active.
    pub fn load_game(&mut self, name: &str) -> Result<()> {
        let config = self.storage.config();
        if !config.is_scratch(name) && !self.storage.saved_games().contains(name)? {
            return Err(GameError::UnknownGame(name.to_string()).into());
        }
        let data = Self::read_data(&self.storage, name)?;
        self.name = name.to_string();
        self.data = data;
        info!(game = name, "loaded game");
        Ok(())
    }

    /// Delete the active game (images, document, registry entry) and switch
    /// to the scratch game.
    pub fn delete_game(&mut self) -> Result<()> {
        let game_dir = self.storage.config().game_dir(&self.name);
        if !self.storage.assets().remove_dir_all(&game_dir)? {
            info!(game = %self.name, "no asset folder to delete");
        }
        self.data = GameData::default();
        self.storage.backend().delete(&self.name)?;
        self.storage.saved_games().deregister(&self.name)?;
        info!(game = %self.name, "deleted game");

        let scratch = self.storage.config().scratch_game.clone();
        self.data = Self::read_data(&self.storage, &scratch)?;
        self.name = scratch;
        Ok(())
    }

    /// Name of the active game.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Collaborators of this game.
    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Box card names, sorted.
    #[must_use]
    pub fn box_card_names(&self) -> Vec<String> {
        self.data.box_cards.keys().cloned().collect()
    }

    /// Deck card names, sorted.
    #[must_use]
    pub fn deck_card_names(&self) -> Vec<String> {
        self.data.deck.keys().cloned().collect()
    }

    /// Permanent cards by name.
    #[must_use]
    pub fn permanent_cards(&self) -> BTreeMap<String, Card> {
        self.cards_in(Pile::Permanent)
    }

    /// In-play cards by name.
    #[must_use]
    pub fn in_play_cards(&self) -> BTreeMap<String, Card> {
        self.cards_in(Pile::InPlay)
    }

    /// Discarded cards by name.
    #[must_use]
    pub fn discarded_cards(&self) -> BTreeMap<String, Card> {
        self.cards_in(Pile::Discard)
    }

    /// Draw pile tokens, bottom first, top last.
    #[must_use]
    pub fn draw_pile_cards(&self) -> &[String] {
        self.data.draw_pile.tokens()
    }

    /// The real card on top of the draw pile.
    #[must_use]
    pub fn get_draw_pile_top_card(&self) -> Option<Card> {
        let name = self.data.draw_pile.top_card_name()?;
        self.data.deck.get(name).map(CardRecord::to_card)
    }

    /// Resolve a draw pile token.
    pub fn get_real_card_name(&self, token: &str) -> Result<&str> {
        self.data
            .draw_pile
            .real_name(token)
            .ok_or_else(|| GameError::UnknownToken(token.to_string()).into())
    }

    /// Token of a card in the draw pile.
    #[must_use]
    pub fn get_draw_token(&self, card_name: &str) -> Option<&str> {
        self.data.draw_pile.token(card_name)
    }

    /// Display projection of a box or deck card.
    pub fn get_card(&self, card_name: &str) -> Result<Card> {
        Ok(self.record(card_name)?.to_card())
    }

    /// Pile of a deck card.
    pub fn get_card_pile(&self, card_name: &str) -> Result<Pile> {
        self.data
            .deck
            .get(card_name)
            .and_then(|r| r.pile)
            .ok_or_else(|| GameError::NotInDeck(card_name.to_string()).into())
    }

    /// Check if a card is in the box.
    #[must_use]
    pub fn is_in_box(&self, card_name: &str) -> bool {
        self.data.box_cards.contains_key(card_name)
    }

    /// Check if a card is in the deck.
    #[must_use]
    pub fn is_in_deck(&self, card_name: &str) -> bool {
        self.data.deck.contains_key(card_name)
    }

    /// Check if a card keeps its real name in the draw pile.
    pub fn is_always_visible(&self, card_name: &str) -> Result<bool> {
        Ok(self.record(card_name)?.always_visible)
    }

    /// Stickers by name.
    #[must_use]
    pub fn stickers(&self) -> &BTreeMap<String, PathBuf> {
        &self.data.stickers
    }

    fn cards_in(&self, pile: Pile) -> BTreeMap<String, Card> {
        self.data
            .deck
            .iter()
            .filter(|(_, r)| r.is_in(pile))
            .map(|(name, r)| (name.clone(), r.to_card()))
            .collect()
    }

    fn record(&self, card_name: &str) -> Result<&CardRecord, GameError> {
        self.data
            .box_cards
            .get(card_name)
            .or_else(|| self.data.deck.get(card_name))
            .ok_or_else(|| GameError::UnknownCard(card_name.to_string()))
    }

    fn record_mut(&mut self, card_name: &str) -> Result<&mut CardRecord, GameError> {
        if let Some(record) = self.data.box_cards.get_mut(card_name) {
            return Ok(record);
        }
        self.data
            .deck
            .get_mut(card_name)
            .ok_or_else(|| GameError::UnknownCard(card_name.to_string()))
    }

    fn read_data(storage: &Storage, name: &str) -> Result<GameData> {
        let document = storage.backend().load(name)?;
        Ok(GameData::from_document(&document)?)
    }

    /// Write the whole game document.
    fn save(&self) -> Result<()> {
        let mut document = Document::new(self.name.as_str());
        self.data.write_to(&mut document)?;
        self.storage.backend().save(&document)?;
        Ok(())
    }
}
