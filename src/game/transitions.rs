//! Pile transitions, orientation and visibility.
//!
//! | Operation               | From                      | To        |
//! |-------------------------|---------------------------|-----------|
//! | `discover_card`         | box                       | discard   |
//! | `forget_card`           | any deck pile             | box       |
//! | `destroy_card`          | box or any deck pile      | (deleted) |
//! | `play_card`             | draw, discard             | in_play   |
//! | `discard`               | draw, in_play             | discard   |
//! | `lock_card`             | draw, in_play, discard    | permanent |
//! | `unlock_card`           | permanent                 | discard   |
//! | `put_card_in_draw_pile` | in_play, discard          | draw      |
//!
//! Leaving the draw pile always releases the card's token.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::import::remove_if_present;
use super::Game;
use crate::cards::Pile;
use crate::core::{Error, GameError, Result};
use crate::zones::DrawPosition;

impl Game {
    /// Move a card from the box to the deck (discard pile).
    pub fn discover_card(&mut self, card_name: &str) -> Result<()> {
        let Some(record) = self.data.box_cards.get(card_name) else {
            return Err(GameError::NotInBox(card_name.to_string()).into());
        };
        let folder = self.storage.config().deck_dir(&self.name);
        let (recto, verso) = (record.recto_path.clone(), record.verso_path.clone());
        let dst_recto = relocated(&folder, &recto);
        let dst_verso = relocated(&folder, &verso);
        let assets = self.storage.assets();
        for dst in [&dst_recto, &dst_verso] {
            if assets.exists(dst) {
                return Err(GameError::AssetCollision(dst.clone()).into());
            }
        }

        assets.create_dir_all(&folder)?;
        assets.move_file(&recto, &dst_recto)?;
        assets.move_file(&verso, &dst_verso)?;

        if let Some(mut record) = self.data.box_cards.remove(card_name) {
            record.recto_path = dst_recto;
            record.verso_path = dst_verso;
            record.pile = Some(Pile::Discard);
            self.data.deck.insert(card_name.to_string(), record);
        }
        self.save()?;
        debug!(card = card_name, "discovered");
        Ok(())
    }

    /// Move a card from the deck back to the box, upright.
    pub fn forget_card(&mut self, card_name: &str) -> Result<()> {
        let Some(record) = self.data.deck.get(card_name) else {
            return Err(GameError::NotInDeck(card_name.to_string()).into());
        };
        let folder = self.storage.config().box_dir(&self.name);
        let (recto, verso) = (record.recto_path.clone(), record.verso_path.clone());
        let dst_recto = relocated(&folder, &recto);
        let dst_verso = relocated(&folder, &verso);
        let assets = self.storage.assets();
        for dst in [&dst_recto, &dst_verso] {
            if assets.exists(dst) {
                return Err(GameError::AssetCollision(dst.clone()).into());
            }
        }

        assets.create_dir_all(&folder)?;
        assets.move_file(&recto, &dst_recto)?;
        assets.move_file(&verso, &dst_verso)?;

        self.data.draw_pile.remove(card_name);
        if let Some(mut record) = self.data.deck.remove(card_name) {
            record.recto_path = dst_recto;
            record.verso_path = dst_verso;
            record.pile = None;
            record.orientation = Default::default();
            self.data.box_cards.insert(card_name.to_string(), record);
        }
        self.save()?;
        debug!(card = card_name, "forgotten");
        Ok(())
    }

    /// Delete a card and its images, wherever it is.
    pub fn destroy_card(&mut self, card_name: &str) -> Result<()> {
        let record = self.record(card_name)?;
        let (recto, verso) = (record.recto_path.clone(), record.verso_path.clone());

        remove_if_present(self, recto)?;
        remove_if_present(self, verso)?;

        self.data.draw_pile.remove(card_name);
        if self.data.box_cards.remove(card_name).is_none() {
            self.data.deck.remove(card_name);
        }
        self.save()?;
        debug!(card = card_name, "destroyed");
        Ok(())
    }

    /// Put a card on the table.
    pub fn play_card(&mut self, card_name: &str) -> Result<()> {
        match self.get_card_pile(card_name)? {
            Pile::InPlay => Err(already_in(card_name, Pile::InPlay)),
            Pile::Permanent => Err(GameError::PermanentCard(card_name.to_string()).into()),
            Pile::Draw | Pile::Discard => self.move_to_pile(card_name, Pile::InPlay),
        }
    }

    /// Put a card on the discard pile.
    pub fn discard(&mut self, card_name: &str) -> Result<()> {
        match self.get_card_pile(card_name)? {
            Pile::Discard => Err(already_in(card_name, Pile::Discard)),
            Pile::Permanent => Err(GameError::PermanentCard(card_name.to_string()).into()),
            Pile::Draw | Pile::InPlay => self.move_to_pile(card_name, Pile::Discard),
        }
    }

    /// Make a card permanent.
    pub fn lock_card(&mut self, card_name: &str) -> Result<()> {
        match self.get_card_pile(card_name)? {
            Pile::Permanent => Err(already_in(card_name, Pile::Permanent)),
            Pile::Draw | Pile::InPlay | Pile::Discard => self.move_to_pile(card_name, Pile::Permanent),
        }
    }

    /// Release a permanent card to the discard pile.
    pub fn unlock_card(&mut self, card_name: &str) -> Result<()> {
        match self.get_card_pile(card_name)? {
            Pile::Permanent => self.move_to_pile(card_name, Pile::Discard),
            _ => Err(GameError::NotPermanent(card_name.to_string()).into()),
        }
    }

    /// Put a card on the top (`top = true`) or bottom of the draw pile.
    pub fn put_card_in_draw_pile(&mut self, card_name: &str, top: bool) -> Result<()> {
        match self.get_card_pile(card_name)? {
            Pile::Draw => return Err(already_in(card_name, Pile::Draw)),
            Pile::Permanent => return Err(GameError::PermanentCard(card_name.to_string()).into()),
            Pile::InPlay | Pile::Discard => {}
        }
        let Some(record) = self.data.deck.get_mut(card_name) else {
            return Err(GameError::NotInDeck(card_name.to_string()).into());
        };
        record.pile = Some(Pile::Draw);
        let always_visible = record.always_visible;
        let token = self
            .data
            .draw_pile
            .push(card_name, always_visible, DrawPosition::from_top(top));
        debug!(card = card_name, token, top, "put in draw pile");
        self.save()
    }

    /// Play the top card of the draw pile. Returns its real name.
    pub fn play_first_card(&mut self) -> Result<String> {
        let Some(card_name) = self.data.draw_pile.top_card_name().map(str::to_string) else {
            return Err(GameError::EmptyDrawPile.into());
        };
        self.play_card(&card_name)?;
        Ok(card_name)
    }

    /// Shuffle the draw pile.
    pub fn shuffle_draw_pile(&mut self) -> Result<()> {
        self.data.draw_pile.shuffle(&mut self.rng);
        debug!(cards = self.data.draw_pile.len(), "shuffled draw pile");
        self.save()
    }

    /// Discard every card in play.
    pub fn discard_all_cards_in_play(&mut self) -> Result<()> {
        for card_name in self.in_play_cards().into_keys() {
            self.discard(&card_name)?;
        }
        Ok(())
    }

    /// Put every discarded card back in the draw pile, then shuffle it.
    pub fn shuffle_back_all_discarded(&mut self) -> Result<()> {
        for card_name in self.discarded_cards().into_keys() {
            self.put_card_in_draw_pile(&card_name, true)?;
        }
        self.shuffle_draw_pile()
    }

    /// Turn a card by 180 degrees (same face).
    pub fn rotate_card(&mut self, card_name: &str) -> Result<()> {
        let record = self.record_mut(card_name)?;
        record.orientation = record.orientation.rotated();
        self.save()
    }

    /// Turn a card over (same rotation).
    pub fn flip_card(&mut self, card_name: &str) -> Result<()> {
        let record = self.record_mut(card_name)?;
        record.orientation = record.orientation.flipped();
        self.save()
    }

    /// Show a card's real name in the draw pile.
    pub fn set_always_visible(&mut self, card_name: &str) -> Result<()> {
        self.set_visibility(card_name, true)
    }

    /// Hide a card's name in the draw pile again.
    pub fn remove_always_visible(&mut self, card_name: &str) -> Result<()> {
        self.set_visibility(card_name, false)
    }

    fn set_visibility(&mut self, card_name: &str, visible: bool) -> Result<()> {
        let record = self.record_mut(card_name)?;
        match (record.always_visible, visible) {
            (true, true) => return Err(GameError::AlreadyVisible(card_name.to_string()).into()),
            (false, false) => return Err(GameError::NotVisible(card_name.to_string()).into()),
            _ => record.always_visible = visible,
        }
        if let Some(token) = self.data.draw_pile.retoken(card_name, visible) {
            debug!(card = card_name, token, "draw token reissued");
        }
        self.save()
    }

    /// Set the pile of a deck card whose transition was already validated.
    fn move_to_pile(&mut self, card_name: &str, pile: Pile) -> Result<()> {
        self.data.draw_pile.remove(card_name);
        if let Some(record) = self.data.deck.get_mut(card_name) {
            debug!(card = card_name, from = ?record.pile, to = %pile, "pile transition");
            record.pile = Some(pile);
        }
        self.save()
    }
}

fn already_in(card_name: &str, pile: Pile) -> Error {
    GameError::AlreadyInPile {
        name: card_name.to_string(),
        pile,
    }
    .into()
}

/// Same file name, new folder.
fn relocated(folder: &Path, path: &Path) -> PathBuf {
    match path.file_name() {
        Some(file_name) => folder.join(file_name),
        None => folder.join(path),
    }
}
