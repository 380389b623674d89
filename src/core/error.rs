//! Error types.
//!
//! ## GameError
//!
//! Every domain rule violation (unknown card, invalid pile transition,
//! non-image file, name collision, empty draw pile...) is a `GameError`.
//! These are checked before any state is touched, so an operation that
//! returns a `GameError` has changed nothing.
//!
//! ## Error
//!
//! The crate-level error wraps `GameError` together with the failures of the
//! external collaborators (file system, key-value store). Those are not
//! interpreted by the game; they propagate as-is.

use std::path::PathBuf;

use crate::cards::Pile;

/// A domain rule violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("card '{0}' already exists in this game")]
    DuplicateCard(String),

    #[error("card '{0}' not found in box or deck")]
    UnknownCard(String),

    #[error("card '{0}' is not in the box")]
    NotInBox(String),

    #[error("card '{0}' is not in the deck")]
    NotInDeck(String),

    #[error("card '{name}' is already in the {pile} pile")]
    AlreadyInPile { name: String, pile: Pile },

    #[error("card '{0}' is permanent, unlock it first")]
    PermanentCard(String),

    #[error("card '{0}' is not permanent")]
    NotPermanent(String),

    #[error("{} is not an image", .0.display())]
    NotAnImage(PathBuf),

    #[error("there is already a file at {}", .0.display())]
    AssetCollision(PathBuf),

    #[error("the draw pile is empty")]
    EmptyDrawPile,

    #[error("no draw pile card behind token '{0}'")]
    UnknownToken(String),

    #[error("card '{0}' is already always visible")]
    AlreadyVisible(String),

    #[error("card '{0}' is not always visible")]
    NotVisible(String),

    #[error("sticker '{0}' already exists in this game")]
    DuplicateSticker(String),

    #[error("sticker '{0}' not found")]
    UnknownSticker(String),

    #[error("a game named '{0}' already exists")]
    DuplicateGame(String),

    #[error("no saved game named '{0}'")]
    UnknownGame(String),

    #[error("'{0}' cannot be used as a name")]
    InvalidName(String),
}

/// Failure of the key-value persistence collaborator.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error in scope '{scope}': {source}")]
    Serialization {
        scope: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("deserialization error for key '{key}' in scope '{scope}': {source}")]
    Deserialization {
        scope: String,
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Crate-level error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The rule violation, if this error is one.
    #[must_use]
    pub fn as_game_error(&self) -> Option<&GameError> {
        match self {
            Error::Game(e) => Some(e),
            _ => None,
        }
    }

    /// Check if this is a domain rule violation (as opposed to an I/O failure).
    #[must_use]
    pub fn is_rule_violation(&self) -> bool {
        matches!(self, Error::Game(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = GameError::AlreadyInPile { name: "c1".into(), pile: Pile::InPlay };
        assert_eq!(e.to_string(), "card 'c1' is already in the in_play pile");

        let e = GameError::NotAnImage(PathBuf::from("/tmp/notes.txt"));
        assert_eq!(e.to_string(), "/tmp/notes.txt is not an image");
    }

    #[test]
    fn test_rule_violation_classification() {
        let err: Error = GameError::EmptyDrawPile.into();
        assert!(err.is_rule_violation());
        assert_eq!(err.as_game_error(), Some(&GameError::EmptyDrawPile));

        let err: Error = std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
        assert!(!err.is_rule_violation());
        assert!(err.as_game_error().is_none());
    }
}
