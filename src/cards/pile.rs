//! Deck piles.

use serde::{Deserialize, Serialize};

/// Zone of a card that has been discovered (moved from the box to the deck).
///
/// Serialized with the names the consumer displays: `draw`, `in_play`,
/// `discard`, `permanent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pile {
    /// Face-down stack, identities hidden behind tokens.
    Draw,
    /// On the table.
    InPlay,
    /// Discard pile. Newly discovered cards land here.
    Discard,
    /// Locked on the table. Never shuffled back, never played.
    Permanent,
}

impl Pile {
    /// All piles.
    pub const ALL: [Pile; 4] = [Pile::Draw, Pile::InPlay, Pile::Discard, Pile::Permanent];

    /// Stable name (same as the serialized form).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Pile::Draw => "draw",
            Pile::InPlay => "in_play",
            Pile::Discard => "discard",
            Pile::Permanent => "permanent",
        }
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_serde() {
        for pile in Pile::ALL {
            let json = serde_json::to_string(&pile).unwrap();
            assert_eq!(json, format!("\"{}\"", pile.as_str()));
            assert_eq!(pile.to_string(), pile.as_str());
        }
    }
}
