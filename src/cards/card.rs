//! Card projections.
//!
//! A `Card` is what the consumer gets when it asks how to show a card: the
//! name, the image to draw and whether to turn it by 180 degrees. It is
//! rebuilt from the stored record on every query and never mutated.

use std::path::{Path, PathBuf};

use crate::core::{Face, Orientation};

/// Read-only display view of a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    name: String,
    path: PathBuf,
    rotate: bool,
}

impl Card {
    /// Resolve the image and rotation for `orientation`.
    ///
    /// ```
    /// use card_table::cards::Card;
    /// use card_table::core::Orientation;
    ///
    /// let card = Card::new("c1", "recto.png", "verso.png", Orientation::new(2).unwrap());
    /// assert_eq!(card.path().to_str(), Some("verso.png"));
    /// assert!(card.rotate());
    /// ```
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        recto_path: impl AsRef<Path>,
        verso_path: impl AsRef<Path>,
        orientation: Orientation,
    ) -> Self {
        let path = match orientation.face() {
            Face::Recto => recto_path.as_ref(),
            Face::Verso => verso_path.as_ref(),
        };
        Self {
            name: name.into(),
            path: path.to_path_buf(),
            rotate: orientation.is_rotated(),
        }
    }

    /// Card name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Image to display.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Display turned by 180 degrees.
    #[must_use]
    pub fn rotate(&self) -> bool {
        self.rotate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_orientations() {
        let expected = [("r.png", false), ("r.png", true), ("v.png", true), ("v.png", false)];
        for (code, (path, rotate)) in expected.into_iter().enumerate() {
            let o = Orientation::new(code as u8).unwrap();
            let card = Card::new("test_card", "r.png", "v.png", o);
            assert_eq!(card.name(), "test_card");
            assert_eq!(card.path(), Path::new(path), "code {code}");
            assert_eq!(card.rotate(), rotate, "code {code}");
        }
    }
}
