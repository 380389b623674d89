//! Card orientation.
//!
//! A card lies on the table in one of four orientations, encoded in two bits:
//!
//! | code | face  | rotated |
//! |------|-------|---------|
//! | 0    | recto | no      |
//! | 1    | recto | yes     |
//! | 2    | verso | yes     |
//! | 3    | verso | no      |
//!
//! `rotated()` toggles the rotation and keeps the face, `flipped()` toggles
//! the face and keeps the rotation. Both are involutions.

use serde::{Deserialize, Serialize};

/// Which image of a card is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Recto,
    Verso,
}

/// Two-bit orientation code (0..=3).
///
/// Serialized as the bare integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Orientation(u8);

impl Orientation {
    /// Recto, upright. Every imported card starts here.
    pub const UPRIGHT: Self = Self(0);

    /// Build from a raw code. Returns `None` outside 0..=3.
    #[must_use]
    pub const fn new(code: u8) -> Option<Self> {
        if code < 4 {
            Some(Self(code))
        } else {
            None
        }
    }

    /// Raw code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Face shown in this orientation.
    #[must_use]
    pub const fn face(self) -> Face {
        if self.0 < 2 {
            Face::Recto
        } else {
            Face::Verso
        }
    }

    /// Is the image turned by 180 degrees?
    #[must_use]
    pub const fn is_rotated(self) -> bool {
        self.0 == 1 || self.0 == 2
    }

    /// Toggle the rotation, keep the face.
    #[must_use]
    pub const fn rotated(self) -> Self {
        Self(2 * (self.0 / 2) + (self.0 + 1) % 2)
    }

    /// Toggle the face, keep the rotation.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self(3 - self.0)
    }
}

impl TryFrom<u8> for Orientation {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::new(code).ok_or_else(|| format!("orientation code {code} out of range 0..=3"))
    }
}

impl From<Orientation> for u8 {
    fn from(orientation: Orientation) -> Self {
        orientation.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> [Orientation; 4] {
        [0, 1, 2, 3].map(|c| Orientation::new(c).unwrap())
    }

    #[test]
    fn test_face_and_rotation() {
        let expected = [
            (Face::Recto, false),
            (Face::Recto, true),
            (Face::Verso, true),
            (Face::Verso, false),
        ];
        for (o, (face, rotated)) in all().into_iter().zip(expected) {
            assert_eq!(o.face(), face, "code {}", o.code());
            assert_eq!(o.is_rotated(), rotated, "code {}", o.code());
        }
    }

    #[test]
    fn test_rotate_keeps_face() {
        for o in all() {
            let r = o.rotated();
            assert_eq!(r.face(), o.face());
            assert_ne!(r.is_rotated(), o.is_rotated());
            assert_eq!(r.rotated(), o);
        }
        assert_eq!(Orientation::new(0).unwrap().rotated().code(), 1);
        assert_eq!(Orientation::new(2).unwrap().rotated().code(), 3);
    }

    #[test]
    fn test_flip_keeps_rotation() {
        for o in all() {
            let f = o.flipped();
            assert_ne!(f.face(), o.face());
            assert_eq!(f.is_rotated(), o.is_rotated());
            assert_eq!(f.flipped(), o);
        }
        assert_eq!(Orientation::new(1).unwrap().flipped().code(), 2);
    }

    #[test]
    fn test_out_of_range() {
        assert!(Orientation::new(4).is_none());
        assert!(serde_json::from_str::<Orientation>("7").is_err());
        assert_eq!(serde_json::from_str::<Orientation>("2").unwrap().code(), 2);
        assert_eq!(serde_json::to_string(&Orientation::UPRIGHT).unwrap(), "0");
    }
}
