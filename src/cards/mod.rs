//! Card system: stored records, piles and display projections.
//!
//! ## Key Types
//!
//! - `CardRecord`: persisted card state (images, orientation, pile, visibility)
//! - `Pile`: deck zone of a discovered card
//! - `Card`: immutable display projection built from a record

pub mod card;
pub mod pile;
pub mod record;

pub use card::Card;
pub use pile::Pile;
pub use record::CardRecord;
