//! Ordered zones.
//!
//! Only the draw pile has an order worth tracking; the other piles are plain
//! pile tags on the card records. See `DrawPile` for the token scheme that
//! hides card identities while they sit face down.
//!
//! ## Key Types
//!
//! - `DrawPile`: token stack plus token <-> card name bijection
//! - `DrawPosition`: top or bottom insertion

pub mod draw_pile;

pub use draw_pile::{DrawPile, DrawPosition};
