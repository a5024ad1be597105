//! Card model: attribute domains, the card value type and the deck.
//!
//! ## Key Types
//!
//! - `Shape`, `Color`, `Number`: closed attribute domains
//! - `Card`: immutable value carrying one of each
//! - `Deck`: remaining cards, drawn from the front
//! - `DeckFactory`: generates and shuffles the full set

pub mod attributes;
pub mod card;
pub mod deck;

pub use attributes::{Attribute, Color, Number, Shape};
pub use card::Card;
pub use deck::{full_set, Deck, DeckFactory, FixedDeckFactory, StandardDeckFactory, FULL_DECK_SIZE};
