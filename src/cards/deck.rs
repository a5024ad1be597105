//! Deck generation, shuffling and drawing.
//!
//! The full card set is the cross-product of the three attribute domains:
//! 4 shapes × 4 colors × 4 numbers = 64 cards, each exactly once.
//!
//! ## Deck order
//!
//! The front of the deck is the next card drawn. Exchanged cards go to the
//! back.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::attributes::{Color, Number, Shape};
use super::card::Card;
use crate::core::GameRng;

/// Number of cards in a full set.
pub const FULL_DECK_SIZE: usize = Shape::ALL.len() * Color::ALL.len() * 4;

/// Every card in canonical order (number, then shape, then color).
#[must_use]
pub fn full_set() -> Vec<Card> {
    let mut cards = Vec::with_capacity(FULL_DECK_SIZE);
    for number in Number::all() {
        for shape in Shape::ALL {
            for color in Color::ALL {
                cards.push(Card::new(shape, color, number));
            }
        }
    }
    cards
}

/// Source of a fresh deck for a new session.
pub trait DeckFactory {
    /// All cards the game is played with.
    fn generate(&self) -> Vec<Card>;

    /// Return `cards` in a new order.
    fn shuffle(&mut self, cards: Vec<Card>) -> Vec<Card>;

    /// Generate and shuffle in one step.
    fn build(&mut self) -> Deck {
        let cards = self.generate();
        Deck::from_cards(self.shuffle(cards))
    }
}

/// The full 64-card set, shuffled by a seeded `GameRng`.
#[derive(Clone, Debug)]
pub struct StandardDeckFactory {
    rng: GameRng,
}

impl StandardDeckFactory {
    /// Create a factory shuffling with the "deck" stream of `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed).for_context("deck"),
        }
    }
}

impl DeckFactory for StandardDeckFactory {
    fn generate(&self) -> Vec<Card> {
        full_set()
    }

    fn shuffle(&mut self, mut cards: Vec<Card>) -> Vec<Card> {
        self.rng.shuffle(&mut cards);
        cards
    }
}

/// A factory producing a fixed card order, for scripted games and tests.
#[derive(Clone, Debug, Default)]
pub struct FixedDeckFactory {
    cards: Vec<Card>,
}

impl FixedDeckFactory {
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl DeckFactory for FixedDeckFactory {
    fn generate(&self) -> Vec<Card> {
        self.cards.clone()
    }

    fn shuffle(&mut self, cards: Vec<Card>) -> Vec<Card> {
        cards
    }
}

/// Remaining cards, front first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draw the front card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Draw up to `count` cards; fewer if the deck runs out.
    pub fn draw_up_to(&mut self, count: usize) -> Vec<Card> {
        let n = count.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    /// Return a card to the back of the deck.
    pub fn put_back(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Cards in draw order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Card> + ExactSizeIterator {
        self.cards.iter()
    }
}
