//! Player identification and per-player data.
//!
//! ## PlayerId
//!
//! Opaque player identifier. In networked mode this is the server's id;
//! in hot-seat mode it comes from `GameConfig`.
//!
//! ## Player
//!
//! A seated player: nickname, ordered hand and score. Hand order is
//! significant because the presentation layer addresses cards by index.
//! In networked mode other players' cards are not visible; only their count
//! is known, kept as `concealed`.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seated player and their private hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub nickname: String,
    hand: Vec<Card>,
    #[serde(default)]
    concealed: usize,
    pub score: u32,
}

impl Player {
    /// Create a player with an empty hand and zero score.
    pub fn new(id: PlayerId, nickname: impl Into<String>) -> Self {
        Self {
            id,
            nickname: nickname.into(),
            hand: Vec::new(),
            concealed: 0,
            score: 0,
        }
    }

    /// The player's hand, in display order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Number of cards in hand.
    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    /// Cards held, including ones this session cannot see.
    #[must_use]
    pub fn cards_count(&self) -> usize {
        self.hand.len() + self.concealed
    }

    /// Cards held that this session cannot see.
    #[must_use]
    pub fn concealed(&self) -> usize {
        self.concealed
    }

    /// Record how many unseen cards this player holds.
    pub fn set_concealed(&mut self, count: usize) {
        self.concealed = count;
    }

    /// Get the card at `index`, if any.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<Card> {
        self.hand.get(index).copied()
    }

    /// Append a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Remove and return the card at `index`.
    ///
    /// Returns `None` (and leaves the hand untouched) if out of range.
    pub fn remove_card(&mut self, index: usize) -> Option<Card> {
        if index < self.hand.len() {
            Some(self.hand.remove(index))
        } else {
            None
        }
    }

    /// Insert a card at `index`, clamped to the end of the hand.
    pub fn insert_card(&mut self, index: usize, card: Card) {
        let idx = index.min(self.hand.len());
        self.hand.insert(idx, card);
    }

    /// Replace the whole hand.
    pub fn set_hand(&mut self, hand: Vec<Card>) {
        self.hand = hand;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Color, Number, Shape};

    fn card(n: u8) -> Card {
        Card::new(Shape::Circle, Color::Red, Number::new(n).unwrap())
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(format!("{}", PlayerId::new(7)), "Player 7");
        assert_eq!(PlayerId::new(7).raw(), 7);
    }

    #[test]
    fn test_remove_and_insert_restore_order() {
        let mut player = Player::new(PlayerId::new(1), "Alice");
        for n in 1..=4 {
            player.add_card(card(n));
        }
        let before = player.hand().to_vec();

        let removed = player.remove_card(1).unwrap();
        assert_eq!(removed, card(2));
        assert_eq!(player.hand_len(), 3);

        player.insert_card(1, removed);
        assert_eq!(player.hand(), before.as_slice());
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut player = Player::new(PlayerId::new(1), "Alice");
        player.add_card(card(1));
        assert_eq!(player.remove_card(5), None);
        assert_eq!(player.hand_len(), 1);
    }

    #[test]
    fn test_insert_clamps() {
        let mut player = Player::new(PlayerId::new(1), "Alice");
        player.add_card(card(1));
        player.insert_card(10, card(2));
        assert_eq!(player.hand(), &[card(1), card(2)]);
    }

    #[test]
    fn test_cards_count_includes_concealed() {
        let mut player = Player::new(PlayerId::new(2), "Bob");
        player.add_card(card(1));
        player.set_concealed(3);
        assert_eq!(player.hand_len(), 1);
        assert_eq!(player.concealed(), 3);
        assert_eq!(player.cards_count(), 4);
    }

    #[test]
    fn test_player_id_serializes_as_number() {
        let json = serde_json::to_string(&PlayerId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
