//! Game configuration.
//!
//! A `GameConfig` describes who is seated, how many cards a hand holds,
//! the shuffle seed and whether the board starts with a card at the origin.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::PlayerId;

/// Default number of cards in a full hand.
pub const DEFAULT_HAND_SIZE: usize = 4;

/// Default snapshot refresh period in networked mode.
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 3_000;

/// A seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSeat {
    pub id: PlayerId,
    pub nickname: String,
}

impl PlayerSeat {
    pub fn new(id: u32, nickname: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(id),
            nickname: nickname.into(),
        }
    }
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seats in turn order. The first seat starts.
    pub players: Vec<PlayerSeat>,

    /// Cards dealt per hand and the refill target after a turn.
    pub hand_size: usize,

    /// Shuffle seed. Same seed produces the same deal.
    pub seed: u64,

    /// Place the first deck card at (0,0) after dealing.
    pub seed_origin: bool,

    /// Period of the remote snapshot refresh, in milliseconds.
    pub refresh_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: vec![PlayerSeat::new(1, "Alice"), PlayerSeat::new(2, "Bob")],
            hand_size: DEFAULT_HAND_SIZE,
            seed: 42,
            seed_origin: true,
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Replace the seating.
    #[must_use]
    pub fn with_players(mut self, players: Vec<PlayerSeat>) -> Self {
        self.players = players;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Start from an empty board instead of a card at the origin.
    #[must_use]
    pub fn with_empty_board(mut self) -> Self {
        self.seed_origin = false;
        self
    }

    #[must_use]
    pub fn with_refresh_interval_ms(mut self, ms: u64) -> Self {
        self.refresh_interval_ms = ms;
        self
    }

    /// Refresh period as a `Duration`.
    #[must_use]
    pub fn refresh_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.refresh_interval_ms)
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        if self.hand_size == 0 {
            return Err(ConfigError::ZeroHandSize);
        }
        let mut seen = FxHashSet::default();
        for seat in &self.players {
            if !seen.insert(seat.id) {
                return Err(ConfigError::DuplicatePlayer(seat.id.raw()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.players.len(), 2);
        assert_eq!(config.players[0].nickname, "Alice");
        assert_eq!(config.hand_size, 4);
        assert!(config.seed_origin);
        assert_eq!(config.refresh_interval().as_secs(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_seed(123)
            .with_hand_size(6)
            .with_empty_board()
            .with_refresh_interval_ms(500);

        assert_eq!(config.seed, 123);
        assert_eq!(config.hand_size, 6);
        assert!(!config.seed_origin);
        assert_eq!(config.refresh_interval_ms, 500);
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let empty = GameConfig::default().with_players(vec![]);
        assert_eq!(empty.validate(), Err(ConfigError::NoPlayers));

        let dup = GameConfig::default()
            .with_players(vec![PlayerSeat::new(1, "A"), PlayerSeat::new(1, "B")]);
        assert_eq!(dup.validate(), Err(ConfigError::DuplicatePlayer(1)));

        let no_hand = GameConfig::default().with_hand_size(0);
        assert_eq!(no_hand.validate(), Err(ConfigError::ZeroHandSize));
    }

    #[test]
    fn test_serialization_fills_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"seed": 9}"#).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.hand_size, DEFAULT_HAND_SIZE);
        assert_eq!(config.players.len(), 2);
    }
}
