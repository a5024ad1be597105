//! Core engine types: players, actions, RNG, configuration and errors.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord};
pub use config::{GameConfig, PlayerSeat, DEFAULT_HAND_SIZE, DEFAULT_REFRESH_INTERVAL_MS};
pub use error::{ActionError, CardError, ConfigError, PlacementError, SnapshotError, UndoError};
pub use player::{Player, PlayerId};
pub use rng::GameRng;
