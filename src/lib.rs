//! # triad-tiles
//!
//! Rules engine for a tile-laying card game on an unbounded grid.
//!
//! Each card has a shape, a color and a number. Cards are laid in rows and
//! columns; in every line of two or more cards each attribute must be either
//! the same on all cards or different on all cards. A turn places one or
//! more cards along a single line, or exchanges cards with the deck.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: `GameSession` owns all game state. Rule checks are
//!    free functions over `&Board` and `&Turn` and never mutate.
//!
//! 2. **All-or-Nothing**: A rejected operation returns a typed error and
//!    leaves the session untouched.
//!
//! 3. **Deterministic**: Shuffles come from a seeded ChaCha8 stream, so the
//!    same config always deals the same game.
//!
//! ## Modules
//!
//! - `core`: players, actions, RNG, configuration, errors
//! - `cards`: attribute domains, cards, deck and deck factories
//! - `board`: coordinates and the sparse card grid
//! - `rules`: line validation, candidate cells, dead-cell hints
//! - `turn`: turn accumulation and undo records
//! - `session`: the `GameSession` aggregate and its snapshot view
//! - `sync`: periodic snapshot refresh (feature `sync`)

pub mod core;
pub mod cards;
pub mod board;
pub mod rules;
pub mod turn;
pub mod session;
#[cfg(feature = "sync")]
pub mod sync;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord,
    GameConfig, PlayerSeat,
    Player, PlayerId,
    GameRng,
    ActionError, CardError, ConfigError, PlacementError, SnapshotError, UndoError,
};

pub use crate::cards::{
    Attribute, Card, Color, Number, Shape,
    Deck, DeckFactory, FixedDeckFactory, StandardDeckFactory,
};

pub use crate::board::{Axis, Board, Coordinate};

pub use crate::rules::{
    check_line, filtered_candidates, unfiltered_candidates, is_permanently_blocked,
};

pub use crate::turn::{Orientation, Placement, Turn};

pub use crate::session::{
    DeckView, GameSession, PlayerSummary, SessionSnapshot, SwapOutcome, TableCard,
};

#[cfg(feature = "sync")]
pub use crate::sync::{apply_latest, SnapshotRefresher, SnapshotSource};
