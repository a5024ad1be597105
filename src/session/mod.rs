//! The game session aggregate and its networked-mode snapshot view.
//!
//! ## Key Types
//!
//! - `GameSession`: owns board, players, deck, turn, undo stack and history
//! - `DeckView`: the real deck locally, a bare count in networked mode
//! - `SwapOutcome`: result of a hand/deck exchange
//! - `SessionSnapshot`: server view used to build or replace a session

pub mod game;
pub mod snapshot;

pub use game::{DeckView, GameSession, SwapOutcome};
pub use snapshot::{PlayerSummary, SessionSnapshot, TableCard};
