//! Player actions and the session's action history.
//!
//! The presentation layer can call the session operations directly or
//! build an `Action` and hand it to `GameSession::apply`. Either way every
//! accepted action is appended to the history as an `ActionRecord`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::board::Coordinate;

/// A single player action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Play the card at `card_index` of the active hand onto `at`.
    Place { card_index: usize, at: Coordinate },
    /// Take back the most recent placement of this turn.
    Undo,
    /// End the turn, refilling the hand if anything was placed.
    FinishTurn,
    /// Exchange the selected hand cards and end the turn.
    /// An empty selection is a pass.
    Swap { indices: SmallVec<[usize; 4]> },
}

impl Action {
    /// Convenience constructor for a placement.
    #[must_use]
    pub fn place(card_index: usize, x: i32, y: i32) -> Self {
        Action::Place {
            card_index,
            at: Coordinate::new(x, y),
        }
    }

    /// Convenience constructor for an exchange.
    #[must_use]
    pub fn swap(indices: &[usize]) -> Self {
        Action::Swap {
            indices: SmallVec::from_slice(indices),
        }
    }

    /// Does this action end the turn?
    #[must_use]
    pub fn ends_turn(&self) -> bool {
        matches!(self, Action::FinishTurn | Action::Swap { .. })
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
