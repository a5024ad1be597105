//! Error types surfaced to the presentation layer.
//!
//! Every error here is a local, recoverable rejection. The session is left
//! unchanged whenever one of them is returned.

use thiserror::Error;

use crate::board::Axis;
use crate::cards::Card;

/// Why a placement (or an exchange) was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("cell ({x}, {y}) is already occupied")]
    CellOccupied { x: i32, y: i32 },

    #[error("cell ({x}, {y}) does not touch any card on the board")]
    NoAdjacentCard { x: i32, y: i32 },

    #[error("{axis} line would break the attribute rule")]
    LineRuleViolation { axis: Axis },

    #[error("cell ({x}, {y}) does not extend this turn's line")]
    TurnLineViolation { x: i32, y: i32 },

    #[error("it is not your turn")]
    NotYourTurn,

    #[error("no card at hand index {index} (hand has {hand_len})")]
    InvalidHandIndex { index: usize, hand_len: usize },

    #[error("cards cannot be exchanged after placing this turn")]
    SwapAfterPlacement,
}

/// Why an undo was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UndoError {
    #[error("nothing to undo")]
    NothingToUndo,

    #[error("it is not your turn")]
    NotYourTurn,
}

/// Rejection of an `Action` applied through `GameSession::apply`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    Undo(#[from] UndoError),
}

/// Out-of-domain card attribute values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("card number {0} is outside 1..=4")]
    NumberOutOfRange(u8),

    #[error("unknown shape {0:?}")]
    UnknownShape(String),

    #[error("unknown color {0:?}")]
    UnknownColor(String),
}

/// Invalid game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a game needs at least one player")]
    NoPlayers,

    #[error("player id {0} is used by more than one seat")]
    DuplicatePlayer(u32),

    #[error("hand size must be at least 1")]
    ZeroHandSize,
}

/// Failure to build or fetch a session snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("current turn belongs to unknown player {0}")]
    UnknownCurrentPlayer(u32),

    #[error("local player {0} is not seated in this game")]
    UnknownLocalPlayer(u32),

    #[error("two table cards share cell ({x}, {y})")]
    DuplicateCell { x: i32, y: i32 },

    #[error("card {0} is listed more than once")]
    DuplicateCard(Card),

    #[error("snapshot lists no players")]
    NoPlayers,

    #[error("failed to fetch snapshot: {0}")]
    Fetch(String),

    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_cell() {
        let err = PlacementError::CellOccupied { x: 2, y: -1 };
        assert_eq!(err.to_string(), "cell (2, -1) is already occupied");

        let err = PlacementError::LineRuleViolation { axis: Axis::Vertical };
        assert_eq!(err.to_string(), "vertical line would break the attribute rule");
    }

    #[test]
    fn test_json_errors_convert() {
        let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SnapshotError = bad.into();
        assert!(matches!(err, SnapshotError::Json(_)));
    }
}
