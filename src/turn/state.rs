//! Per-turn placement tracking.
//!
//! A `Turn` belongs to one player and records the cards placed since the
//! turn began. All cards of a turn must form a single gap-free line: the
//! second card fixes the orientation, later cards may only extend the
//! contiguous chain at either end.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Axis, Board, Coordinate};
use crate::cards::Card;
use crate::core::PlayerId;
use crate::rules::chain_extent;

/// Line direction of the turn in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Fewer than two cards placed.
    #[default]
    Unset,
    Horizontal,
    Vertical,
}

impl Orientation {
    #[must_use]
    pub fn axis(self) -> Option<Axis> {
        match self {
            Orientation::Unset => None,
            Orientation::Horizontal => Some(Axis::Horizontal),
            Orientation::Vertical => Some(Axis::Vertical),
        }
    }
}

impl From<Axis> for Orientation {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Orientation::Horizontal,
            Axis::Vertical => Orientation::Vertical,
        }
    }
}

/// One card put on the board during a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub card: Card,
    pub at: Coordinate,
}

/// Coarse turn state for the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// Nothing placed yet.
    Idle,
    /// At least one card placed; finishing will refill the hand.
    InProgress,
}

/// The active player's turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    player: PlayerId,
    placements: SmallVec<[Placement; 4]>,
    orientation: Orientation,
}

impl Turn {
    /// A fresh, idle turn for `player`.
    #[must_use]
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            placements: SmallVec::new(),
            orientation: Orientation::Unset,
        }
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if self.placements.is_empty() {
            TurnPhase::Idle
        } else {
            TurnPhase::InProgress
        }
    }

    /// Would a card at `pos` keep this turn's cards on one contiguous line?
    ///
    /// `board` must already contain this turn's earlier placements.
    #[must_use]
    pub fn is_valid_placement(&self, pos: Coordinate, board: &Board) -> bool {
        let Some(first) = self.placements.first() else {
            return true;
        };

        let Some(axis) = self.orientation.axis() else {
            return first.at.is_adjacent(pos);
        };

        if axis.fixed(pos) != axis.fixed(first.at) {
            return false;
        }
        let (min, max) = chain_extent(axis, axis.fixed(first.at), axis.along(first.at), board);
        let along = axis.along(pos);
        along == max + 1 || along == min - 1
    }

    /// Append an accepted placement, fixing the orientation on the second.
    pub fn record(&mut self, placement: Placement) {
        if self.placements.len() == 1 {
            if let Some(axis) = self.placements[0].at.axis_to(placement.at) {
                self.orientation = axis.into();
            }
        }
        self.placements.push(placement);
    }

    /// Drop the most recent placement.
    ///
    /// Once fewer than two cards remain the orientation is free again.
    pub fn pop(&mut self) -> Option<Placement> {
        let last = self.placements.pop()?;
        if self.placements.len() < 2 {
            self.orientation = Orientation::Unset;
        }
        Some(last)
    }
}
