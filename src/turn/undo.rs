//! Undo stack for placements within the current turn.

use serde::{Deserialize, Serialize};

use crate::board::Coordinate;
use crate::cards::Card;

/// Everything needed to invert one placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoEntry {
    pub card: Card,
    pub at: Coordinate,
    /// Where the card sat in the hand before it was played.
    pub hand_index: usize,
}

/// LIFO record of this turn's placements.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoStack {
    entries: Vec<UndoEntry>,
}

impl UndoStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: UndoEntry) {
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<UndoEntry> {
        self.entries.pop()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&UndoEntry> {
        self.entries.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
