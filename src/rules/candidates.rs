//! Candidate cells for UI highlighting.
//!
//! Candidates are empty cells orthogonally adjacent to at least one card.
//! With a selected card they are further narrowed to the cells where that
//! card could legally go this turn. Nothing here mutates state.

use rustc_hash::FxHashSet;

use super::line::is_legal_placement;
use crate::board::{Board, Coordinate};
use crate::cards::Card;
use crate::turn::Turn;

/// Empty neighbours of every occupied cell, sorted by `(y, x)`.
///
/// On an empty board the only candidate is the origin.
#[must_use]
pub fn unfiltered_candidates(board: &Board) -> Vec<Coordinate> {
    if board.is_empty() {
        return vec![Coordinate::ORIGIN];
    }

    let mut seen = FxHashSet::default();
    for pos in board.positions() {
        for n in pos.neighbors() {
            if !board.is_occupied(n) {
                seen.insert(n);
            }
        }
    }

    let mut cells: Vec<_> = seen.into_iter().collect();
    cells.sort_by_key(|c| (c.y, c.x));
    cells
}

/// Candidates where `card` passes both the line rules and the turn rules.
#[must_use]
pub fn filtered_candidates(board: &Board, card: Card, turn: &Turn) -> Vec<Coordinate> {
    let is_first_move = board.is_empty();
    unfiltered_candidates(board)
        .into_iter()
        .filter(|&pos| {
            is_legal_placement(card, pos, board, is_first_move).is_ok()
                && turn.is_valid_placement(pos, board)
        })
        .collect()
}
