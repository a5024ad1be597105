//! Line validation.
//!
//! A line is the maximal run of occupied cells through a point along one
//! axis. For every line of two or more cards, each attribute must be either
//! the same on every card or different on every card. Since each domain has
//! four values, a legal line never holds more than four cards.

use smallvec::SmallVec;

use crate::board::{Axis, Board, Coordinate};
use crate::cards::{Attribute, Card};
use crate::core::PlacementError;

/// Cards along one line. Legal lines fit inline.
pub type LineCards = SmallVec<[Card; 8]>;

/// Check the attribute rule on a line. Lines shorter than two always pass.
///
/// ```
/// use triad_tiles::cards::Card;
/// use triad_tiles::rules::check_line;
///
/// let a = Card::parse("circle", "red", 1).unwrap();
/// let b = Card::parse("circle", "blue", 1).unwrap();
/// let c = Card::parse("square", "red", 1).unwrap();
///
/// assert!(check_line(&[a, b]));
/// assert!(!check_line(&[a, b, c]));
/// ```
#[must_use]
pub fn check_line(cards: &[Card]) -> bool {
    if cards.len() < 2 {
        return true;
    }
    Attribute::ALL
        .iter()
        .all(|&attribute| attribute_consistent(cards, attribute))
}

/// All equal, or pairwise distinct.
fn attribute_consistent(cards: &[Card], attribute: Attribute) -> bool {
    let first = cards[0].key(attribute);
    if cards.iter().all(|c| c.key(attribute) == first) {
        return true;
    }

    let mut seen = 0u8;
    for card in cards {
        let bit = 1u8 << card.key(attribute);
        if seen & bit != 0 {
            return false;
        }
        seen |= bit;
    }
    true
}

/// Inclusive `(min, max)` bounds of the contiguous run through `through`.
///
/// Walks outward along `axis` (holding `fixed` constant) while cells are
/// occupied. The `through` cell itself counts as part of the run whether or
/// not it holds a card, so the extent of an empty cell is the run it would
/// join.
#[must_use]
pub fn chain_extent(axis: Axis, fixed: i32, through: i32, board: &Board) -> (i32, i32) {
    let mut min = through;
    while board.is_occupied(axis.at(fixed, min - 1)) {
        min -= 1;
    }
    let mut max = through;
    while board.is_occupied(axis.at(fixed, max + 1)) {
        max += 1;
    }
    (min, max)
}

/// The line along `axis` that `card` would form at `pos`, in board order.
#[must_use]
pub fn line_with(card: Card, pos: Coordinate, axis: Axis, board: &Board) -> LineCards {
    let fixed = axis.fixed(pos);
    let through = axis.along(pos);
    let (min, max) = chain_extent(axis, fixed, through, board);

    (min..=max)
        .filter_map(|i| {
            if i == through {
                Some(card)
            } else {
                board.get(axis.at(fixed, i))
            }
        })
        .collect()
}

/// Does any of the four neighbours of `pos` hold a card?
#[must_use]
pub fn has_adjacent_card(pos: Coordinate, board: &Board) -> bool {
    pos.neighbors().iter().any(|&n| board.is_occupied(n))
}

/// Decide whether `card` may go on `pos`, ignoring turn constraints.
///
/// Checks, in order: adjacency (skipped for the first card of a game),
/// occupancy, then the attribute rule on the horizontal and vertical lines.
pub fn is_legal_placement(
    card: Card,
    pos: Coordinate,
    board: &Board,
    is_first_move: bool,
) -> Result<(), PlacementError> {
    if !is_first_move && !has_adjacent_card(pos, board) {
        return Err(PlacementError::NoAdjacentCard { x: pos.x, y: pos.y });
    }
    if board.is_occupied(pos) {
        return Err(PlacementError::CellOccupied { x: pos.x, y: pos.y });
    }
    for axis in Axis::BOTH {
        let line = line_with(card, pos, axis, board);
        if line.len() >= 2 && !check_line(&line) {
            return Err(PlacementError::LineRuleViolation { axis });
        }
    }
    Ok(())
}
