//! Dead-cell hints for the presentation layer.
//!
//! These predicates only drive greying-out of grid cells. They are kept apart
//! from placement legality so the heuristic can be corrected on its own.

use super::line::chain_extent;
use crate::board::{Axis, Board, Coordinate};

/// Run length at which a line has used up every value of some attribute.
pub const FULL_LINE: i32 = 4;

/// Is `pos` sandwiched by full runs on both axes?
///
/// The run length through `pos` counts `pos` itself. A cell is reported
/// blocked when both its horizontal and vertical runs reach `FULL_LINE`.
/// This is a heuristic: a cell whose runs are long on only one axis, or
/// whose short runs already fix every attribute, is not reported.
#[must_use]
pub fn is_permanently_blocked(board: &Board, pos: Coordinate) -> bool {
    Axis::BOTH.iter().all(|&axis| {
        let (min, max) = chain_extent(axis, axis.fixed(pos), axis.along(pos), board);
        max - min + 1 >= FULL_LINE
    })
}

/// Does `pos` touch cards on both a horizontal and a vertical side?
#[must_use]
pub fn crossing_neighbors(board: &Board, pos: Coordinate) -> bool {
    Axis::BOTH.iter().all(|&axis| {
        board.is_occupied(pos.step(axis, -1)) || board.is_occupied(pos.step(axis, 1))
    })
}

/// Empty cells inside the board's bounds (grown by one) that are blocked.
#[must_use]
pub fn blocked_cells(board: &Board) -> Vec<Coordinate> {
    let Some((lo, hi)) = board.bounds() else {
        return Vec::new();
    };

    let mut cells = Vec::new();
    for y in (lo.y - 1)..=(hi.y + 1) {
        for x in (lo.x - 1)..=(hi.x + 1) {
            let pos = Coordinate::new(x, y);
            if !board.is_occupied(pos) && is_permanently_blocked(board, pos) {
                cells.push(pos);
            }
        }
    }
    cells
}
