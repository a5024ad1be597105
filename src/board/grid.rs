//! Sparse board storage.
//!
//! The `Board` maps coordinates to cards. It performs no rule checking;
//! callers validate with `rules::is_legal_placement` first.

use rustc_hash::FxHashMap;

use super::coord::Coordinate;
use crate::cards::Card;
use crate::core::PlacementError;

/// Cards on the table, at most one per coordinate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: FxHashMap<Coordinate, Card>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The card at `pos`, if any.
    #[must_use]
    pub fn get(&self, pos: Coordinate) -> Option<Card> {
        self.cells.get(&pos).copied()
    }

    #[must_use]
    pub fn is_occupied(&self, pos: Coordinate) -> bool {
        self.cells.contains_key(&pos)
    }

    /// Put a card on an empty cell.
    pub fn place(&mut self, card: Card, pos: Coordinate) -> Result<(), PlacementError> {
        if self.is_occupied(pos) {
            return Err(PlacementError::CellOccupied { x: pos.x, y: pos.y });
        }
        self.cells.insert(pos, card);
        Ok(())
    }

    /// Take a card off the board. Only undo calls this.
    pub fn remove(&mut self, pos: Coordinate) -> Option<Card> {
        self.cells.remove(&pos)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Occupied cells in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Card)> + '_ {
        self.cells.iter().map(|(&pos, &card)| (pos, card))
    }

    /// Occupied coordinates in no particular order.
    pub fn positions(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.keys().copied()
    }

    /// Inclusive bounding box `(min, max)` of the occupied cells.
    #[must_use]
    pub fn bounds(&self) -> Option<(Coordinate, Coordinate)> {
        let mut positions = self.positions();
        let first = positions.next()?;
        Some(positions.fold((first, first), |(lo, hi), p| {
            (
                Coordinate::new(lo.x.min(p.x), lo.y.min(p.y)),
                Coordinate::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }
}

impl FromIterator<(Coordinate, Card)> for Board {
    /// Later entries for the same cell overwrite earlier ones.
    fn from_iter<I: IntoIterator<Item = (Coordinate, Card)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::full_set;

    #[test]
    fn test_place_and_get() {
        let cards = full_set();
        let mut board = Board::new();
        assert!(board.is_empty());

        board.place(cards[0], Coordinate::ORIGIN).unwrap();
        assert_eq!(board.get(Coordinate::ORIGIN), Some(cards[0]));
        assert_eq!(board.get(Coordinate::new(1, 0)), None);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_place_on_occupied_cell_fails() {
        let cards = full_set();
        let mut board = Board::new();
        board.place(cards[0], Coordinate::new(3, 4)).unwrap();

        let err = board.place(cards[1], Coordinate::new(3, 4)).unwrap_err();
        assert_eq!(err, PlacementError::CellOccupied { x: 3, y: 4 });
        assert_eq!(board.get(Coordinate::new(3, 4)), Some(cards[0]));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_remove() {
        let cards = full_set();
        let mut board = Board::new();
        board.place(cards[0], Coordinate::ORIGIN).unwrap();

        assert_eq!(board.remove(Coordinate::ORIGIN), Some(cards[0]));
        assert_eq!(board.remove(Coordinate::ORIGIN), None);
        assert!(board.is_empty());
    }

    #[test]
    fn test_bounds() {
        let cards = full_set();
        let mut board = Board::new();
        assert_eq!(board.bounds(), None);

        board.place(cards[0], Coordinate::new(0, 0)).unwrap();
        board.place(cards[1], Coordinate::new(-2, 1)).unwrap();
        board.place(cards[2], Coordinate::new(1, -3)).unwrap();

        assert_eq!(
            board.bounds(),
            Some((Coordinate::new(-2, -3), Coordinate::new(1, 1)))
        );
    }
}
