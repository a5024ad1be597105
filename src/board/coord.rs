//! Board coordinates and axes.

use serde::{Deserialize, Serialize};

/// An integer cell position. `y` grows upward; the origin is the centre.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0 };

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbours: left, right, up, down.
    #[must_use]
    pub fn neighbors(self) -> [Coordinate; 4] {
        [
            Coordinate::new(self.x - 1, self.y),
            Coordinate::new(self.x + 1, self.y),
            Coordinate::new(self.x, self.y + 1),
            Coordinate::new(self.x, self.y - 1),
        ]
    }

    /// Step `delta` cells along `axis`.
    #[must_use]
    pub fn step(self, axis: Axis, delta: i32) -> Self {
        match axis {
            Axis::Horizontal => Coordinate::new(self.x + delta, self.y),
            Axis::Vertical => Coordinate::new(self.x, self.y + delta),
        }
    }

    /// Is `other` an orthogonal neighbour of this cell?
    #[must_use]
    pub fn is_adjacent(self, other: Coordinate) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }

    /// The axis two adjacent cells share, if they are adjacent.
    #[must_use]
    pub fn axis_to(self, other: Coordinate) -> Option<Axis> {
        if !self.is_adjacent(other) {
            None
        } else if self.y == other.y {
            Some(Axis::Horizontal)
        } else {
            Some(Axis::Vertical)
        }
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction of a line on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Fixed `y`, varying `x`.
    Horizontal,
    /// Fixed `x`, varying `y`.
    Vertical,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// The coordinate that stays fixed along this axis.
    #[must_use]
    pub fn fixed(self, pos: Coordinate) -> i32 {
        match self {
            Axis::Horizontal => pos.y,
            Axis::Vertical => pos.x,
        }
    }

    /// The coordinate that varies along this axis.
    #[must_use]
    pub fn along(self, pos: Coordinate) -> i32 {
        match self {
            Axis::Horizontal => pos.x,
            Axis::Vertical => pos.y,
        }
    }

    /// Rebuild a coordinate from its fixed and varying parts.
    #[must_use]
    pub fn at(self, fixed: i32, along: i32) -> Coordinate {
        match self {
            Axis::Horizontal => Coordinate::new(along, fixed),
            Axis::Vertical => Coordinate::new(fixed, along),
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}
