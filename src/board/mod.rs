//! Board state: coordinates, axes and the sparse card grid.

pub mod coord;
pub mod grid;

pub use coord::{Axis, Coordinate};
pub use grid::Board;
