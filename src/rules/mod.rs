//! Placement rules.
//!
//! - `line`: attribute rule, adjacency and chain extents
//! - `candidates`: cells to highlight for the selected card
//! - `hints`: dead-cell predicate for greying out the grid
//!
//! All functions take the board (and turn) explicitly and never mutate it.

pub mod candidates;
pub mod hints;
pub mod line;

pub use candidates::{filtered_candidates, unfiltered_candidates};
pub use hints::{blocked_cells, crossing_neighbors, is_permanently_blocked};
pub use line::{chain_extent, check_line, has_adjacent_card, is_legal_placement, line_with};
