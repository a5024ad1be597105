//! Turn state and undo.
//!
//! ## Key Types
//!
//! - `Turn`: placements made by the active player this turn
//! - `Orientation`: line direction fixed by the second placement
//! - `UndoStack`: inverse records for this turn's placements

pub mod state;
pub mod undo;

pub use state::{Orientation, Placement, Turn, TurnPhase};
pub use undo::{UndoEntry, UndoStack};
