//! Move execution.

use crate::core::{Board, ValidMove};

/// Apply a validated move: the destination takes the source's piece and the
/// source becomes empty. Captures happen by overwriting.
pub fn apply(board: &mut Board, mv: &ValidMove) {
    board.relocate(mv.from(), mv.to());
}
