//! Rules engine trait and game outcomes.
//!
//! Games implement `RulesEngine` to define their rules:
//! - Whether a requested move is legal for the mover
//! - How a legal move changes the board
//! - Win conditions

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use super::rejection::RejectionReason;
use crate::core::{Board, Direction, MoveRequest, Side, ValidMove};

/// Why the Enemies' side was declared the winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// Exactly three Musketeers share a row or a column.
    Alignment,
    /// No Enemy pieces remain on the board.
    Attrition,
}

/// Classification of a game after a move (or at the end of the loop).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No terminal condition yet.
    #[default]
    Ongoing,
    /// The Musketeers have no Enemy left to capture after an Enemy move.
    MusketeersWin,
    /// Alignment or attrition.
    EnemiesWin(WinReason),
    /// A player entered the quit command.
    QuitByUser,
}

impl Outcome {
    /// Check if the game is over.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// The winning side, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::MusketeersWin => Some(Side::Musketeers),
            Outcome::EnemiesWin(_) => Some(Side::Enemies),
            Outcome::Ongoing | Outcome::QuitByUser => None,
        }
    }
}

/// Rules engine trait.
///
/// The turn engine calls these methods once per accepted move, in order:
/// `validate`, `apply`, `evaluate`.
///
/// ## Implementation Notes
///
/// - `validate`: Must have no side effects
/// - `apply`: Only called with moves returned by `validate` on the same board
/// - `evaluate`: `mover` is the side that just moved
pub trait RulesEngine {
    /// Decide whether `request` is a legal move for `mover`.
    fn validate(
        &self,
        board: &Board,
        mover: Side,
        request: &MoveRequest,
    ) -> Result<ValidMove, RejectionReason>;

    /// Apply a validated move to the board.
    fn apply(&self, board: &mut Board, mv: &ValidMove);

    /// Classify the board after `mover` has moved.
    fn evaluate(&self, board: &Board, mover: Side) -> Outcome;

    // === Convenience Methods ===

    /// Enumerate all legal moves for a side.
    ///
    /// Default implementation tries every direction from every piece the
    /// side owns.
    fn legal_moves(&self, board: &Board, side: Side) -> Vec<ValidMove> {
        board
            .squares_with(side.piece())
            .flat_map(|square| Direction::iter().map(move |d| MoveRequest::from_square(square, d)))
            .filter_map(|request| self.validate(board, side, &request).ok())
            .collect()
    }
}
