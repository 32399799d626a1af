//! Three Musketeers rules engine.

use tracing::{debug, instrument};

use super::{executor, validator, win};
use crate::core::{Board, GameState, MoveRequest, Side, ValidMove};
use crate::rules::{Outcome, RejectionReason, RulesEngine};

/// The Three Musketeers rules.
///
/// Stateless: the board and turn live in `GameState`, owned by the caller.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreeMusketeers;

impl ThreeMusketeers {
    pub fn new() -> Self {
        Self
    }

    /// Build the initial state for a game on `board`. Musketeers move first.
    pub fn initial_state(&self, board: Board) -> GameState {
        GameState::new(board)
    }
}

impl RulesEngine for ThreeMusketeers {
    #[instrument(level = "trace", skip(self, board))]
    fn validate(
        &self,
        board: &Board,
        mover: Side,
        request: &MoveRequest,
    ) -> Result<ValidMove, RejectionReason> {
        validator::validate(board, mover, request)
    }

    fn apply(&self, board: &mut Board, mv: &ValidMove) {
        debug!(%mv, "applying move");
        executor::apply(board, mv);
    }

    #[instrument(level = "trace", skip(self, board))]
    fn evaluate(&self, board: &Board, mover: Side) -> Outcome {
        win::evaluate(board, mover)
    }
}
