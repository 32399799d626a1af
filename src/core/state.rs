//! Game state: board, turn, history and outcome.
//!
//! ## GameState
//!
//! Everything the turn loop threads from one turn to the next:
//! - The board
//! - Which side moves next and the turn number
//! - Per-side move counts
//! - Move history (accepted moves only)
//! - The outcome once the game has finished
//!
//! Rejected move attempts never touch the state.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{MoveRecord, ValidMove};
use super::board::Board;
use super::player::{Side, SideMap};
use crate::rules::Outcome;

/// Complete game state.
///
/// Uses an `im` persistent vector for the history so snapshots of the state
/// stay cheap to clone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,

    /// Side to move.
    side_to_move: Side,

    /// Turn number (starts at 1, advances after every accepted move).
    turn_number: u32,

    /// Accepted moves per side.
    moves_made: SideMap<u32>,

    /// Accepted moves in order.
    history: Vector<MoveRecord>,

    outcome: Outcome,
}

impl GameState {
    /// Create a new game from a loaded board.
    ///
    /// ## Defaults
    ///
    /// - `side_to_move`: Musketeers
    /// - `turn_number`: 1
    /// - `outcome`: Ongoing
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            side_to_move: Side::Musketeers,
            turn_number: 1,
            moves_made: SideMap::default(),
            history: Vector::new(),
            outcome: Outcome::Ongoing,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Consume the state, keeping only the board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Number of accepted moves made by a side.
    #[must_use]
    pub fn moves_made(&self, side: Side) -> u32 {
        self.moves_made[side]
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Check if the game has reached a terminal outcome.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Record an accepted move for the side to move.
    ///
    /// Call after the move has been applied to the board.
    pub fn record_move(&mut self, mv: ValidMove) {
        let side = self.side_to_move;
        self.history.push_back(MoveRecord::new(side, mv, self.turn_number));
        self.moves_made[side] += 1;
    }

    /// Hand the move to the other side.
    pub fn pass_turn(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
        self.turn_number += 1;
    }

    /// Set the final outcome.
    pub fn finish(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, Square};

    fn sample_move() -> ValidMove {
        ValidMove::new(
            Square::new(0, 0).unwrap(),
            Square::new(0, 1).unwrap(),
            Direction::Right,
        )
    }

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new(Board::empty());
        assert_eq!(state.side_to_move(), Side::Musketeers);
        assert_eq!(state.turn_number(), 1);
        assert!(state.history().is_empty());
        assert_eq!(state.outcome(), Outcome::Ongoing);
        assert!(!state.is_finished());
    }

    #[test]
    fn test_record_and_pass() {
        let mut state = GameState::new(Board::empty());

        state.record_move(sample_move());
        state.pass_turn();

        assert_eq!(state.side_to_move(), Side::Enemies);
        assert_eq!(state.turn_number(), 2);
        assert_eq!(state.moves_made(Side::Musketeers), 1);
        assert_eq!(state.moves_made(Side::Enemies), 0);

        let record = &state.history()[0];
        assert_eq!(record.side, Side::Musketeers);
        assert_eq!(record.turn, 1);
        assert_eq!(record.mv, sample_move());
    }

    #[test]
    fn test_finish() {
        let mut state = GameState::new(Board::empty());
        state.finish(Outcome::QuitByUser);
        assert!(state.is_finished());
        assert_eq!(state.outcome(), Outcome::QuitByUser);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = GameState::new(Board::empty());
        let snapshot = state.clone();
        state.record_move(sample_move());

        assert_eq!(snapshot.history().len(), 0);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_state_serialization() {
        let mut state = GameState::new(Board::empty());
        state.record_move(sample_move());
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
