//! Win detection.
//!
//! Outcome labels follow the classic rules table this game ships with:
//! alignment and attrition are reported as a win for Cardinal Richelieu's
//! men, a stuck position as a win for the Musketeers.

use crate::core::{Board, Cell, Side, BOARD_SIZE};
use crate::rules::{Outcome, WinReason};

/// Classify the board right after `mover` moved.
///
/// Alignment and attrition are checked first. The stuck condition is only
/// considered after an Enemy move.
pub fn evaluate(board: &Board, mover: Side) -> Outcome {
    if musketeers_in_line(board) {
        Outcome::EnemiesWin(WinReason::Alignment)
    } else if !enemies_left(board) {
        Outcome::EnemiesWin(WinReason::Attrition)
    } else if mover == Side::Enemies && musketeers_stuck(board) {
        Outcome::MusketeersWin
    } else {
        Outcome::Ongoing
    }
}

/// Exactly three Musketeers in some row or some column, adjacent or not.
pub fn musketeers_in_line(board: &Board) -> bool {
    let is_musketeer = |c: &Cell| *c == Cell::Musketeer;
    (0..BOARD_SIZE).any(|i| {
        board.row(i).filter(is_musketeer).count() == 3 || board.column(i).filter(is_musketeer).count() == 3
    })
}

pub fn enemies_left(board: &Board) -> bool {
    board.cells().any(|(_, cell)| cell == Cell::Enemy)
}

/// No Musketeer has an orthogonally adjacent Enemy to capture.
pub fn musketeers_stuck(board: &Board) -> bool {
    board
        .squares_with(Cell::Musketeer)
        .all(|sq| sq.neighbors().iter().all(|&n| board[n] != Cell::Enemy))
}
