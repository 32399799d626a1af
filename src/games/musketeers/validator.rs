//! Move legality.

use crate::core::{Board, Cell, Direction, MoveRequest, Side, Square, ValidMove};
use crate::rules::RejectionReason;

/// Decide whether `request` is a legal move for `mover` on `board`.
///
/// Checks, stopping at the first failure:
/// 1. Source on the board
/// 2. Direction recognised
/// 3. Destination on the board
/// 4. Source holds the mover's piece
/// 5. Destination holds what the mover may move onto: an Enemy for a
///    Musketeer (capture), an empty cell for an Enemy
pub fn validate(board: &Board, mover: Side, request: &MoveRequest) -> Result<ValidMove, RejectionReason> {
    let from = Square::from_signed(request.row, request.col).ok_or(RejectionReason::SourceOutOfBounds)?;
    let direction =
        Direction::from_symbol(request.direction).ok_or(RejectionReason::UnknownDirection(request.direction))?;
    let to = from.step(direction).ok_or(RejectionReason::DestinationOutOfBounds)?;

    if board[from] != mover.piece() {
        return Err(RejectionReason::WrongPiece(mover));
    }
    if board[to] != target_cell(mover) {
        return Err(RejectionReason::IllegalDestination(mover));
    }

    Ok(ValidMove::new(from, to, direction))
}

/// The only cell content a side may move onto.
const fn target_cell(mover: Side) -> Cell {
    match mover {
        Side::Musketeers => Cell::Enemy,
        Side::Enemies => Cell::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Row A: `M o . M .`, row B: `o . . . .`, rest empty.
    fn board() -> Board {
        let mut board = Board::empty();
        board[Square::new(0, 0).unwrap()] = Cell::Musketeer;
        board[Square::new(0, 1).unwrap()] = Cell::Enemy;
        board[Square::new(0, 3).unwrap()] = Cell::Musketeer;
        board[Square::new(1, 0).unwrap()] = Cell::Enemy;
        board
    }

    fn check(mover: Side, row: i32, col: i32, dir: char) -> Result<ValidMove, RejectionReason> {
        validate(&board(), mover, &MoveRequest::new(row, col, dir))
    }

    #[test]
    fn test_musketeer_captures_enemy() {
        let mv = check(Side::Musketeers, 0, 0, 'R').unwrap();
        assert_eq!(mv.from(), Square::new(0, 0).unwrap());
        assert_eq!(mv.to(), Square::new(0, 1).unwrap());
        assert_eq!(mv.direction(), Direction::Right);

        assert!(check(Side::Musketeers, 0, 0, 'd').is_ok());
    }

    #[test]
    fn test_source_out_of_bounds() {
        assert_eq!(check(Side::Musketeers, -1, 0, 'R'), Err(RejectionReason::SourceOutOfBounds));
        assert_eq!(check(Side::Musketeers, 0, 5, 'R'), Err(RejectionReason::SourceOutOfBounds));
        // Bounds are checked before the direction.
        assert_eq!(check(Side::Enemies, 7, 7, '?'), Err(RejectionReason::SourceOutOfBounds));
    }

    #[test]
    fn test_unknown_direction() {
        assert_eq!(check(Side::Musketeers, 0, 0, 'X'), Err(RejectionReason::UnknownDirection('X')));
        assert_eq!(check(Side::Musketeers, 0, 0, ' '), Err(RejectionReason::UnknownDirection(' ')));
    }

    #[test]
    fn test_destination_out_of_bounds() {
        assert_eq!(check(Side::Musketeers, 0, 0, 'L'), Err(RejectionReason::DestinationOutOfBounds));
        assert_eq!(check(Side::Musketeers, 0, 0, 'U'), Err(RejectionReason::DestinationOutOfBounds));
        // Off-grid destinations are rejected even when the source is empty.
        assert_eq!(check(Side::Enemies, 4, 4, 'D'), Err(RejectionReason::DestinationOutOfBounds));
    }

    #[test]
    fn test_wrong_piece() {
        assert_eq!(check(Side::Musketeers, 0, 1, 'R'), Err(RejectionReason::WrongPiece(Side::Musketeers)));
        assert_eq!(check(Side::Enemies, 0, 0, 'R'), Err(RejectionReason::WrongPiece(Side::Enemies)));
        assert_eq!(check(Side::Enemies, 2, 2, 'R'), Err(RejectionReason::WrongPiece(Side::Enemies)));
    }

    #[test]
    fn test_musketeer_illegal_destinations() {
        // Onto empty.
        assert_eq!(
            check(Side::Musketeers, 0, 3, 'D'),
            Err(RejectionReason::IllegalDestination(Side::Musketeers))
        );
        // Onto another Musketeer.
        let mut board = board();
        board[Square::new(0, 4).unwrap()] = Cell::Musketeer;
        assert_eq!(
            validate(&board, Side::Musketeers, &MoveRequest::new(0, 3, 'r')),
            Err(RejectionReason::IllegalDestination(Side::Musketeers))
        );
    }

    #[test]
    fn test_enemy_moves() {
        // Onto empty is fine.
        assert!(check(Side::Enemies, 0, 1, 'R').is_ok());
        assert!(check(Side::Enemies, 1, 0, 'D').is_ok());
        // Onto a Musketeer or another Enemy is not.
        assert_eq!(check(Side::Enemies, 0, 1, 'L'), Err(RejectionReason::IllegalDestination(Side::Enemies)));
        assert_eq!(check(Side::Enemies, 1, 0, 'U'), Err(RejectionReason::IllegalDestination(Side::Enemies)));
        assert_eq!(check(Side::Enemies, 0, 1, 'D'), Ok(ValidMove::new(
            Square::new(0, 1).unwrap(),
            Square::new(1, 1).unwrap(),
            Direction::Down,
        )));
    }
}
