//! Move representation: raw requests, validated moves and history records.
//!
//! A turn goes through three shapes:
//! - `MoveRequest`: what the player typed, still unchecked (coordinates may be
//!   off the board, the direction symbol may be unknown)
//! - `ValidMove`: a move the rules have accepted for the current mover
//! - `MoveRecord`: a `ValidMove` stamped with who made it and when

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::Square;
use super::player::Side;

/// One of the four orthogonal directions a piece can move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Parse a direction letter (`L`, `R`, `U`, `D`, either case).
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            _ => None,
        }
    }

    /// Upper-case direction letter.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Up => 'U',
            Direction::Down => 'D',
        }
    }

    /// Unit vector as `(row delta, column delta)`.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An unchecked move as entered by a player.
///
/// `row` and `col` are 0-based and may lie off the board; `direction` is the
/// raw symbol and may be unrecognised. The validator decides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    pub row: i32,
    pub col: i32,
    pub direction: char,
}

impl MoveRequest {
    #[must_use]
    pub const fn new(row: i32, col: i32, direction: char) -> Self {
        Self { row, col, direction }
    }

    /// Build a request for a move from a known square in a known direction.
    #[must_use]
    pub fn from_square(square: Square, direction: Direction) -> Self {
        Self::new(square.row() as i32, square.col() as i32, direction.symbol())
    }
}

/// A move the rules accepted: resolved source and destination squares.
///
/// Only the validator hands these out, so applying one never needs
/// re-checking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidMove {
    from: Square,
    to: Square,
    direction: Direction,
}

impl ValidMove {
    pub(crate) const fn new(from: Square, to: Square, direction: Direction) -> Self {
        Self { from, to, direction }
    }

    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

impl fmt::Display for ValidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// A recorded move with metadata for history tracking.
///
/// Used for:
/// - The in-memory move log on `GameState`
/// - The optional JSON history export
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The side that moved.
    pub side: Side,

    /// The move made.
    #[serde(rename = "move")]
    pub mv: ValidMove,

    /// Turn number when the move was made (starts at 1).
    pub turn: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(side: Side, mv: ValidMove, turn: u32) -> Self {
        Self { side, mv, turn }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_direction_symbols() {
        for direction in Direction::iter() {
            assert_eq!(Direction::from_symbol(direction.symbol()), Some(direction));
            assert_eq!(
                Direction::from_symbol(direction.symbol().to_ascii_lowercase()),
                Some(direction)
            );
        }
        assert_eq!(Direction::from_symbol('X'), None);
        assert_eq!(Direction::from_symbol('E'), None);
    }

    #[test]
    fn test_direction_deltas_are_unit() {
        for direction in Direction::iter() {
            let (dr, dc) = direction.delta();
            assert_eq!(dr.abs() + dc.abs(), 1);
        }
    }

    #[test]
    fn test_request_from_square() {
        let sq = Square::new(3, 1).unwrap();
        let request = MoveRequest::from_square(sq, Direction::Up);
        assert_eq!(request, MoveRequest::new(3, 1, 'U'));
    }

    #[test]
    fn test_valid_move_display() {
        let from = Square::new(0, 0).unwrap();
        let to = Square::new(0, 1).unwrap();
        let mv = ValidMove::new(from, to, Direction::Right);
        assert_eq!(mv.to_string(), "A1 -> A2");
    }

    #[test]
    fn test_move_record_serialization() {
        let from = Square::new(1, 1).unwrap();
        let to = Square::new(2, 1).unwrap();
        let record = MoveRecord::new(Side::Enemies, ValidMove::new(from, to, Direction::Down), 4);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"move\""));
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
