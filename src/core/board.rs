//! The 5×5 playing grid.
//!
//! ## Square
//!
//! A bounds-checked coordinate. Squares can only be built through
//! constructors that reject anything outside the grid, so indexing a
//! `Board` with a `Square` never fails.
//!
//! ## Board
//!
//! Owned fixed-size grid of `Cell` values. The board performs no rule
//! checking: `relocate` trusts the caller to have validated the move.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use strum::IntoEnumIterator;

use super::action::Direction;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 5;

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Cell {
    /// One of the three Musketeers (`M`).
    Musketeer,
    /// One of Cardinal Richelieu's men (`o`).
    Enemy,
    /// Nothing here (`.`).
    Empty,
}

impl Cell {
    /// The symbol used in board files and on screen.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Musketeer => 'M',
            Cell::Enemy => 'o',
            Cell::Empty => '.',
        }
    }

    /// Parse a board-file symbol. Anything other than `M`, `o` or `.` is `None`.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'M' => Some(Cell::Musketeer),
            'o' => Some(Cell::Enemy),
            '.' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A coordinate known to lie on the board.
///
/// Rows 0-4 display as `A`-`E`, columns 0-4 display as `1`-`5`.
///
/// ```
/// use three_musketeers::core::Square;
///
/// let sq = Square::new(0, 4).unwrap();
/// assert_eq!(sq.to_string(), "A5");
/// assert!(Square::new(5, 0).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    row: u8,
    col: u8,
}

/// Unchecked wire form of a `Square`.
#[derive(Deserialize)]
struct RawSquare {
    row: u8,
    col: u8,
}

impl TryFrom<RawSquare> for Square {
    type Error = String;

    fn try_from(raw: RawSquare) -> Result<Self, Self::Error> {
        Square::new(raw.row.into(), raw.col.into())
            .ok_or_else(|| format!("square ({}, {}) is off the board", raw.row, raw.col))
    }
}

impl Square {
    /// Create a square, or `None` if the coordinate is off the board.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Create a square from signed coordinates (as produced by user input
    /// or by stepping off an edge).
    #[must_use]
    pub fn from_signed(row: i32, col: i32) -> Option<Self> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        Self::new(row, col)
    }

    /// Row index (0-based).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0-based).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// The square one step away in `direction`, or `None` past the edge.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        Self::from_signed(self.row as i32 + d_row, self.col as i32 + d_col)
    }

    /// Orthogonal neighbours that are still on the board.
    pub fn neighbors(self) -> SmallVec<[Square; 4]> {
        Direction::iter().filter_map(|d| self.step(d)).collect()
    }

    /// Iterate over every square in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::from_index(row, col)))
    }

    const fn from_index(row: usize, col: usize) -> Self {
        Self {
            row: row as u8,
            col: col as u8,
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.row) as char, self.col + 1)
    }
}

/// The playing grid.
///
/// Indexed by `Square`:
///
/// ```
/// use three_musketeers::core::{Board, Cell, Square};
///
/// let mut board = Board::empty();
/// let a1 = Square::new(0, 0).unwrap();
/// board[a1] = Cell::Musketeer;
/// assert_eq!(board[a1], Cell::Musketeer);
/// assert_eq!(board.count(Cell::Musketeer), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a board with every cell empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Get the cell at a square.
    #[must_use]
    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.row()][square.col()]
    }

    /// Overwrite the cell at a square.
    pub fn set(&mut self, square: Square, cell: Cell) {
        self.cells[square.row()][square.col()] = cell;
    }

    /// Move whatever occupies `from` onto `to`, leaving `from` empty.
    ///
    /// No rule checking happens here.
    pub fn relocate(&mut self, from: Square, to: Square) {
        let piece = self.get(from);
        self.set(from, Cell::Empty);
        self.set(to, piece);
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells[row].iter().copied()
    }

    /// Cells of one column, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().map(move |row| row[col])
    }

    /// Iterate over `(Square, Cell)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Square, Cell)> + '_ {
        Square::all().map(move |sq| (sq, self.get(sq)))
    }

    /// Squares currently holding `cell`.
    pub fn squares_with(&self, cell: Cell) -> impl Iterator<Item = Square> + '_ {
        self.cells().filter(move |&(_, c)| c == cell).map(|(sq, _)| sq)
    }

    /// Number of cells holding `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.squares_with(cell).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<Square> for Board {
    type Output = Cell;

    fn index(&self, square: Square) -> &Self::Output {
        &self.cells[square.row()][square.col()]
    }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, square: Square) -> &mut Self::Output {
        &mut self.cells[square.row()][square.col()]
    }
}

/// Five lines of five space-separated symbols, each line newline-terminated.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{cell}")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
