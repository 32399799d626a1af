//! Board files: loading the initial grid and saving the final one.
//!
//! ## Input format
//!
//! Any text containing at least 25 board symbols (`M`, `o`, `.`). Symbols are
//! read in row-major order; every other character, whitespace included, is
//! skipped. Running out of input early is an error.
//!
//! ## Output format
//!
//! Five lines of five space-separated symbols, each newline-terminated.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, instrument};

use crate::core::{Board, Cell, Square};
use crate::error::BoardFileError;

/// Parse a board from text, skipping anything that is not a board symbol.
pub fn parse_board(text: &str) -> Result<Board, BoardFileError> {
    let mut board = Board::empty();
    let mut cells = text.chars().filter_map(Cell::from_symbol);

    for (found, square) in Square::all().enumerate() {
        board[square] = cells.next().ok_or(BoardFileError::Truncated { found })?;
    }

    Ok(board)
}

/// Load the initial board from a file.
#[instrument]
pub fn load_board(path: &Path) -> Result<Board, BoardFileError> {
    let bytes = fs::read(path).map_err(|source| BoardFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let board = parse_board(&String::from_utf8_lossy(&bytes))?;
    debug!(
        musketeers = board.count(Cell::Musketeer),
        enemies = board.count(Cell::Enemy),
        "board loaded"
    );
    Ok(board)
}

/// Write a board in the saved-board format.
pub fn write_board<W: Write>(mut writer: W, board: &Board) -> std::io::Result<()> {
    write!(writer, "{board}")?;
    writer.flush()
}

/// Save the board to a file, replacing any existing content.
#[instrument(skip(board))]
pub fn save_board(path: &Path, board: &Board) -> Result<(), BoardFileError> {
    let to_error = |source| BoardFileError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = fs::File::create(path).map_err(to_error)?;
    write_board(file, board).map_err(to_error)?;
    debug!("board saved");
    Ok(())
}

impl FromStr for Board {
    type Err = BoardFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_board(s)
    }
}
