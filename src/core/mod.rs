//! Core types: board, sides, moves, configuration and game state.
//!
//! These are plain data with invariant checks. Rules live in `rules` and
//! `games`; nothing here decides whether a move is legal.

pub mod action;
pub mod board;
pub mod config;
pub mod player;
pub mod state;

pub use action::{Direction, MoveRecord, MoveRequest, ValidMove};
pub use board::{Board, Cell, Square, BOARD_SIZE};
pub use config::{GameConfig, DEFAULT_OUTPUT_PATH};
pub use player::{Side, SideMap};
pub use state::GameState;
