//! Side-effecting collaborators of the game engine.
//!
//! - `board_file`: load the initial board, save the final one
//! - `command`: parse prompt lines
//! - `display`: render the board and player-facing messages
//! - `history`: export the move log

pub mod board_file;
pub mod command;
pub mod display;
pub mod history;

pub use board_file::{load_board, parse_board, save_board, write_board};
pub use command::{parse_command, Command};
pub use history::{save_history, GameHistory};
