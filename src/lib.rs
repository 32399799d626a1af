//! # three-musketeers
//!
//! The Three Musketeers board game, played by two people over a
//! line-oriented text protocol.
//!
//! ## Design Principles
//!
//! 1. **Decisions, Not Messages**: Rules return tagged results
//!    (`RejectionReason`, `Outcome`). Wording lives in `io::display`.
//!
//! 2. **Explicit State**: The board and the side to move live in a
//!    `GameState` owned by the `TurnEngine`. No globals.
//!
//! 3. **Unrepresentable Bad Coordinates**: A `Square` is always on the
//!    board, so indexing a `Board` cannot go out of range.
//!
//! ## Modules
//!
//! - `core`: Board, sides, moves, configuration, game state
//! - `rules`: `RulesEngine` trait, outcomes, rejection reasons
//! - `games`: The Three Musketeers rules
//! - `play`: The turn loop
//! - `io`: Board files, command parsing, display, history export

pub mod core;
pub mod error;
pub mod games;
pub mod io;
pub mod logging;
pub mod play;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Direction, GameConfig, GameState, MoveRecord, MoveRequest, Side, SideMap, Square,
    ValidMove, BOARD_SIZE,
};

pub use crate::error::{BoardFileError, CommandError, EngineError};

pub use crate::rules::{Outcome, RejectionReason, RulesEngine, WinReason};

pub use crate::games::musketeers::ThreeMusketeers;

pub use crate::play::{Phase, TurnEngine};
