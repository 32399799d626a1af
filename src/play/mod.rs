//! Game orchestration: the turn loop that sequences rules and console I/O.

pub mod turn;

pub use turn::{Phase, TurnEngine};
