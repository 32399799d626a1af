//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Which moves are legal for each side
//! - How moves modify the board
//! - Win conditions
//!
//! The turn engine calls into `RulesEngine` but never interprets
//! piece movement rules directly.

pub mod engine;
pub mod rejection;

pub use engine::{Outcome, RulesEngine, WinReason};
pub use rejection::RejectionReason;
