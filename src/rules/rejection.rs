//! Reasons a requested move is refused.
//!
//! These are decisions, not messages: the player-facing wording lives in
//! `io::display`. The `Display` impl here is for logs.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Why a move request was rejected. Checked in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Error)]
pub enum RejectionReason {
    /// The source coordinate is off the board.
    #[display("source square is out of bounds")]
    SourceOutOfBounds,

    /// The direction symbol is not one of L, R, U, D.
    #[display("unknown direction {_0:?}")]
    UnknownDirection(#[error(not(source))] char),

    /// The destination would be off the board.
    #[display("destination square is out of bounds")]
    DestinationOutOfBounds,

    /// The source square does not hold the mover's piece.
    #[display("source square does not hold a piece of the {_0}")]
    WrongPiece(#[error(not(source))] Side),

    /// The destination is occupied by something the mover may not move onto.
    #[display("the {_0} may not move onto the destination square")]
    IllegalDestination(#[error(not(source))] Side),
}
