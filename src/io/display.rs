//! Player-facing text: the board grid, prompts and messages.
//!
//! Nothing here decides anything. The turn engine asks for the wording of
//! a decision the rules already made.

use crate::core::{Board, Side, BOARD_SIZE};
use crate::rules::{Outcome, RejectionReason};

/// Printed once before the first turn.
pub const INSTRUCTIONS: &str = "\
*** The Three Musketeers Game ***
To make a move, enter the location of the piece you want to move,
and the direction you want it to move. Locations are indicated as
a letter (A, B, C, D, E) followed by a number (1, 2, 3, 4, or 5).
Directions are indicated as left, right, up, down (L/l, R/r, U/u, D/d).
For example, to move the Musketeer from the top right-hand corner
to the row below, enter 'A,5 = L' or 'a,5=l'(without quotes).
For convenience in typing, use lowercase letters.
";

/// Shown when a line does not have the move shape.
pub const PARSE_HELP: &str = "\
Invalid input format. Please use the format 'i,j=value'.
i is a character between A-E (accepts both low and upper), j is a number between 1-5, and
value is the direction wanted (L/l, R/r, U/u, or D/d).
";

pub const QUIT_MESSAGE: &str = "Game stopped. Saving the game grid.";

const RULE: &str = " +---+---+---+---+---+";

/// Render the board as a labelled grid.
///
/// ```text
///    1   2   3   4   5
///  +---+---+---+---+---+
/// A| M | o | . | . | . |
///  +---+---+---+---+---+
/// ```
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("   1   2   3   4   5\n");
    out.push_str(RULE);
    out.push('\n');
    for row in 0..BOARD_SIZE {
        out.push((b'A' + row as u8) as char);
        out.push('|');
        for cell in board.row(row) {
            out.push(' ');
            out.push(cell.symbol());
            out.push_str(" |");
        }
        out.push('\n');
        out.push_str(RULE);
        out.push('\n');
    }
    out
}

/// The turn prompt, without the trailing `>` marker.
pub fn prompt(side: Side) -> String {
    let piece = match side {
        Side::Musketeers => "the Musketeer",
        Side::Enemies => "the Enemy",
    };
    format!("Player {}, give {piece}'s move:", side.number())
}

pub fn rejection_message(reason: &RejectionReason) -> &'static str {
    match reason {
        RejectionReason::SourceOutOfBounds => "Coordinates given are out of bounds!",
        RejectionReason::UnknownDirection(_) => "Invalid direction!",
        RejectionReason::DestinationOutOfBounds => "Move given is out of bounds!",
        RejectionReason::WrongPiece(Side::Musketeers) => "In the coodinates given there is no musketeer!",
        RejectionReason::WrongPiece(Side::Enemies) => "In the coodinates given there is no enemy!",
        RejectionReason::IllegalDestination(_) => "You can't move there!",
    }
}

/// Announcement for a finished game. `None` while the game is ongoing.
pub fn outcome_message(outcome: &Outcome) -> Option<&'static str> {
    match outcome.winner() {
        Some(Side::Enemies) => Some("Cardinal Richelieu's men win!"),
        Some(Side::Musketeers) => Some("The Musketeers win!"),
        None if *outcome == Outcome::QuitByUser => Some(QUIT_MESSAGE),
        None => None,
    }
}
