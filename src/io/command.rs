//! Command-line parsing for the turn prompt.
//!
//! A move is `<row>,<column>=<direction>`, for example `A,5=L` or `a,5=l`.
//! The row letter and direction are case-insensitive. No whitespace is
//! allowed anywhere except the trailing line terminator.
//!
//! Parsing only checks shape. A row letter outside `A`-`E`, a column outside
//! `1`-`5` or an unknown direction letter still parses; the rules reject it
//! with a more precise reason.

use crate::core::MoveRequest;
use crate::error::CommandError;

/// Lines that end the game.
pub const QUIT_COMMANDS: [&str; 2] = ["0,0=E", "0,0=e"];

/// A parsed prompt line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Stop the game and save the board.
    Quit,
    /// Try to make a move.
    Move(MoveRequest),
}

/// Parse one input line (with or without its line terminator).
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let text = strip_line_terminator(line);
    if QUIT_COMMANDS.contains(&text) {
        return Ok(Command::Quit);
    }
    parse_move(text).map(Command::Move)
}

/// Parse the `<row>,<column>=<direction>` shape into a 0-based request.
pub fn parse_move(text: &str) -> Result<MoveRequest, CommandError> {
    let mut chars = text.chars();
    let row = chars.next().ok_or(CommandError::Empty)?;

    let rest = chars.as_str().strip_prefix(',').ok_or(CommandError::MissingSeparator {
        separator: ',',
        at: row.len_utf8(),
    })?;

    let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let (digits, rest) = rest.split_at(digits_end);
    let col: i32 = digits.parse().map_err(|_| CommandError::InvalidColumn)?;

    let at = text.len() - rest.len();
    let rest = rest
        .strip_prefix('=')
        .ok_or(CommandError::MissingSeparator { separator: '=', at })?;

    let mut tail = rest.chars();
    let direction = tail.next().ok_or(CommandError::MissingDirection)?;
    if !tail.as_str().is_empty() {
        return Err(CommandError::TrailingInput);
    }

    Ok(MoveRequest::new(
        row.to_ascii_uppercase() as i32 - 'A' as i32,
        col - 1,
        direction.to_ascii_uppercase(),
    ))
}

/// Drop one trailing `\n` or `\r\n`.
fn strip_line_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(body) => body.strip_suffix('\r').unwrap_or(body),
        None => line,
    }
}
