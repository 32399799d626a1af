//! Error types.
//!
//! Two tiers:
//! - Fatal: `BoardFileError` and `EngineError` end the program
//! - Recoverable: `CommandError` (and `rules::RejectionReason`) are reported
//!   to the player, who is asked again

use std::io;
use std::path::PathBuf;

use derive_more::{Display, Error, From};

/// Loading or saving a board file failed.
#[derive(Debug, Display, Error)]
pub enum BoardFileError {
    /// The file could not be opened or read.
    #[display("cannot read board file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The stream ended before all 25 cells were read.
    #[display("unexpected end of board data after {found} of 25 cells")]
    Truncated { found: usize },

    /// The board could not be written.
    #[display("cannot write board file {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// A command line that does not match `<row>,<col>=<direction>`.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    #[display("empty command")]
    Empty,

    /// Expected `separator` at byte offset `at`.
    #[display("expected '{separator}' at position {at}")]
    MissingSeparator { separator: char, at: usize },

    #[display("column must be a number")]
    InvalidColumn,

    #[display("missing direction")]
    MissingDirection,

    #[display("unexpected input after the direction")]
    TrailingInput,
}

/// The turn loop could not talk to its input or output.
#[derive(Debug, Display, Error, From)]
pub enum EngineError {
    #[display("console I/O failed: {_0}")]
    Io(io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_board_file_error_display() {
        let err = BoardFileError::Truncated { found: 12 };
        assert_eq!(err.to_string(), "unexpected end of board data after 12 of 25 cells");

        let err = BoardFileError::Read {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().starts_with("cannot read board file missing.txt"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_command_error_display() {
        let err = CommandError::MissingSeparator { separator: ',', at: 1 };
        assert_eq!(err.to_string(), "expected ',' at position 1");
    }

    #[test]
    fn test_engine_error_from_io() {
        let err: EngineError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(err.to_string().starts_with("console I/O failed"));
    }
}
