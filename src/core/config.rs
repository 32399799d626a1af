//! Game configuration.
//!
//! The rules themselves are fixed; configuration only covers the
//! surroundings of a game: where the final board is saved, whether a move
//! history is exported, and whether the instructions banner is shown.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File the final board is written to unless overridden.
pub const DEFAULT_OUTPUT_PATH: &str = "out-theBoard.txt";

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Where the final board is saved when the game ends.
    pub output_path: PathBuf,

    /// Where the JSON move history is written. `None` disables the export.
    pub history_path: Option<PathBuf>,

    /// Print the rules banner before the first turn.
    pub show_instructions: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            history_path: None,
            show_instructions: true,
        }
    }
}

impl GameConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output board path.
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Enable the JSON move history export.
    #[must_use]
    pub fn with_history_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_path = Some(path.into());
        self
    }

    /// Enable or disable the instructions banner.
    #[must_use]
    pub fn with_instructions(mut self, show: bool) -> Self {
        self.show_instructions = show;
        self
    }

    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    #[must_use]
    pub fn history_path(&self) -> Option<&Path> {
        self.history_path.as_deref()
    }
}
