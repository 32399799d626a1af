//! JSON export of a finished game's move history.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{GameState, MoveRecord};
use crate::rules::Outcome;

/// Serialized form of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistory {
    pub outcome: Outcome,
    pub moves: Vec<MoveRecord>,
    /// Final board, one string per row in the saved-board format.
    pub final_board: Vec<String>,
}

impl GameHistory {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            outcome: state.outcome(),
            moves: state.history().iter().cloned().collect(),
            final_board: state.board().to_string().lines().map(str::to_owned).collect(),
        }
    }
}

/// Write the history as pretty-printed JSON with a trailing newline.
pub fn save_history(path: &Path, state: &GameState) -> Result<()> {
    let mut payload =
        serde_json::to_string_pretty(&GameHistory::from_state(state)).context("serialize move history")?;
    payload.push('\n');
    fs::write(path, payload).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
