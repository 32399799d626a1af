//! The turn loop.
//!
//! `TurnEngine` owns the game state for the duration of a game and drives
//! it through the states `MusketeerTurn`, `EnemyTurn` and `Finished`:
//!
//! 1. Show the board and prompt the mover
//! 2. Read one line
//! 3. Quit command → `Finished(QuitByUser)`
//! 4. Malformed line or rejected move → explain, prompt the same mover again
//! 5. Otherwise apply the move, evaluate, and either finish or hand over
//!
//! Only accepted moves change the state or the side to move.

use std::io::{BufRead, Write};

use tracing::{debug, info, instrument, warn};

use crate::core::{GameState, Side};
use crate::error::EngineError;
use crate::io::command::{parse_command, Command};
use crate::io::display::{outcome_message, prompt, rejection_message, render_board, PARSE_HELP};
use crate::rules::{Outcome, RulesEngine};

/// Where the turn loop stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    MusketeerTurn,
    EnemyTurn,
    Finished(Outcome),
}

impl Phase {
    /// The phase in which `side` is to move.
    #[must_use]
    pub const fn for_side(side: Side) -> Self {
        match side {
            Side::Musketeers => Phase::MusketeerTurn,
            Side::Enemies => Phase::EnemyTurn,
        }
    }

    /// The side to move, or `None` once finished.
    #[must_use]
    pub const fn mover(&self) -> Option<Side> {
        match self {
            Phase::MusketeerTurn => Some(Side::Musketeers),
            Phase::EnemyTurn => Some(Side::Enemies),
            Phase::Finished(_) => None,
        }
    }
}

/// Drives one game from its current state to a terminal outcome.
///
/// Generic over the rules and the console so tests can script input and
/// capture output.
pub struct TurnEngine<E: RulesEngine, R: BufRead, W: Write> {
    rules: E,
    state: GameState,
    phase: Phase,
    input: R,
    output: W,
}

impl<E: RulesEngine, R: BufRead, W: Write> TurnEngine<E, R, W> {
    /// Create an engine that resumes `state`.
    pub fn new(rules: E, state: GameState, input: R, output: W) -> Self {
        let phase = if state.is_finished() {
            Phase::Finished(state.outcome())
        } else {
            Phase::for_side(state.side_to_move())
        };
        Self {
            rules,
            state,
            phase,
            input,
            output,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Give up the engine and keep the state (for saving).
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Play until the game finishes. Returns the outcome.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Outcome, EngineError> {
        while let Phase::MusketeerTurn | Phase::EnemyTurn = self.step()? {}
        Ok(self.state.outcome())
    }

    /// Run one prompt cycle and return the resulting phase.
    ///
    /// Does nothing once the game has finished.
    pub fn step(&mut self) -> Result<Phase, EngineError> {
        let Some(mover) = self.phase.mover() else {
            return Ok(self.phase);
        };

        write!(self.output, "{}", render_board(self.state.board()))?;
        write!(self.output, "{}\n>", prompt(mover))?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            warn!(%mover, "input closed, stopping the game");
            writeln!(self.output)?;
            self.finish(Outcome::QuitByUser)?;
            return Ok(self.phase);
        }

        let Ok(line) = std::str::from_utf8(&raw) else {
            debug!(bytes = raw.len(), "command is not valid UTF-8");
            write!(self.output, "{PARSE_HELP}")?;
            return Ok(self.phase);
        };
        let request = match parse_command(line) {
            Ok(Command::Quit) => {
                self.finish(Outcome::QuitByUser)?;
                return Ok(self.phase);
            }
            Ok(Command::Move(request)) => request,
            Err(err) => {
                debug!(%err, line = line.trim_end(), "malformed command");
                write!(self.output, "{PARSE_HELP}")?;
                return Ok(self.phase);
            }
        };

        let mv = match self.rules.validate(self.state.board(), mover, &request) {
            Ok(mv) => mv,
            Err(reason) => {
                debug!(%reason, ?request, "move rejected");
                writeln!(self.output, "{}", rejection_message(&reason))?;
                return Ok(self.phase);
            }
        };

        self.rules.apply(self.state.board_mut(), &mv);
        self.state.record_move(mv);
        debug!(%mover, %mv, turn = self.state.turn_number(), "move accepted");

        let outcome = self.rules.evaluate(self.state.board(), mover);
        if outcome.is_terminal() {
            self.finish(outcome)?;
        } else {
            self.state.pass_turn();
            self.phase = Phase::for_side(self.state.side_to_move());
        }
        Ok(self.phase)
    }

    fn finish(&mut self, outcome: Outcome) -> Result<(), EngineError> {
        if let Some(message) = outcome_message(&outcome) {
            writeln!(self.output, "{message}")?;
        }
        info!(?outcome, turns = self.state.turn_number(), "game finished");
        self.state.finish(outcome);
        self.phase = Phase::Finished(outcome);
        Ok(())
    }
}
