//! Play the Three Musketeers on the terminal.
//!
//! Loads the initial board named on the command line, alternates prompts
//! between the two players until someone wins or quits, then saves the
//! final board.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use three_musketeers::core::DEFAULT_OUTPUT_PATH;
use three_musketeers::io::display::INSTRUCTIONS;
use three_musketeers::io::{load_board, save_board, save_history};
use three_musketeers::{logging, GameConfig, ThreeMusketeers, TurnEngine};

#[derive(Parser)]
#[command(
    name = "three-musketeers",
    version,
    about = "Two-player Three Musketeers on a 5x5 board"
)]
struct Cli {
    /// Initial board file (25 symbols from `M`, `o`, `.`).
    board: PathBuf,

    /// Where to save the board when the game ends.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Also write the move history to this file as JSON.
    #[arg(long)]
    history: Option<PathBuf>,

    /// Do not print the instructions banner.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn config(&self) -> GameConfig {
        let config = GameConfig::new()
            .with_output_path(&self.output)
            .with_instructions(!self.quiet);
        match &self.history {
            Some(path) => config.with_history_path(path),
            None => config,
        }
    }
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    play(&cli.board, &cli.config())
}

fn play(board_path: &Path, config: &GameConfig) -> Result<()> {
    let mut out = io::stdout().lock();
    if config.show_instructions {
        write!(out, "{INSTRUCTIONS}")?;
    }

    let board = load_board(board_path).context("load initial board")?;
    let game = ThreeMusketeers::new();
    let mut engine = TurnEngine::new(game, game.initial_state(board), io::stdin().lock(), &mut out);
    engine.run().context("play game")?;
    let state = engine.into_state();

    let output_path = config.output_path();
    save_board(output_path, state.board()).context("save final board")?;
    if let Some(path) = config.history_path() {
        save_history(path, &state)?;
    }

    writeln!(out, "Saving {}...Done\n Au revoir!", output_path.display())?;
    Ok(())
}
