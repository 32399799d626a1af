//! Whole games driven through scripted console input.

use std::io::Cursor;

use three_musketeers::io::{load_board, parse_board, save_board, save_history, GameHistory};
use three_musketeers::{
    Board, Outcome, Phase, RulesEngine, Side, ThreeMusketeers, TurnEngine, WinReason,
};

const STANDARD: &str = "\
o o o o M
o o o o o
o o M o o
o o o o o
M o o o o
";

struct Finished {
    outcome: Outcome,
    board: Board,
    console: String,
}

fn play(board: &str, input: &str) -> Finished {
    let game = ThreeMusketeers::new();
    let board = parse_board(board).unwrap();
    let mut console = Vec::new();
    let mut engine = TurnEngine::new(game, game.initial_state(board), Cursor::new(input), &mut console);

    let outcome = engine.run().unwrap();
    assert_eq!(engine.phase(), Phase::Finished(outcome));
    let board = engine.into_state().into_board();
    Finished {
        outcome,
        board,
        console: String::from_utf8(console).unwrap(),
    }
}

#[test]
fn test_capturing_the_last_enemy() {
    let board = "\
M o . . .
. . . . .
. . . . .
. . . . .
. . . . .
";
    let game = play(board, "a,1=r\n");

    assert_eq!(game.outcome, Outcome::EnemiesWin(WinReason::Attrition));
    assert_eq!(game.board.to_string().lines().next(), Some(". M . . ."));
    assert!(game.console.ends_with("Cardinal Richelieu's men win!\n"));
}

#[test]
fn test_quit_on_enemy_turn_keeps_board() {
    let game = play(STANDARD, "A,5=L\n0,0=E\n");

    assert_eq!(game.outcome, Outcome::QuitByUser);
    assert_eq!(game.board.to_string().lines().next(), Some("o o o M ."));
    assert!(game.console.contains("Player 2, give the Enemy's move:\n>"));
    assert!(game.console.ends_with("Game stopped. Saving the game grid.\n"));
}

#[test]
fn test_rejections_reprompt_same_player() {
    // Enemy onto Enemy, Musketeer off the board, then junk.
    let game = play(STANDARD, "b,1=r\nA,5=R\n5,a=L\n0,0=e\n");

    assert_eq!(game.outcome, Outcome::QuitByUser);
    assert_eq!(game.board, parse_board(STANDARD).unwrap());
    assert!(game.console.contains("Move given is out of bounds!"));
    assert!(game.console.contains("Invalid input format"));
    assert_eq!(game.console.matches("Player 1, give the Musketeer's move:").count(), 4);
    assert!(!game.console.contains("Player 2"));
}

#[test]
fn test_alignment_after_capture() {
    let board = "\
M . M o .
. . . M .
. . . . .
. . . . .
o . . . .
";
    let game = play(board, "b,4=u\n");

    assert_eq!(game.outcome, Outcome::EnemiesWin(WinReason::Alignment));
    assert!(game.console.ends_with("Cardinal Richelieu's men win!\n"));
}

#[test]
fn test_opening_moves_alternate() {
    let game = play(STANDARD, "e,1=u\ne,2=l\n0,0=e\n");

    assert_eq!(game.outcome, Outcome::QuitByUser);
    assert_eq!(game.console.matches("Player 1, give the Musketeer's move:").count(), 2);
    assert_eq!(game.console.matches("Player 2, give the Enemy's move:").count(), 1);
}

#[test]
fn test_saved_game_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let start = dir.path().join("board.txt");
    let out = dir.path().join("out-theBoard.txt");
    let moves = dir.path().join("moves.json");
    std::fs::write(&start, STANDARD).unwrap();

    let game = ThreeMusketeers::new();
    let board = load_board(&start).unwrap();
    let mut console = Vec::new();
    let mut engine = TurnEngine::new(
        game,
        game.initial_state(board),
        Cursor::new("c,3=u\n0,0=e\n"),
        &mut console,
    );
    engine.run().unwrap();
    let state = engine.into_state();

    save_board(&out, state.board()).unwrap();
    save_history(&moves, &state).unwrap();

    let reloaded = load_board(&out).unwrap();
    assert_eq!(&reloaded, state.board());
    assert_eq!(game.legal_moves(&reloaded, Side::Musketeers).len(), 7);

    let history: GameHistory = serde_json::from_str(&std::fs::read_to_string(&moves).unwrap()).unwrap();
    assert_eq!(history.outcome, Outcome::QuitByUser);
    assert_eq!(history.moves.len(), 1);
    assert_eq!(history.moves[0].side, Side::Musketeers);
}
