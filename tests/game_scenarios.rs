//! End-to-end scenarios driven through the public API.

use std::io::Cursor;

use connect_four::config::AppConfig;
use connect_four::error::MoveError;
use connect_four::game::{Board, Game, GameOutcome, Marker, MoveOutcome, Player, Seat, HEIGHT, WIDTH};
use connect_four::ui::{render_text, TextClient};

// ============================================================================
// FIXTURES
// ============================================================================

/// 42 alternating moves that fill the board without a connected four.
const TIE_SEQUENCE: [usize; 42] = [
    0, 1, 0, 1, 0, 1, 2, 3, 2, 3, 2, 3, 1, 0, 1, 0, 1, 0, 3, 2, 3, 2, 3, 2, 4, 5, 4, 5, 4, 5, 5,
    4, 5, 4, 5, 4, 6, 6, 6, 6, 6, 6,
];

fn new_game() -> Game {
    Game::new(Player::new("Emma", "Red"), Player::new("Rob", "Yellow"))
}

// ============================================================================
// BOARD
// ============================================================================

#[test]
fn test_seventh_drop_in_column_is_rejected() {
    let mut board = Board::new();
    let red = Marker::new("R");
    for expected_row in (0..HEIGHT).rev() {
        assert_eq!(board.drop_disk(&red, 0), Ok(expected_row));
    }
    assert_eq!(
        board.drop_disk(&red, 0),
        Err(MoveError::ColumnFull { column: 0 })
    );
    assert_eq!(board.disk_count(), HEIGHT);
}

#[test]
fn test_bottom_row_four_is_connected() {
    let mut board = Board::new();
    let red = Marker::new("R");
    for column in 0..4 {
        board.drop_disk(&red, column).unwrap();
    }
    assert!(board.has_connected_four(&red));
}

#[test]
fn test_every_column_index_in_range_is_playable() {
    let mut board = Board::new();
    let red = Marker::new("R");
    for column in 0..WIDTH {
        assert!(board.drop_disk(&red, column).is_ok(), "column {column}");
    }
    assert!(board.drop_disk(&red, WIDTH).is_err());
}

// ============================================================================
// GAME
// ============================================================================

#[test]
fn test_turns_alternate_after_accepted_moves() {
    let mut game = new_game();
    for (i, column) in [3, 3, 4, 2, 5].into_iter().enumerate() {
        let mover = game.current_seat();
        assert_eq!(game.play(column), Ok(MoveOutcome::Continue), "move {i}");
        assert_eq!(game.current_seat(), mover.other());
    }
}

#[test]
fn test_snapshot_unchanged_by_rejected_move() {
    let mut game = new_game();
    game.play(1).unwrap();
    let before = game.board_snapshot();

    assert!(game.play(WIDTH + 3).is_err());
    assert_eq!(game.board_snapshot(), before);
    assert_eq!(game.current_player().name(), "Rob");
}

#[test]
fn test_full_tie_game() {
    let mut game = new_game();
    let mut results = Vec::new();
    for column in TIE_SEQUENCE {
        results.push(game.play(column));
    }

    assert!(results[..41].iter().all(|r| *r == Ok(MoveOutcome::Continue)));
    assert_eq!(results[41], Ok(MoveOutcome::GameOver(GameOutcome::Tie)));
    assert!(game.is_over());
    assert!(game.winner().is_none());
    assert_eq!(game.play(0), Err(MoveError::GameOver));
}

#[test]
fn test_replay_after_win() {
    let mut game = new_game();
    for _ in 0..3 {
        game.play(0).unwrap();
        game.play(1).unwrap();
    }
    assert_eq!(
        game.play(0),
        Ok(MoveOutcome::GameOver(GameOutcome::Winner(Seat::First)))
    );

    game.start_game();
    assert!(!game.is_over());
    assert_eq!(game.current_player().name(), "Emma");
    assert_eq!(render_text(&game.board_snapshot()), render_text(&Board::new().snapshot()));
}

// ============================================================================
// TEXT CLIENT
// ============================================================================

#[test]
fn test_scripted_tie_session() {
    let mut input = String::from("Alice\nBob\n");
    for column in TIE_SEQUENCE {
        input.push_str(&format!("{}\n", column + 1));
    }

    let mut client = TextClient::new(Cursor::new(input.into_bytes()), Vec::new());
    let (first, second) = client.read_players(&AppConfig::default()).unwrap();
    let mut game = Game::new(first, second);
    let outcome = client.run(&mut game).unwrap();

    assert_eq!(outcome, GameOutcome::Tie);
    let out = String::from_utf8(client.into_inner().1).unwrap();
    assert!(out.contains("Game started! Red will go first."));
    assert!(out.ends_with(" R  Y  R  Y  R  Y  R \n\nIt's a tie!\n"));
}
