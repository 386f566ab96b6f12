//! Tests for loading game configuration and replaying move files.

use gobang::{
    BoardSizeError, Game, GameConfig, GameStatus, MAX_BOARD_SIZE, MoveError, MoveOutcome, Player,
    ReplayError, replay,
};
use std::io::Write;

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Create temp file");
    writeln!(file, "board_size = 9").expect("Write config");

    let config = GameConfig::from_file(file.path()).expect("Valid config");
    assert_eq!(*config.board_size(), 9);

    let game = Game::new(*config.board_size()).expect("Valid size");
    assert_eq!(game.board().size(), 9);
    assert_eq!(game.board().empty_count(), 81);
}

#[test]
fn test_config_missing_file() {
    let dir = tempfile::tempdir().expect("Create temp dir");
    let err = GameConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_config_rejects_zero_board() {
    let mut file = tempfile::NamedTempFile::new().expect("Create temp file");
    writeln!(file, "board_size = 0").expect("Write config");

    assert!(GameConfig::from_file(file.path()).is_err());
}

#[test]
fn test_config_rejects_oversized_board() {
    let mut file = tempfile::NamedTempFile::new().expect("Create temp file");
    writeln!(file, "board_size = 4294967296").expect("Write config");

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Invalid board_size"));
    assert!(GameConfig::new(MAX_BOARD_SIZE + 1).is_err());
    assert_eq!(*GameConfig::new(MAX_BOARD_SIZE).expect("Max size").board_size(), MAX_BOARD_SIZE);
}

#[test]
fn test_game_rejects_unplayable_sizes() {
    assert_eq!(Game::new(0), Err(BoardSizeError::Zero));
    assert_eq!(
        Game::new(1 << 32),
        Err(BoardSizeError::TooLarge { size: 1 << 32 })
    );
}

#[test]
fn test_replay_on_configured_board() {
    let config = GameConfig::new(5).expect("Valid size");
    let mut game = Game::new(*config.board_size()).expect("Valid size");

    let moves = "# row col\n0 0\n1 0\n0 1\n1 1\n0 2\n1 2\n0 3\n1 3\n0,4\n";
    assert_eq!(
        replay(&mut game, moves),
        Ok(Some(MoveOutcome::Win(Player::Black)))
    );
    assert_eq!(game.status(), GameStatus::Won(Player::Black));
}

#[test]
fn test_replay_out_of_bounds_on_small_board() {
    let mut game = Game::new(5).expect("Valid size");
    let err = replay(&mut game, "0 0\n5 5\n").unwrap_err();

    assert_eq!(
        err,
        ReplayError::Move {
            line: 2,
            source: MoveError::OutOfBounds {
                row: 5,
                col: 5,
                size: 5
            }
        }
    );
    assert_eq!(err.to_string(), "Line 2: Position (5, 5) is out of bounds (board is 5x5)");
}
