//! Gobang - command-line harness around the rules engine.

use anyhow::{Context, Result};
use clap::Parser;
use gobang::cli::{BoardArgs, Cli, Command};
use gobang::{Game, GameConfig, GameStatus, MoveOutcome, parse_move, replay};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { board } => run_play(board),
        Command::Replay { file, board, json } => run_replay(&file, board, json),
    }
}

/// Logs go to stderr so stdout carries only the board and JSON output.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Resolves the board size from the config file and the `--size` override.
#[instrument]
fn load_config(args: &BoardArgs) -> Result<GameConfig> {
    let config = match &args.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    Ok(match args.size {
        Some(size) => GameConfig::new(size)?,
        None => config,
    })
}

/// Interactive hot-seat loop on stdin/stdout.
fn run_play(args: BoardArgs) -> Result<()> {
    let config = load_config(&args)?;
    let mut game = Game::new(*config.board_size())?;
    info!(size = *config.board_size(), "Starting game");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut lines = stdin.lock().lines();

    while !game.is_over() {
        write!(
            stdout,
            "{}\n{} ({}) to move, enter `row col`: ",
            game.board().display(),
            game.current_player(),
            game.current_player().symbol(),
        )?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            writeln!(stdout)?;
            info!("Input closed before the game ended");
            return Ok(());
        };
        let line = line?;

        let Some((row, col)) = parse_move(&line) else {
            writeln!(stdout, "Could not read {:?}, expected two numbers", line.trim())?;
            continue;
        };

        match game.apply_move(row, col) {
            Ok(MoveOutcome::Continue(_)) => {}
            Ok(outcome) => writeln!(stdout, "{}\n{}", game.board().display(), outcome)?,
            Err(e) => writeln!(stdout, "{}", e)?,
        }
    }

    Ok(())
}

/// Applies a move file and prints the resulting position.
fn run_replay(file: &Path, args: BoardArgs, json: bool) -> Result<()> {
    let config = load_config(&args)?;
    let input = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read move file {}", file.display()))?;

    let mut game = Game::new(*config.board_size())?;
    replay(&mut game, &input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    } else {
        print!("{}", game.board().display());
        match game.status() {
            GameStatus::InProgress => println!("{} to move", game.current_player()),
            status => println!("{}", status),
        }
    }

    Ok(())
}
