//! Command-line interface for gobang.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gobang - five-in-a-row rules engine
#[derive(Parser, Debug)]
#[command(name = "gobang")]
#[command(about = "Five-in-a-row on a square board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Board options shared by every command
#[derive(clap::Args, Debug)]
pub struct BoardArgs {
    /// Board dimension (overrides the config file)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a hot-seat game, reading `row col` moves from stdin
    Play {
        /// Board options
        #[command(flatten)]
        board: BoardArgs,
    },

    /// Apply a file of `row col` moves and print the resulting position
    ///
    /// Coordinates may be any integer; negative or oversized ones are
    /// reported as out of bounds.
    Replay {
        /// Move file, one `row col` pair per line
        file: PathBuf,

        /// Board options
        #[command(flatten)]
        board: BoardArgs,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}
