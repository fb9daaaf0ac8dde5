//! Command-line interface for playroom.

use crate::Difficulty;
use clap::{Parser, Subcommand};

/// Playroom - maze and tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "playroom")]
#[command(about = "Maze runner and tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML file overriding the difficulty presets
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a maze, print it, and optionally walk it
    Maze {
        /// Difficulty preset for size and collectibles
        #[arg(short, long, value_enum, default_value_t = Difficulty::Easy)]
        difficulty: Difficulty,

        /// Seed for a reproducible maze
        #[arg(short, long)]
        seed: Option<u64>,

        /// Override the preset size (odd, at least 5)
        #[arg(long)]
        size: Option<usize>,

        /// Override the preset collectible count
        #[arg(long)]
        collectibles: Option<usize>,

        /// Print the maze as JSON instead of a picture
        #[arg(long, conflicts_with = "play")]
        json: bool,

        /// Walk the maze with w/a/s/d from stdin
        #[arg(long)]
        play: bool,
    },

    /// Play tic-tac-toe as X against the bot, or watch two bots
    Tictactoe {
        /// Difficulty preset for the bot
        #[arg(short, long, value_enum, default_value_t = Difficulty::Easy)]
        difficulty: Difficulty,

        /// Seed for reproducible bot choices
        #[arg(short, long)]
        seed: Option<u64>,

        /// Read your moves from stdin (1-9 or a label like "center")
        #[arg(long)]
        play: bool,
    },

    /// Pit the bot (as O) against a random X and print the tally
    Simulate {
        /// Difficulty preset for the bot
        #[arg(short, long, value_enum, default_value_t = Difficulty::Hard)]
        difficulty: Difficulty,

        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for a reproducible series
        #[arg(short, long)]
        seed: Option<u64>,
    },
}
