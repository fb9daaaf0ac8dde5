//! Playroom - terminal front end for the maze and tic-tac-toe cores.
//!
//! # Architecture
//!
//! - **Difficulty**: one shared [`Difficulty`] selects presets for both games
//! - **Config**: [`PlayroomConfig`] holds the presets, optionally from TOML
//! - **Terminal**: line-oriented sessions over any reader/writer pair
//!
//! The game logic lives in `playroom_maze` and `playroom_tictactoe`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod difficulty;
mod terminal;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{BotPresets, BotSettings, ConfigError, MazePresets, PlayroomConfig};
pub use difficulty::Difficulty;

// Crate-level exports - Terminal sessions
pub use terminal::{exhibition, parse_direction, play_maze, play_tictactoe, rng_from, simulate};
