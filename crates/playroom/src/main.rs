//! Playroom - unified CLI.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use playroom::{
    exhibition, play_maze, play_tictactoe, rng_from, simulate, Cli, Command, Difficulty,
    PlayroomConfig,
};
use playroom_maze::{generate_with, MazeRun, MazeSettings};
use playroom_tictactoe::{Bot, Player, Strategy};
use std::io::{self, Write};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = PlayroomConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Maze {
            difficulty,
            seed,
            size,
            collectibles,
            json,
            play,
        } => run_maze(&config, difficulty, seed, size, collectibles, json, play),
        Command::Tictactoe {
            difficulty,
            seed,
            play,
        } => run_tictactoe(&config, difficulty, seed, play),
        Command::Simulate {
            difficulty,
            games,
            seed,
        } => run_simulate(&config, difficulty, games, seed),
    }
}

/// Generate, print, and optionally walk a maze
#[instrument(skip(config))]
fn run_maze(
    config: &PlayroomConfig,
    difficulty: Difficulty,
    seed: Option<u64>,
    size: Option<usize>,
    collectibles: Option<usize>,
    json: bool,
    play: bool,
) -> Result<()> {
    let preset = config.maze_for(difficulty);
    let settings = MazeSettings::new(
        size.unwrap_or(*preset.size()),
        collectibles.unwrap_or(*preset.collectibles()),
    );
    let mut rng = rng_from(seed);
    let maze = generate_with(settings, &mut rng)?;
    info!(%difficulty, size = maze.size(), "Maze ready");

    let mut stdout = io::stdout().lock();
    if json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&maze)?)?;
        return Ok(());
    }
    if !play {
        writeln!(stdout, "{}", maze)?;
        return Ok(());
    }

    let mut run = MazeRun::with_maze(maze, settings);
    play_maze(&mut run, io::stdin().lock(), &mut stdout, &mut rng)?;
    Ok(())
}

/// Play against the bot, or watch two bots play each other
#[instrument(skip(config))]
fn run_tictactoe(
    config: &PlayroomConfig,
    difficulty: Difficulty,
    seed: Option<u64>,
    play: bool,
) -> Result<()> {
    let settings = config.bot_for(difficulty);
    let mut rng = rng_from(seed);
    let mut stdout = io::stdout().lock();

    if play {
        let bot = settings.bot(Player::O);
        let scores = play_tictactoe(&bot, io::stdin().lock(), &mut stdout, &mut rng)?;
        writeln!(stdout, "Final score  {}", scores)?;
    } else {
        let x = Bot::new(Player::X, Strategy::Random);
        exhibition(&x, &settings.bot(Player::O), &mut stdout, &mut rng)?;
    }
    Ok(())
}

/// Run a batch of bot-vs-random games and print the tally
#[instrument(skip(config))]
fn run_simulate(
    config: &PlayroomConfig,
    difficulty: Difficulty,
    games: u32,
    seed: Option<u64>,
) -> Result<()> {
    let bot = config.bot_for(difficulty).bot(Player::O);
    let mut rng = rng_from(seed);
    let scores = simulate(&bot, games, &mut rng)?;
    println!("{} bot over {} games  {}", difficulty, games, scores);
    Ok(())
}
