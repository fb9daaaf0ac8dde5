//! A player's traversal of one maze.

use super::error::RunError;
use super::generator::generate_with;
use super::grid::{Direction, Point};
use super::maze::Maze;
use super::settings::MazeSettings;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum RunStatus {
    /// Maze shown, waiting for the player to start.
    Ready,
    /// Accepting moves.
    Playing,
    /// Player reached the exit.
    Escaped,
}

/// What a successful move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Moved onto an empty cell.
    Moved,
    /// Moved and picked up a collectible.
    Collected(char),
    /// Moved onto the exit.
    Escaped,
}

/// One playthrough: player position, move count and collected items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRun")]
pub struct MazeRun {
    maze: Maze,
    settings: MazeSettings,
    player: Point,
    moves: u32,
    collected: Vec<bool>,
    status: RunStatus,
}

/// Unchecked wire form of [`MazeRun`].
#[derive(Deserialize)]
struct RawRun {
    maze: Maze,
    settings: MazeSettings,
    player: Point,
    moves: u32,
    collected: Vec<bool>,
    status: RunStatus,
}

impl TryFrom<RawRun> for MazeRun {
    type Error = RunError;

    fn try_from(raw: RawRun) -> Result<Self, Self::Error> {
        let expected = raw.maze.collectibles().len();
        if raw.collected.len() != expected {
            return Err(RunError::MismatchedProgress {
                expected,
                found: raw.collected.len(),
            });
        }
        Ok(Self {
            maze: raw.maze,
            settings: raw.settings,
            player: raw.player,
            moves: raw.moves,
            collected: raw.collected,
            status: raw.status,
        })
    }
}

impl MazeRun {
    /// Generates a fresh maze and places the player on its start.
    #[instrument(skip(rng))]
    pub fn new<R: Rng + ?Sized>(settings: MazeSettings, rng: &mut R) -> Result<Self, RunError> {
        let maze = generate_with(settings, rng)?;
        Ok(Self::with_maze(maze, settings))
    }

    /// Wraps an already generated maze.
    pub fn with_maze(maze: Maze, settings: MazeSettings) -> Self {
        Self {
            player: maze.start(),
            collected: vec![false; maze.collectibles().len()],
            maze,
            settings,
            moves: 0,
            status: RunStatus::Ready,
        }
    }

    /// The maze being run.
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Current player position.
    pub fn player(&self) -> Point {
        self.player
    }

    /// Successful moves so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Current status.
    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// Number of collectibles picked up.
    pub fn collected(&self) -> usize {
        self.collected.iter().filter(|c| **c).count()
    }

    /// Number of collectibles still lying in the maze.
    pub fn remaining(&self) -> usize {
        self.collected.len() - self.collected()
    }

    /// Starts accepting moves. Has no effect once escaped.
    pub fn start(&mut self) {
        if self.status == RunStatus::Ready {
            self.status = RunStatus::Playing;
        }
    }

    /// Moves the player one cell.
    ///
    /// Blocked moves leave the run untouched and are not counted.
    #[instrument(skip(self), fields(player = %self.player, moves = self.moves))]
    pub fn move_player(&mut self, direction: Direction) -> Result<MoveOutcome, RunError> {
        if self.status != RunStatus::Playing {
            return Err(RunError::NotPlaying(self.status));
        }

        let to = self.maze.step(self.player, direction)?;
        self.player = to;
        self.moves += 1;

        let mut outcome = MoveOutcome::Moved;
        let hit = self
            .maze
            .collectibles()
            .iter()
            .enumerate()
            .find(|(i, c)| c.position == to && !self.collected[*i])
            .map(|(i, c)| (i, c.symbol));
        if let Some((index, symbol)) = hit {
            self.collected[index] = true;
            debug!(%symbol, collected = self.collected(), "Picked up collectible");
            outcome = MoveOutcome::Collected(symbol);
        }

        if to == self.maze.exit() {
            self.status = RunStatus::Escaped;
            info!(moves = self.moves, collected = self.collected(), "Escaped maze");
            outcome = MoveOutcome::Escaped;
        }

        Ok(outcome)
    }

    /// Generates a new maze with the same settings and resets progress.
    #[instrument(skip(self, rng))]
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), RunError> {
        *self = Self::new(self.settings, rng)?;
        Ok(())
    }
}

impl std::fmt::Display for MazeRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.maze.render(Some(self.player), &self.collected))
    }
}
