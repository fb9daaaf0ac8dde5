//! Maze error types.

use super::{Direction, Point, RunStatus};

/// Error from maze generation or movement.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MazeError {
    /// Size is even or below the minimum.
    #[display("Invalid maze size {}: must be odd and at least 5", size)]
    InvalidConfiguration {
        /// The rejected size.
        size: usize,
    },

    /// The destination is a wall or off the grid.
    #[display("Move {} from {} is blocked", direction, from)]
    Blocked {
        /// Where the move started.
        from: Point,
        /// Which way it tried to go.
        direction: Direction,
    },

    /// A deserialized grid whose cell count is not `size * size`.
    #[display("Grid of size {} cannot hold {} cells", size, cells)]
    MalformedGrid {
        /// Declared side length.
        size: usize,
        /// Cells actually present.
        cells: usize,
    },
}

impl std::error::Error for MazeError {}

/// Error from driving a [`crate::MazeRun`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RunError {
    /// Moves are only accepted while playing.
    #[display("Run is not in play (status: {})", _0)]
    NotPlaying(RunStatus),

    /// The maze rejected the move or could not be generated.
    #[display("{}", _0)]
    Maze(MazeError),

    /// A deserialized run tracks a different number of collectibles than
    /// its maze holds.
    #[display("Run tracks {} collectibles but the maze has {}", found, expected)]
    MismatchedProgress {
        /// Collectibles in the maze.
        expected: usize,
        /// Entries in the run's progress.
        found: usize,
    },
}

impl std::error::Error for RunError {}

impl From<MazeError> for RunError {
    fn from(err: MazeError) -> Self {
        Self::Maze(err)
    }
}
