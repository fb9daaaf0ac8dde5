//! Perfect-maze generation.
//!
//! # Architecture
//!
//! - **Grid**: [`Grid`], [`Cell`], [`Point`], [`Direction`]
//! - **Generation**: [`generate`] carves a spanning tree by randomized
//!   backtracking, then scatters collectibles over cells reachable from
//!   the start
//! - **Movement**: [`Maze::is_legal_move`] and [`Maze::step`]
//! - **Runs**: [`MazeRun`] tracks one player's position, moves and pickups
//!
//! Randomness is injected through [`rand::Rng`]; [`generate_seeded`]
//! replays a maze from a seed.
//!
//! # Example
//!
//! ```
//! use playroom_maze::{generate_seeded, Point};
//!
//! let maze = generate_seeded(9, 3, 7).unwrap();
//! assert!(maze.is_path(Point::new(0, 0)));
//! assert!(maze.is_path(Point::new(8, 8)));
//! assert_eq!(maze.collectibles().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod collectible;
mod error;
mod generator;
mod grid;
mod maze;
mod run;
mod settings;

// Crate-level exports - Grid primitives
pub use grid::{Cell, Direction, Grid, Point};

// Crate-level exports - Generation
pub use collectible::{reachable, Collectible, SYMBOLS};
pub use generator::{generate, generate_seeded, generate_with};
pub use maze::Maze;
pub use settings::{MazeSettings, MIN_SIZE};

// Crate-level exports - Runs
pub use error::{MazeError, RunError};
pub use run::{MazeRun, MoveOutcome, RunStatus};
