//! Line-oriented front ends over stdin/stdout.
//!
//! Each session takes any `BufRead`/`Write` pair so it can be driven
//! from tests as easily as from a terminal.

mod maze;
mod tictactoe;

pub use maze::{parse_direction, play_maze};
pub use tictactoe::{exhibition, play_tictactoe, simulate};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seeded RNG when a seed is given, entropy-seeded otherwise.
pub fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
