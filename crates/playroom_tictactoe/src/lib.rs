//! Tic-tac-toe rules and bots.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`Position`]
//! - **Rules**: [`evaluate`] finds the first completed line or a draw
//! - **Bots**: [`choose_move`] with [`Strategy::Random`],
//!   [`Strategy::Heuristic`] or [`Strategy::Optimal`] (minimax)
//! - **Rounds**: [`Round`] enforces turn order and absorbs terminal states
//!
//! Everything here is a pure, synchronous computation over plain values.
//! Randomness is injected through [`rand::Rng`] so seeded runs replay
//! exactly.
//!
//! # Example
//!
//! ```
//! use playroom_tictactoe::{choose_move, Board, Player, Position, Strategy};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let board: Board = "XX_|O__|___".parse().unwrap();
//! let mut rng = StdRng::seed_from_u64(1);
//! let pos = choose_move(&board, Player::O, Strategy::Heuristic, &mut rng).unwrap();
//! assert_eq!(pos, Position::TopRight);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod bot;
mod error;
mod position;
mod round;
mod rules;
mod scoreboard;
mod types;

// Crate-level exports - Board types
pub use position::Position;
pub use types::{Board, ParseBoardError, Player, Square};

// Crate-level exports - Rules
pub use rules::{
    check_winner, completing_move, evaluate, is_draw, is_full, winning_line, Evaluation, Line,
    LINES,
};

// Crate-level exports - Bots
pub use bot::{choose_move, choose_move_seeded, minimax_scores, Bot, Strategy};

// Crate-level exports - Rounds
pub use action::Move;
pub use error::{BotError, MoveError};
pub use round::{Outcome, Round, RoundStatus};
pub use scoreboard::Scoreboard;
