//! Bot move selection.
//!
//! Three strategies of increasing strength:
//!
//! - **Random**: any empty square, uniformly.
//! - **Heuristic**: win if a line is one mark short, else block, else random.
//! - **Optimal**: full minimax search; never loses.
//!
//! A [`Bot`] wraps a strategy with an accuracy: the chance it actually
//! follows the strategy instead of playing a random square.

mod heuristic;
mod minimax;
mod random;

pub use minimax::scores as minimax_scores;

use crate::error::BotError;
use crate::rules::evaluate;
use crate::{Board, Player, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Move selection strategy.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Strategy {
    /// Uniformly random empty square.
    Random,
    /// Local win/block checks, random otherwise.
    Heuristic,
    /// Minimax search.
    Optimal,
}

/// Chooses a square for `bot` to play.
///
/// Returns [`BotError::NoMoveAvailable`] when the board is already won or
/// full. Callers should check terminality first.
#[instrument(skip(rng))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    bot: Player,
    strategy: Strategy,
    rng: &mut R,
) -> Result<Position, BotError> {
    if evaluate(board).is_terminal() {
        return Err(BotError::NoMoveAvailable);
    }

    let choice = match strategy {
        Strategy::Random => random::pick(board, rng),
        Strategy::Heuristic => heuristic::pick(board, bot, rng),
        Strategy::Optimal => minimax::pick(board, bot),
    };

    let pos = choice.ok_or(BotError::NoMoveAvailable)?;
    debug!(%pos, %strategy, %bot, "Bot chose position");
    Ok(pos)
}

/// [`choose_move`] with a fresh [`StdRng`] seeded from `seed`, so the
/// same board, strategy and seed always give the same square.
#[instrument]
pub fn choose_move_seeded(
    board: &Board,
    bot: Player,
    strategy: Strategy,
    seed: u64,
) -> Result<Position, BotError> {
    let mut rng = StdRng::seed_from_u64(seed);
    choose_move(board, bot, strategy, &mut rng)
}

/// A computer opponent: a mark, a strategy, and how reliably it sticks
/// to that strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bot {
    mark: Player,
    strategy: Strategy,
    #[serde(deserialize_with = "deserialize_accuracy")]
    accuracy: f64,
}

/// Clamps to 0..=1; NaN counts as 0.
fn clamp_accuracy(accuracy: f64) -> f64 {
    if accuracy.is_nan() {
        0.0
    } else {
        accuracy.clamp(0.0, 1.0)
    }
}

fn deserialize_accuracy<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    f64::deserialize(deserializer).map(clamp_accuracy)
}

impl Bot {
    /// Creates a bot that always follows `strategy`.
    pub fn new(mark: Player, strategy: Strategy) -> Self {
        Self {
            mark,
            strategy,
            accuracy: 1.0,
        }
    }

    /// Sets the chance (clamped to 0..=1, NaN as 0) of following the
    /// strategy rather than playing randomly.
    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = clamp_accuracy(accuracy);
        self
    }

    /// The bot's mark.
    pub fn mark(&self) -> Player {
        self.mark
    }

    /// The bot's strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The bot's accuracy.
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Picks the bot's next square.
    #[instrument(skip(self, rng), fields(mark = %self.mark, strategy = %self.strategy))]
    pub fn choose_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rng: &mut R,
    ) -> Result<Position, BotError> {
        let strategy = if self.accuracy >= 1.0 || rng.gen_bool(self.accuracy) {
            self.strategy
        } else {
            Strategy::Random
        };
        choose_move(board, self.mark, strategy, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_picks_only_empty_squares() {
        let board: Board = "XOX|OX_|O__".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let pos = choose_move(&board, Player::X, Strategy::Random, &mut rng).unwrap();
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let mut rng = StdRng::seed_from_u64(0);
        let won: Board = "XXX|OO_|___".parse().unwrap();
        let full: Board = "XOX|OXX|OXO".parse().unwrap();
        for strategy in [Strategy::Random, Strategy::Heuristic, Strategy::Optimal] {
            assert_eq!(
                choose_move(&won, Player::O, strategy, &mut rng),
                Err(BotError::NoMoveAvailable)
            );
            assert_eq!(
                choose_move(&full, Player::O, strategy, &mut rng),
                Err(BotError::NoMoveAvailable)
            );
        }
    }

    #[test]
    fn test_strategy_parses_lowercase() {
        assert_eq!("optimal".parse::<Strategy>(), Ok(Strategy::Optimal));
        assert_eq!(Strategy::Heuristic.to_string(), "heuristic");
    }

    #[test]
    fn test_zero_accuracy_bot_plays_randomly_but_legally() {
        let bot = Bot::new(Player::O, Strategy::Optimal).with_accuracy(0.0);
        let board: Board = "XX_|___|___".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let pos = bot.choose_move(&board, &mut rng).unwrap();
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_accuracy_is_clamped() {
        let bot = Bot::new(Player::O, Strategy::Heuristic).with_accuracy(1.7);
        assert_eq!(bot.accuracy(), 1.0);
        let bot = bot.with_accuracy(-0.2);
        assert_eq!(bot.accuracy(), 0.0);
    }

    #[test]
    fn test_nan_accuracy_plays_randomly() {
        let bot = Bot::new(Player::O, Strategy::Heuristic).with_accuracy(f64::NAN);
        assert_eq!(bot.accuracy(), 0.0);

        let mut rng = StdRng::seed_from_u64(5);
        let pos = bot.choose_move(&Board::new(), &mut rng).unwrap();
        assert!(Board::new().is_empty(pos));
    }
}
