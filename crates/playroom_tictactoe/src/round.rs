//! Round state machine.
//!
//! `Empty → InProgress → Won | Draw`. X always opens. Terminal states
//! absorb further moves until [`Round::reset`].

use super::action::Move;
use super::bot::Bot;
use super::error::{BotError, MoveError};
use super::rules::{evaluate, Line};
use super::{Board, Player, Position, Square};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    /// No marks yet.
    Empty,
    /// At least one mark, no result.
    InProgress,
    /// A player completed a line.
    Won {
        /// The winner.
        winner: Player,
        /// The completed line.
        line: Line,
    },
    /// Full board, no line.
    Draw,
}

impl RoundStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RoundStatus::Won { .. } | RoundStatus::Draw)
    }

    /// The result, once the round is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            RoundStatus::Won { winner, .. } => Some(Outcome::Winner(*winner)),
            RoundStatus::Draw => Some(Outcome::Draw),
            RoundStatus::Empty | RoundStatus::InProgress => None,
        }
    }
}

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the round.
    Winner(Player),
    /// Round ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// One round of tic-tac-toe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    board: Board,
    to_move: Player,
    status: RoundStatus,
    history: Vec<Move>,
}

impl Round {
    /// Creates an empty round with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: RoundStatus::Empty,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the round status.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns valid positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }

    /// Applies a move after checking turn order, occupancy and terminality.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn play(&mut self, action: Move) -> Result<RoundStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if action.player != self.to_move {
            return Err(MoveError::WrongPlayer(action.player));
        }
        if !self.board.is_empty(action.position) {
            return Err(MoveError::SquareOccupied(action.position));
        }

        self.board.set(action.position, Square::Occupied(action.player));
        self.history.push(action);

        let eval = evaluate(&self.board);
        self.status = match (eval.winner, eval.line) {
            (Some(winner), Some(line)) => RoundStatus::Won { winner, line },
            _ if eval.is_draw => RoundStatus::Draw,
            _ => RoundStatus::InProgress,
        };
        if let Some(outcome) = self.status.outcome() {
            info!(%outcome, moves = self.history.len(), "Round finished");
        } else {
            self.to_move = self.to_move.opponent();
        }

        Ok(self.status)
    }

    /// Plays `position` for whoever is to move.
    pub fn play_at(&mut self, position: Position) -> Result<RoundStatus, MoveError> {
        self.play(Move::new(self.to_move, position))
    }

    /// Asks `bot` for a move and applies it.
    #[instrument(skip(self, bot, rng))]
    pub fn play_bot<R: Rng + ?Sized>(
        &mut self,
        bot: &Bot,
        rng: &mut R,
    ) -> Result<Move, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if bot.mark() != self.to_move {
            return Err(MoveError::WrongPlayer(bot.mark()));
        }
        let position = match bot.choose_move(&self.board, rng) {
            Ok(position) => position,
            Err(BotError::NoMoveAvailable) => {
                // A non-terminal status with no move means the status is stale.
                debug_assert!(false, "bot found no move on a live board");
                return Err(MoveError::GameOver);
            }
        };
        let action = Move::new(bot.mark(), position);
        self.play(action)?;
        Ok(action)
    }

    /// Replays moves from an empty round.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut round = Self::new();
        for action in moves {
            round.play(*action)?;
        }
        Ok(round)
    }

    /// Clears the board for a new round.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
