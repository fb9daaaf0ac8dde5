//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so bots and rounds can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, completing_move, winning_line, Line, LINES};

use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Verdict for a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Owner of the first completed line.
    pub winner: Option<Player>,
    /// The completed line itself.
    pub line: Option<Line>,
    /// Full board without a winner.
    pub is_draw: bool,
}

impl Evaluation {
    /// True once the game can take no further moves.
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }
}

/// Evaluates a board: first completed line (rows, then columns, then
/// diagonals), otherwise draw if the board is full.
#[instrument]
pub fn evaluate(board: &Board) -> Evaluation {
    match winning_line(board) {
        Some((player, line)) => Evaluation {
            winner: Some(player),
            line: Some(line),
            is_draw: false,
        },
        None => Evaluation {
            winner: None,
            line: None,
            is_draw: is_full(board),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_in_progress() {
        let eval = evaluate(&"X__|_O_|___".parse().unwrap());
        assert_eq!(eval.winner, None);
        assert!(!eval.is_draw);
        assert!(!eval.is_terminal());
    }

    #[test]
    fn test_evaluate_win_on_full_board_is_not_draw() {
        let eval = evaluate(&"XOX|OXO|OXX".parse().unwrap());
        assert_eq!(eval.winner, Some(Player::X));
        assert_eq!(eval.line, Some(LINES[6]));
        assert!(!eval.is_draw);
    }
}
