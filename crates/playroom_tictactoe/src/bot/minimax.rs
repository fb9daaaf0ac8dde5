//! Exhaustive minimax search.
//!
//! Terminal positions score `10 - depth` when the bot wins and
//! `depth - 10` when the opponent wins, so faster wins and slower
//! losses are preferred. Draws score zero.

use crate::rules::win::find_line;
use crate::{Board, Player, Position, Square};

const WIN_SCORE: i32 = 10;

/// Picks the best square for `bot`. Ties go to the lowest index.
pub fn pick(board: &Board, bot: Player) -> Option<Position> {
    let mut best: Option<(Position, i32)> = None;
    for pos in Position::valid_moves(board) {
        let score = minimax(board.with_mark(pos, bot), bot, 0, false);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }
    best.map(|(pos, _)| pos)
}

/// Scores every square the bot could play, in index order.
pub fn scores(board: &Board, bot: Player) -> Vec<(Position, i32)> {
    Position::valid_moves(board)
        .into_iter()
        .map(|pos| (pos, minimax(board.with_mark(pos, bot), bot, 0, false)))
        .collect()
}

fn minimax(board: Board, bot: Player, depth: i32, maximizing: bool) -> i32 {
    if let Some((winner, _)) = find_line(&board) {
        return if winner == bot {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }
    if board.squares().iter().all(|s| *s != Square::Empty) {
        return 0;
    }

    let mover = if maximizing { bot } else { bot.opponent() };
    let children = Position::ALL
        .into_iter()
        .filter(|pos| board.is_empty(*pos))
        .map(|pos| minimax(board.with_mark(pos, mover), bot, depth + 1, !maximizing));

    if maximizing {
        children.max().unwrap_or(0)
    } else {
        children.min().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_immediate_win_over_block() {
        // O to move can win at 5 or must otherwise block at 2
        let board: Board = "XX_|OO_|X__".parse().unwrap();
        assert_eq!(pick(&board, Player::O), Some(Position::MiddleRight));
    }

    #[test]
    fn test_blocks_when_no_win() {
        let board: Board = "XX_|O__|___".parse().unwrap();
        assert_eq!(pick(&board, Player::O), Some(Position::TopRight));
    }

    #[test]
    fn test_full_board_has_no_pick() {
        let board: Board = "XOX|OXX|OXO".parse().unwrap();
        assert_eq!(pick(&board, Player::O), None);
    }

    #[test]
    fn test_empty_board_scores_are_all_draws() {
        let scores = scores(&Board::new(), Player::X);
        assert_eq!(scores.len(), 9);
        assert!(scores.iter().all(|(_, s)| *s == 0));
    }
}
