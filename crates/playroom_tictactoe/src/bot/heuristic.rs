//! Win-or-block pattern bot.

use super::random;
use crate::rules::completing_move;
use crate::{Board, Player, Position};
use rand::Rng;
use tracing::debug;

/// Completes a line for `bot` if it can, otherwise blocks the opponent's
/// open line, otherwise plays at random.
pub fn pick<R: Rng + ?Sized>(board: &Board, bot: Player, rng: &mut R) -> Option<Position> {
    if let Some(pos) = completing_move(board, bot) {
        debug!(%pos, "Completing own line");
        return Some(pos);
    }
    if let Some(pos) = completing_move(board, bot.opponent()) {
        debug!(%pos, "Blocking opponent line");
        return Some(pos);
    }
    random::pick(board, rng)
}
