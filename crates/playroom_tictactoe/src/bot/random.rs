//! Uniformly random move selection.

use crate::{Board, Position};
use rand::seq::SliceRandom;
use rand::Rng;

/// Picks a uniformly random empty square, or `None` on a full board.
pub fn pick<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    Position::valid_moves(board).choose(rng).copied()
}
