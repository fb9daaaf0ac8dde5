//! Collectible placement.

use super::grid::{Grid, Point};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// Symbols handed out to collectibles in rotation.
pub const SYMBOLS: [char; 5] = ['⭐', '💎', '🏆', '🎁', '🍕'];

/// An item lying on a path cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Collectible {
    /// Where it lies.
    pub position: Point,
    /// What it looks like.
    pub symbol: char,
}

/// Breadth-first flood over path cells from `origin`.
///
/// Returns an empty set when `origin` itself is not a path cell.
pub fn reachable(grid: &Grid, origin: Point) -> HashSet<Point> {
    let mut seen = HashSet::new();
    if !grid.is_path(origin) {
        return seen;
    }

    let mut queue = VecDeque::from([origin]);
    seen.insert(origin);
    while let Some(p) = queue.pop_front() {
        for q in grid.neighbors(p) {
            if grid.is_path(q) && seen.insert(q) {
                queue.push_back(q);
            }
        }
    }
    seen
}

/// Picks up to `count` distinct reachable cells other than `start` and
/// `exit`, in random order, and labels them from [`SYMBOLS`].
pub(crate) fn place_collectibles<R: Rng + ?Sized>(
    grid: &Grid,
    start: Point,
    exit: Point,
    count: usize,
    rng: &mut R,
) -> Vec<Collectible> {
    let reachable = reachable(grid, start);
    // Row-major order keeps the pre-shuffle order independent of hashing
    let mut candidates: Vec<Point> = grid
        .points()
        .filter(|p| *p != start && *p != exit && reachable.contains(p))
        .collect();
    candidates.shuffle(rng);

    candidates
        .into_iter()
        .take(count)
        .zip(SYMBOLS.iter().cycle())
        .map(|(position, &symbol)| Collectible { position, symbol })
        .collect()
}
