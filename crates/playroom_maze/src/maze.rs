//! The generated maze and its movement rules.

use super::collectible::{reachable, Collectible};
use super::error::MazeError;
use super::grid::{Cell, Direction, Grid, Point};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::instrument;

/// A perfect maze: start in the top-left corner, exit in the bottom-right,
/// exactly one route between any two path cells.
///
/// Immutable once generated. Progress through it lives in
/// [`crate::MazeRun`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    grid: Grid,
    start: Point,
    exit: Point,
    collectibles: Vec<Collectible>,
    passages: usize,
}

impl Maze {
    pub(crate) fn from_parts(
        grid: Grid,
        start: Point,
        exit: Point,
        collectibles: Vec<Collectible>,
        passages: usize,
    ) -> Self {
        Self {
            grid,
            start,
            exit,
            collectibles,
            passages,
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell at `p`, or `None` out of bounds.
    pub fn cell(&self, p: Point) -> Option<Cell> {
        self.grid.get(p)
    }

    /// True if `p` is in bounds and walkable.
    pub fn is_path(&self, p: Point) -> bool {
        self.grid.is_path(p)
    }

    /// Entry point, always (0, 0).
    pub fn start(&self) -> Point {
        self.start
    }

    /// Goal, always (size - 1, size - 1).
    pub fn exit(&self) -> Point {
        self.exit
    }

    /// Placed collectibles, in placement order.
    pub fn collectibles(&self) -> &[Collectible] {
        &self.collectibles
    }

    /// Connectors opened while carving: one per edge of the spanning tree.
    pub fn passages(&self) -> usize {
        self.passages
    }

    /// Path cells reachable from `p`.
    #[instrument(skip(self))]
    pub fn reachable_from(&self, p: Point) -> HashSet<Point> {
        reachable(&self.grid, p)
    }

    /// True if stepping one cell in `direction` from `from` lands on a
    /// path cell inside the grid.
    pub fn is_legal_move(&self, from: Point, direction: Direction) -> bool {
        self.grid
            .offset(from, direction, 1)
            .is_some_and(|to| self.grid.is_path(to))
    }

    /// Like [`Maze::is_legal_move`] for a raw delta. Anything other than a
    /// single orthogonal step is illegal.
    pub fn is_legal_delta(&self, from: Point, dx: isize, dy: isize) -> bool {
        Direction::from_delta(dx, dy).is_some_and(|dir| self.is_legal_move(from, dir))
    }

    /// The cell one step from `from`, or [`MazeError::Blocked`].
    #[instrument(skip(self))]
    pub fn step(&self, from: Point, direction: Direction) -> Result<Point, MazeError> {
        self.grid
            .offset(from, direction, 1)
            .filter(|to| self.grid.is_path(*to))
            .ok_or(MazeError::Blocked { from, direction })
    }

    /// Text picture of the maze, two columns per cell. `player` is drawn
    /// as `@`; collectibles whose flag in `collected` is set are hidden.
    pub fn render(&self, player: Option<Point>, collected: &[bool]) -> String {
        let mut out = String::new();
        for p in self.grid.points() {
            if p.x == 0 && p.y > 0 {
                out.push('\n');
            }
            let item = self
                .collectibles
                .iter()
                .enumerate()
                .find(|(i, c)| c.position == p && !collected.get(*i).copied().unwrap_or(false));
            let glyph = if Some(p) == player {
                "@ ".to_string()
            } else if p == self.start {
                "S ".to_string()
            } else if p == self.exit {
                "E ".to_string()
            } else if let Some((_, c)) = item {
                // Emoji are double width on their own
                c.symbol.to_string()
            } else if self.grid.is_path(p) {
                "  ".to_string()
            } else {
                "██".to_string()
            };
            out.push_str(&glyph);
        }
        out
    }
}

impl std::fmt::Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(None, &[]))
    }
}
