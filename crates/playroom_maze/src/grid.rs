//! Grid primitives: cells, points and directions.

use super::error::MazeError;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// One square of the maze grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Impassable.
    Wall,
    /// Walkable.
    Path,
}

/// Grid coordinate. `x` grows rightward, `y` downward.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new,
)]
pub struct Point {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four axis directions.
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
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last column.
    Right,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
}

impl Direction {
    /// All directions, clockwise from up.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit step `(dx, dy)`.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Direction for a unit step, if `(dx, dy)` is one.
    pub fn from_delta(dx: isize, dy: isize) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.delta() == (dx, dy))
    }
}

/// Square grid of cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of [`Grid`].
#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = MazeError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        if raw.size.checked_mul(raw.size) != Some(raw.cells.len()) {
            return Err(MazeError::MalformedGrid {
                size: raw.size,
                cells: raw.cells.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Grid {
    /// A `size × size` grid of walls.
    pub fn walls(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Wall; size * size],
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at `p`, or `None` out of bounds.
    pub fn get(&self, p: Point) -> Option<Cell> {
        self.contains(p).then(|| self.cells[p.y * self.size + p.x])
    }

    /// Overwrites the cell at `p`. Out-of-bounds writes are ignored.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if self.contains(p) {
            self.cells[p.y * self.size + p.x] = cell;
        }
    }

    /// True if `p` lies inside the grid.
    pub fn contains(&self, p: Point) -> bool {
        p.x < self.size && p.y < self.size
    }

    /// True if `p` is in bounds and walkable.
    pub fn is_path(&self, p: Point) -> bool {
        self.get(p) == Some(Cell::Path)
    }

    /// `p` moved `steps` cells in `dir`, if that stays in bounds.
    pub fn offset(&self, p: Point, dir: Direction, steps: usize) -> Option<Point> {
        let (dx, dy) = dir.delta();
        let x = p.x.checked_add_signed(dx * steps as isize)?;
        let y = p.y.checked_add_signed(dy * steps as isize)?;
        let q = Point::new(x, y);
        self.contains(q).then_some(q)
    }

    /// The in-bounds 4-neighbours of `p`, in [`Direction::ALL`] order.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.offset(p, dir, 1))
    }

    /// Every point, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.size).flat_map(move |y| (0..self.size).map(move |x| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_respects_bounds() {
        let grid = Grid::walls(5);
        let origin = Point::new(0, 0);
        assert_eq!(grid.offset(origin, Direction::Left, 1), None);
        assert_eq!(grid.offset(origin, Direction::Up, 2), None);
        assert_eq!(grid.offset(origin, Direction::Right, 2), Some(Point::new(2, 0)));
        assert_eq!(grid.offset(Point::new(4, 4), Direction::Down, 1), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::walls(5);
        grid.set(Point::new(1, 2), Cell::Path);
        assert!(grid.is_path(Point::new(1, 2)));
        assert_eq!(grid.get(Point::new(2, 1)), Some(Cell::Wall));
        assert_eq!(grid.get(Point::new(5, 0)), None);
    }

    #[test]
    fn test_direction_from_delta() {
        assert_eq!(Direction::from_delta(0, -1), Some(Direction::Up));
        assert_eq!(Direction::from_delta(1, 1), None);
        assert_eq!("left".parse::<Direction>(), Ok(Direction::Left));
    }

    #[test]
    fn test_cell_count_must_match_size() {
        let short = RawGrid {
            size: 5,
            cells: vec![Cell::Path; 24],
        };
        assert_eq!(
            Grid::try_from(short),
            Err(MazeError::MalformedGrid { size: 5, cells: 24 })
        );

        let exact = RawGrid {
            size: 5,
            cells: vec![Cell::Path; 25],
        };
        let grid = Grid::try_from(exact).unwrap();
        assert!(grid.is_path(Point::new(4, 4)));
    }
}
