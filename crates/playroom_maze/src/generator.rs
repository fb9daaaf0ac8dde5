//! Randomized backtracking maze generation.
//!
//! Cells at even coordinates form the lattice of rooms; odd coordinates
//! between two rooms are connectors. Carving starts at (0, 0), shuffles
//! the four directions at every room, and opens a connector whenever the
//! room two steps away is still walled. The walk uses an explicit stack,
//! so large grids never recurse, but rooms are visited in exactly the
//! order the recursive formulation would visit them.

use super::collectible::place_collectibles;
use super::error::MazeError;
use super::grid::{Cell, Direction, Grid, Point};
use super::maze::Maze;
use super::settings::MazeSettings;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

/// Generates a maze of `size × size` with up to `collectibles` items.
///
/// `size` must be odd and at least [`crate::MIN_SIZE`].
#[instrument(skip(rng))]
pub fn generate<R: Rng + ?Sized>(
    size: usize,
    collectibles: usize,
    rng: &mut R,
) -> Result<Maze, MazeError> {
    generate_with(MazeSettings::new(size, collectibles), rng)
}

/// Generates a maze from a fixed seed. The same seed yields the same
/// maze on every run of the same build.
#[instrument]
pub fn generate_seeded(size: usize, collectibles: usize, seed: u64) -> Result<Maze, MazeError> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(size, collectibles, &mut rng)
}

/// Generates a maze from validated settings.
#[instrument(skip(rng))]
pub fn generate_with<R: Rng + ?Sized>(
    settings: MazeSettings,
    rng: &mut R,
) -> Result<Maze, MazeError> {
    settings.validate()?;

    let size = *settings.size();
    let start = Point::new(0, 0);
    let exit = Point::new(size - 1, size - 1);

    let mut grid = Grid::walls(size);
    let passages = carve(&mut grid, start, rng);
    debug!(passages, "Carved maze");

    let placed = place_collectibles(&grid, start, exit, *settings.collectibles(), rng);
    if placed.len() < *settings.collectibles() {
        debug!(
            requested = settings.collectibles(),
            placed = placed.len(),
            "Fewer reachable cells than requested collectibles"
        );
    }

    info!(size, collectibles = placed.len(), "Generated maze");
    Ok(Maze::from_parts(grid, start, exit, placed, passages))
}

/// A room on the carving stack and the directions it still has to try.
struct Frame {
    room: Point,
    directions: [Direction; 4],
    next: usize,
}

impl Frame {
    fn open<R: Rng + ?Sized>(room: Point, rng: &mut R) -> Self {
        let mut directions = Direction::ALL;
        directions.shuffle(rng);
        Self {
            room,
            directions,
            next: 0,
        }
    }
}

/// Carves the spanning tree rooted at `origin` and returns the number of
/// connectors opened.
fn carve<R: Rng + ?Sized>(grid: &mut Grid, origin: Point, rng: &mut R) -> usize {
    let mut passages = 0;
    grid.set(origin, Cell::Path);
    let mut stack = vec![Frame::open(origin, rng)];

    while let Some(frame) = stack.last_mut() {
        let Some(&dir) = frame.directions.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;
        let room = frame.room;

        let Some(neighbor) = grid.offset(room, dir, 2) else {
            continue;
        };
        if grid.get(neighbor) != Some(Cell::Wall) {
            continue;
        }
        if let Some(connector) = grid.offset(room, dir, 1) {
            grid.set(connector, Cell::Path);
            grid.set(neighbor, Cell::Path);
            passages += 1;
            stack.push(Frame::open(neighbor, rng));
        }
    }

    passages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_room_is_carved_and_no_odd_corner_is() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut grid = Grid::walls(11);
        let passages = carve(&mut grid, Point::new(0, 0), &mut rng);

        for p in grid.points() {
            match (p.x % 2, p.y % 2) {
                (0, 0) => assert!(grid.is_path(p), "room {} left walled", p),
                (1, 1) => assert!(!grid.is_path(p), "pillar {} carved", p),
                _ => {}
            }
        }
        // 6 × 6 rooms joined by a tree
        assert_eq!(passages, 36 - 1);
    }

    #[test]
    fn test_generate_rejects_bad_sizes() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate(4, 1, &mut rng).unwrap_err(),
            MazeError::InvalidConfiguration { size: 4 }
        );
        assert_eq!(
            generate(3, 1, &mut rng).unwrap_err(),
            MazeError::InvalidConfiguration { size: 3 }
        );
    }
}
