//! Tests for maze topology and collectible placement.

use playroom_maze::{generate, generate_seeded, Maze, MazeError, Point};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn path_cells(maze: &Maze) -> Vec<Point> {
    maze.grid().points().filter(|p| maze.is_path(*p)).collect()
}

/// Unordered pairs of orthogonally adjacent path cells.
fn adjacent_path_pairs(maze: &Maze) -> usize {
    path_cells(maze)
        .into_iter()
        .map(|p| {
            let right = Point::new(p.x + 1, p.y);
            let down = Point::new(p.x, p.y + 1);
            usize::from(maze.is_path(right)) + usize::from(maze.is_path(down))
        })
        .sum()
}

#[test]
fn test_mazes_are_spanning_trees() {
    for size in [5, 7, 9, 13, 17, 21] {
        for seed in 0..8 {
            let maze = generate_seeded(size, 0, seed).unwrap();
            let paths = path_cells(&maze);

            // Connected: every path cell reachable from the start
            let reachable = maze.reachable_from(maze.start());
            assert_eq!(reachable.len(), paths.len(), "size {} seed {}", size, seed);

            // Acyclic: a connected graph with V - 1 edges is a tree
            assert_eq!(adjacent_path_pairs(&maze), paths.len() - 1);

            // One passage per non-root room
            let rooms = (size + 1) / 2;
            assert_eq!(maze.passages(), rooms * rooms - 1);
            assert_eq!(paths.len(), rooms * rooms + maze.passages());
        }
    }
}

#[test]
fn test_start_and_exit_are_open_corners() {
    let maze = generate_seeded(5, 2, 1).unwrap();
    assert_eq!(maze.start(), Point::new(0, 0));
    assert_eq!(maze.exit(), Point::new(4, 4));
    assert!(maze.is_path(Point::new(0, 0)));
    assert!(maze.is_path(Point::new(4, 4)));
}

#[test]
fn test_same_seed_same_maze() {
    let a = generate_seeded(5, 2, 1).unwrap();
    let b = generate_seeded(5, 2, 1).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_string(), b.to_string());

    let big_a = generate_seeded(31, 7, 99).unwrap();
    let big_b = generate_seeded(31, 7, 99).unwrap();
    assert_eq!(big_a, big_b);
}

#[test]
fn test_different_seeds_usually_differ() {
    let mazes: HashSet<String> = (0..10)
        .map(|seed| generate_seeded(13, 0, seed).unwrap().to_string())
        .collect();
    assert!(mazes.len() > 1);
}

#[test]
fn test_collectibles_are_valid() {
    for seed in 0..20 {
        let maze = generate_seeded(9, 5, seed).unwrap();
        let reachable = maze.reachable_from(maze.start());
        let mut seen = HashSet::new();

        assert_eq!(maze.collectibles().len(), 5);
        for item in maze.collectibles() {
            assert!(maze.is_path(item.position));
            assert!(reachable.contains(&item.position));
            assert_ne!(item.position, maze.start());
            assert_ne!(item.position, maze.exit());
            assert!(seen.insert(item.position), "duplicate {}", item.position);
        }
    }
}

#[test]
fn test_collectibles_capped_by_available_cells() {
    let maze = generate_seeded(5, 1000, 3).unwrap();
    // 9 rooms + 8 passages, minus start and exit
    assert_eq!(maze.collectibles().len(), 17 - 2);
}

#[test]
fn test_zero_collectibles() {
    let maze = generate_seeded(7, 0, 3).unwrap();
    assert!(maze.collectibles().is_empty());
}

#[test]
fn test_invalid_sizes_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    for size in [0, 2, 3, 4, 8, 16] {
        assert_eq!(
            generate(size, 0, &mut rng),
            Err(MazeError::InvalidConfiguration { size })
        );
    }
}

#[test]
fn test_serializes_to_json() {
    let maze = generate_seeded(5, 1, 4).unwrap();
    let json = serde_json::to_string(&maze).unwrap();
    let back: Maze = serde_json::from_str(&json).unwrap();
    assert_eq!(back, maze);
}

#[test]
fn test_json_with_wrong_cell_count_rejected() {
    let maze = generate_seeded(5, 1, 4).unwrap();
    let mut value = serde_json::to_value(&maze).unwrap();
    value["grid"]["cells"].as_array_mut().unwrap().pop();

    let err = serde_json::from_value::<Maze>(value).unwrap_err();
    assert!(err.to_string().contains("cannot hold 24 cells"), "{}", err);

    let empty = serde_json::json!({
        "grid": { "size": 5, "cells": [] },
        "start": { "x": 0, "y": 0 },
        "exit": { "x": 4, "y": 4 },
        "collectibles": [],
        "passages": 0
    });
    assert!(serde_json::from_value::<Maze>(empty).is_err());
}
