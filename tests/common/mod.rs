#![allow(dead_code)]

use std::collections::HashSet;

use gridwalk::grid::{Adjacency, SquareGrid, Vertex};
use gridwalk::traversal::LevelSets;

/// Returns a sorted copy of `vertices`, for comparisons that ignore order.
pub fn sorted(vertices: &[Vertex]) -> Vec<Vertex> {
    let mut vertices = vertices.to_vec();
    vertices.sort_unstable();
    vertices
}

/// The grid distance between two cells.
pub fn manhattan(grid: &SquareGrid, a: Vertex, b: Vertex) -> usize {
    let a = grid.coordinate(a).unwrap();
    let b = grid.coordinate(b).unwrap();
    (a.x.abs_diff(b.x) + a.y.abs_diff(b.y)) as usize
}

/// The adjacency of a grid, for tests that do not exercise construction errors.
pub fn grid_adjacency(size: usize) -> Adjacency {
    gridwalk::grid::build_neighbors(size).unwrap()
}

/// Asserts that every reached vertex appears exactly once across all levels,
/// and that `level_of` agrees with the level each vertex was listed under.
pub fn assert_partition(sets: &LevelSets, expected: usize) {
    let mut seen = HashSet::new();
    for (level, vertices) in sets.iter() {
        for &vertex in vertices {
            assert!(seen.insert(vertex), "vertex {vertex} listed twice");
            assert_eq!(sets.level_of(vertex), Some(level), "vertex {vertex} has the wrong level");
        }
    }
    assert_eq!(seen.len(), expected);
    assert_eq!(sets.vertex_count(), expected);
}
