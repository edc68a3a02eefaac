//! The implicit square grid graph.
//!
//! Cells are numbered in row-major order: the cell in column `x` and row `y` of a
//! grid with side `size` is vertex `y * size + x`. Row 0 is the top row.

pub mod adjacency;
pub mod cell;
pub mod direction;

use std::ops::Range;

use glam::UVec2;

pub use adjacency::{build_neighbors, Adjacency, Neighbors};
pub use cell::{CellKind, Corner, Exits, Side};
pub use direction::Direction;

use crate::error::{GridError, GridResult};

/// The index of a cell in a [`SquareGrid`], and of a vertex in an [`Adjacency`].
pub type Vertex = usize;

/// A cell position: `x` is the column, `y` is the row.
pub type Coordinate = UVec2;

/// A square grid of `size` by `size` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SquareGrid {
    size: usize,
}

impl SquareGrid {
    /// Creates a grid with the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidGridSize`] if `size` is zero, if a coordinate
    /// would not fit in a `u32`, or if `size * size` overflows.
    pub fn new(size: usize) -> GridResult<Self> {
        if size == 0 || u32::try_from(size).is_err() || size.checked_mul(size).is_none() {
            return Err(GridError::InvalidGridSize(size));
        }
        Ok(SquareGrid { size })
    }

    /// The number of cells along one side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The total number of cells.
    pub fn vertex_count(&self) -> usize {
        self.size * self.size
    }

    /// All vertices of the grid, in row-major order.
    pub fn vertices(&self) -> Range<Vertex> {
        0..self.vertex_count()
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        vertex < self.vertex_count()
    }

    /// Flattens a coordinate into its vertex index.
    pub fn vertex(&self, coordinate: Coordinate) -> GridResult<Vertex> {
        let (x, y) = (coordinate.x as usize, coordinate.y as usize);
        if x >= self.size || y >= self.size {
            return Err(GridError::CoordinateOutOfBounds {
                x: coordinate.x,
                y: coordinate.y,
                size: self.size,
            });
        }
        Ok(y * self.size + x)
    }

    /// Recovers the coordinate of a vertex. Inverse of [`SquareGrid::vertex`].
    pub fn coordinate(&self, vertex: Vertex) -> GridResult<Coordinate> {
        self.check(vertex)?;
        // Both components are below `size`, which fits in a u32.
        Ok(UVec2::new((vertex % self.size) as u32, (vertex / self.size) as u32))
    }

    /// Returns the cell one step from `vertex` in `direction`, or `None` if that
    /// step leaves the grid.
    pub fn step(&self, vertex: Vertex, direction: Direction) -> Option<Vertex> {
        if !self.contains(vertex) {
            return None;
        }

        let (col, row) = (vertex % self.size, vertex / self.size);
        let last = self.size - 1;
        match direction {
            Direction::Left if col > 0 => Some(vertex - 1),
            Direction::Right if col < last => Some(vertex + 1),
            Direction::Up if row > 0 => Some(vertex - self.size),
            Direction::Down if row < last => Some(vertex + self.size),
            _ => None,
        }
    }

    fn check(&self, vertex: Vertex) -> GridResult<()> {
        if self.contains(vertex) {
            Ok(())
        } else {
            Err(GridError::VertexOutOfBounds {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stops_at_edges() {
        let grid = SquareGrid::new(3).unwrap();
        assert_eq!(grid.step(0, Direction::Left), None);
        assert_eq!(grid.step(0, Direction::Up), None);
        assert_eq!(grid.step(0, Direction::Right), Some(1));
        assert_eq!(grid.step(0, Direction::Down), Some(3));
        assert_eq!(grid.step(8, Direction::Right), None);
        assert_eq!(grid.step(8, Direction::Down), None);
        assert_eq!(grid.step(9, Direction::Left), None);
    }

    #[test]
    fn test_step_does_not_wrap_rows() {
        let grid = SquareGrid::new(4).unwrap();
        // Rightmost cell of row 0 must not step into the first cell of row 1.
        assert_eq!(grid.step(3, Direction::Right), None);
        assert_eq!(grid.step(4, Direction::Left), None);
    }
}
