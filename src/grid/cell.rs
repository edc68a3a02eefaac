//! Classification of grid cells by where they sit on the board.

use bitflags::bitflags;

use super::{SquareGrid, Vertex};
use crate::error::{GridError, GridResult};

bitflags! {
    /// The set of directions in which a cell has a neighbor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Exits: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const UP = 1 << 2;
        const DOWN = 1 << 3;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// A side of the grid. Edge cells lie on exactly one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// Where a cell sits on the grid. Every cell has exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// The only cell of a 1x1 grid. It lies on every corner at once and has no neighbors.
    Isolated,
    /// Two neighbors.
    Corner(Corner),
    /// Three neighbors: every direction except the one pointing off the grid.
    Edge(Side),
    /// Four neighbors.
    Interior,
}

impl CellKind {
    /// The directions in which a cell of this kind has a neighbor.
    pub const fn exits(self) -> Exits {
        match self {
            CellKind::Isolated => Exits::empty(),
            CellKind::Corner(Corner::TopLeft) => Exits::RIGHT.union(Exits::DOWN),
            CellKind::Corner(Corner::TopRight) => Exits::LEFT.union(Exits::DOWN),
            CellKind::Corner(Corner::BottomLeft) => Exits::RIGHT.union(Exits::UP),
            CellKind::Corner(Corner::BottomRight) => Exits::LEFT.union(Exits::UP),
            CellKind::Edge(Side::Top) => Exits::all().difference(Exits::UP),
            CellKind::Edge(Side::Bottom) => Exits::all().difference(Exits::DOWN),
            CellKind::Edge(Side::Left) => Exits::all().difference(Exits::LEFT),
            CellKind::Edge(Side::Right) => Exits::all().difference(Exits::RIGHT),
            CellKind::Interior => Exits::all(),
        }
    }

    /// The number of neighbors a cell of this kind has.
    pub const fn degree(self) -> usize {
        self.exits().bits().count_ones() as usize
    }
}

impl SquareGrid {
    /// Classifies `vertex` as a corner, edge or interior cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::VertexOutOfBounds`] for a vertex outside the grid.
    /// [`GridError::InternalClassification`] is reserved for a cell that matches
    /// no case, which a valid grid never produces.
    pub fn classify(&self, vertex: Vertex) -> GridResult<CellKind> {
        let coordinate = self.coordinate(vertex)?;
        if self.size() == 1 {
            return Ok(CellKind::Isolated);
        }

        let last = (self.size() - 1) as u32;
        let top = coordinate.y == 0;
        let bottom = coordinate.y == last;
        let left = coordinate.x == 0;
        let right = coordinate.x == last;

        let kind = match (top, bottom, left, right) {
            (true, false, true, false) => CellKind::Corner(Corner::TopLeft),
            (true, false, false, true) => CellKind::Corner(Corner::TopRight),
            (false, true, true, false) => CellKind::Corner(Corner::BottomLeft),
            (false, true, false, true) => CellKind::Corner(Corner::BottomRight),
            (true, false, false, false) => CellKind::Edge(Side::Top),
            (false, true, false, false) => CellKind::Edge(Side::Bottom),
            (false, false, true, false) => CellKind::Edge(Side::Left),
            (false, false, false, true) => CellKind::Edge(Side::Right),
            (false, false, false, false) => CellKind::Interior,
            // Opposite sides at once; only possible when size == 1, handled above.
            _ => return Err(GridError::InternalClassification(vertex)),
        };
        Ok(kind)
    }
}
