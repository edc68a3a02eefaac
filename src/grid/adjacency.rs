//! Adjacency lists for the grid graph.

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::{Direction, SquareGrid, Vertex};
use crate::error::{GridError, GridResult};

/// The neighbors of a single vertex. Grid cells never have more than four.
pub type Neighbors = SmallVec<[Vertex; 4]>;

/// An undirected graph stored as one neighbor list per vertex.
///
/// Vertices are `0..vertex_count()`. Every list is free of self-loops and
/// duplicates, and the relation is symmetric: if `b` is listed under `a`, then
/// `a` is listed under `b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency {
    lists: Vec<Neighbors>,
}

/// Builds the adjacency relation of a `size` by `size` grid.
///
/// Neighbors are listed left, right, up, down, skipping directions that leave
/// the grid.
///
/// # Errors
///
/// Returns [`GridError::InvalidGridSize`] for a size of zero.
pub fn build_neighbors(size: usize) -> GridResult<Adjacency> {
    SquareGrid::new(size)?.adjacency()
}

impl SquareGrid {
    /// Builds the adjacency relation of this grid.
    ///
    /// Each cell is classified first, and its neighbor list is taken from the
    /// exits of its [`CellKind`](super::CellKind).
    pub fn adjacency(&self) -> GridResult<Adjacency> {
        let mut lists = Vec::with_capacity(self.vertex_count());

        for vertex in self.vertices() {
            let kind = self.classify(vertex)?;
            let exits = kind.exits();

            let mut neighbors = Neighbors::new();
            for direction in Direction::DIRECTIONS {
                if !exits.contains(direction.exit()) {
                    continue;
                }
                // An exit the grid cannot honor means the classification is wrong
                let neighbor = self
                    .step(vertex, direction)
                    .ok_or(GridError::InternalClassification(vertex))?;
                neighbors.push(neighbor);
            }

            trace!(vertex, ?kind, ?neighbors, "Classified cell");
            lists.push(neighbors);
        }

        let adjacency = Adjacency { lists };
        debug!(
            size = self.size(),
            vertices = adjacency.vertex_count(),
            edges = adjacency.edge_count(),
            "Built grid adjacency"
        );
        Ok(adjacency)
    }
}

impl Adjacency {
    /// Builds an adjacency relation from explicit neighbor lists, one per vertex.
    ///
    /// This allows graphs that are not grids, including disconnected ones.
    ///
    /// # Errors
    ///
    /// Returns an error if a list names a vertex outside the graph, names its own
    /// vertex, names the same neighbor twice, or is not mirrored by the
    /// neighbor's own list.
    pub fn from_lists<I, L>(lists: I) -> GridResult<Self>
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = Vertex>,
    {
        let lists: Vec<Neighbors> = lists.into_iter().map(|list| list.into_iter().collect()).collect();
        let vertex_count = lists.len();

        for (vertex, neighbors) in lists.iter().enumerate() {
            for (i, &neighbor) in neighbors.iter().enumerate() {
                if neighbor >= vertex_count {
                    return Err(GridError::NeighborOutOfRange { vertex, neighbor });
                }
                if neighbor == vertex {
                    return Err(GridError::SelfLoop(vertex));
                }
                if neighbors[..i].contains(&neighbor) {
                    return Err(GridError::DuplicateNeighbor { vertex, neighbor });
                }
                if !lists[neighbor].contains(&vertex) {
                    return Err(GridError::Asymmetric { vertex, neighbor });
                }
            }
        }

        Ok(Adjacency { lists })
    }

    /// The number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    /// The number of undirected edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.lists.iter().map(|list| list.len()).sum::<usize>() / 2
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        vertex < self.lists.len()
    }

    /// Returns the neighbors of `vertex`, or `None` if it is not in the graph.
    pub fn neighbors(&self, vertex: Vertex) -> Option<&[Vertex]> {
        self.lists.get(vertex).map(|list| list.as_slice())
    }

    /// Iterates over every vertex with its neighbor list, in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, &[Vertex])> + '_ {
        self.lists.iter().enumerate().map(|(vertex, list)| (vertex, list.as_slice()))
    }

    /// Returns `true` if every listed edge is listed in both directions.
    pub fn is_symmetric(&self) -> bool {
        self.iter().all(|(vertex, neighbors)| {
            neighbors
                .iter()
                .all(|&neighbor| self.neighbors(neighbor).is_some_and(|back| back.contains(&vertex)))
        })
    }
}
