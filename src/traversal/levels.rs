use serde::Serialize;

use super::TraversalKind;
use crate::grid::Vertex;

/// The vertices reached by a traversal, grouped by level.
///
/// Level 0 holds only the start vertex. Within a level, vertices appear in the
/// order they were discovered. Every reached vertex appears in exactly one
/// level; unreachable vertices appear in none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelSets {
    start: Vertex,
    kind: TraversalKind,
    levels: Vec<Vec<Vertex>>,
    /// Level of each vertex of the traversed graph, `None` if unreached.
    #[serde(skip)]
    vertex_levels: Vec<Option<usize>>,
}

impl LevelSets {
    pub(super) fn new(start: Vertex, kind: TraversalKind, vertex_count: usize) -> Self {
        let mut vertex_levels = vec![None; vertex_count];
        vertex_levels[start] = Some(0);
        LevelSets {
            start,
            kind,
            levels: vec![vec![start]],
            vertex_levels,
        }
    }

    /// Appends `vertex` to `level`, opening the level if it is the next one.
    pub(super) fn record(&mut self, vertex: Vertex, level: usize) {
        if level == self.levels.len() {
            self.levels.push(Vec::new());
        }
        self.levels[level].push(vertex);
        self.vertex_levels[vertex] = Some(level);
    }

    pub fn start(&self) -> Vertex {
        self.start
    }

    pub fn kind(&self) -> TraversalKind {
        self.kind
    }

    /// The number of levels, including level 0.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// The number of vertices reached, including the start vertex.
    pub fn vertex_count(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    /// The vertices of level `level`, in discovery order.
    pub fn level(&self, level: usize) -> Option<&[Vertex]> {
        self.levels.get(level).map(Vec::as_slice)
    }

    /// The level `vertex` was placed in, or `None` if it was never reached.
    pub fn level_of(&self, vertex: Vertex) -> Option<usize> {
        self.vertex_levels.get(vertex).copied().flatten()
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        self.level_of(vertex).is_some()
    }

    /// Iterates over `(level, vertices)` pairs in level order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Vertex])> + '_ {
        self.levels.iter().enumerate().map(|(level, vertices)| (level, vertices.as_slice()))
    }

    /// Every reached vertex, level by level, in discovery order.
    pub fn visit_order(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.levels.iter().flatten().copied()
    }
}
