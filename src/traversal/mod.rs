//! Breadth-first and depth-first level traversals.
//!
//! Both traversals share one walk and differ only in their [`Frontier`]: a queue
//! for breadth-first, a stack for depth-first.
//!
//! Levels are assigned with a running counter. When a vertex is taken from the
//! frontier with a level above the counter, the counter advances by one, and
//! every vertex it discovers is placed at `counter + 1`. For the breadth-first
//! walk this is the shortest-path distance from the start. For the depth-first
//! walk it is not: the counter never moves back, so a shallow vertex popped late
//! places its discoveries below the deepest level seen so far. The levels then
//! describe visit order rather than depth.

mod frontier;
mod levels;

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use tracing::debug;

pub use frontier::{Discovered, Frontier};
pub use levels::LevelSets;

use crate::error::TraversalError;
use crate::grid::{Adjacency, Vertex};

/// Which frontier discipline a traversal uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, AsRefStr, Display, EnumString)]
pub enum TraversalKind {
    #[default]
    #[serde(rename = "bfs")]
    #[strum(serialize = "bfs")]
    BreadthFirst,
    #[serde(rename = "dfs")]
    #[strum(serialize = "dfs")]
    DepthFirst,
}

impl TraversalKind {
    /// Runs this kind of traversal from `start`.
    pub fn levels(self, start: Vertex, adjacency: &Adjacency) -> Result<LevelSets, TraversalError> {
        match self {
            TraversalKind::BreadthFirst => bfs_levels(start, adjacency),
            TraversalKind::DepthFirst => dfs_levels(start, adjacency),
        }
    }
}

/// Computes breadth-first level sets from `start`.
///
/// Level `k` holds the vertices at distance `k` from `start`, in the order they
/// were discovered while expanding level `k - 1`.
///
/// # Errors
///
/// Returns [`TraversalError::InvalidVertex`] if `start` is not in `adjacency`.
pub fn bfs_levels(start: Vertex, adjacency: &Adjacency) -> Result<LevelSets, TraversalError> {
    walk::<VecDeque<Discovered>>(start, adjacency, TraversalKind::BreadthFirst)
}

/// Computes depth-first level sets from `start`.
///
/// See the module documentation for how levels are assigned; they follow visit
/// order, not depth in the search tree.
///
/// # Errors
///
/// Returns [`TraversalError::InvalidVertex`] if `start` is not in `adjacency`.
pub fn dfs_levels(start: Vertex, adjacency: &Adjacency) -> Result<LevelSets, TraversalError> {
    walk::<Vec<Discovered>>(start, adjacency, TraversalKind::DepthFirst)
}

fn walk<F: Frontier>(start: Vertex, adjacency: &Adjacency, kind: TraversalKind) -> Result<LevelSets, TraversalError> {
    if !adjacency.contains(start) {
        return Err(TraversalError::InvalidVertex {
            vertex: start,
            vertex_count: adjacency.vertex_count(),
        });
    }

    let mut sets = LevelSets::new(start, kind, adjacency.vertex_count());
    let mut frontier = F::default();
    frontier.put(Discovered { vertex: start, level: 0 });

    let mut current_level = 0;
    while let Some(Discovered { vertex, level }) = frontier.take() {
        if level > current_level {
            current_level += 1;
        }

        for &neighbor in adjacency.neighbors(vertex).unwrap_or_default() {
            if sets.contains(neighbor) {
                continue;
            }
            let level = current_level + 1;
            sets.record(neighbor, level);
            frontier.put(Discovered { vertex: neighbor, level });
        }
    }

    debug!(
        %kind,
        start,
        levels = sets.level_count(),
        reached = sets.vertex_count(),
        "Traversal complete"
    );
    Ok(sets)
}
