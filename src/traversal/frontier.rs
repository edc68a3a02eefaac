use std::collections::VecDeque;

use crate::grid::Vertex;

/// A vertex waiting to be expanded, with the level it was bucketed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discovered {
    pub vertex: Vertex,
    pub level: usize,
}

/// The collection of discovered but not yet expanded vertices.
///
/// The order in which entries come back out is the only difference between a
/// breadth-first and a depth-first walk.
pub trait Frontier: Default {
    fn put(&mut self, entry: Discovered);
    fn take(&mut self) -> Option<Discovered>;
}

/// First in, first out.
impl Frontier for VecDeque<Discovered> {
    fn put(&mut self, entry: Discovered) {
        self.push_back(entry);
    }

    fn take(&mut self) -> Option<Discovered> {
        self.pop_front()
    }
}

/// Last in, first out.
impl Frontier for Vec<Discovered> {
    fn put(&mut self, entry: Discovered) {
        self.push(entry);
    }

    fn take(&mut self) -> Option<Discovered> {
        self.pop()
    }
}
