//! Breadth-first and depth-first level sets over an implicit square grid graph.
//!
//! [`grid::build_neighbors`] turns a side length into an [`grid::Adjacency`];
//! [`traversal::bfs_levels`] and [`traversal::dfs_levels`] turn a start vertex
//! into [`traversal::LevelSets`], the groups of cells a renderer paints one step
//! at a time.

pub mod config;
pub mod error;
pub mod grid;
pub mod layout;
pub mod logging;
pub mod report;
pub mod traversal;
