//! Plain-text and JSON renderings of level sets.

use std::fmt::Write;

use crate::grid::SquareGrid;
use crate::traversal::LevelSets;

/// Formats one line per level: `level <k>: <vertices in discovery order>`.
pub fn format_levels(sets: &LevelSets) -> String {
    let mut out = String::new();
    for (level, vertices) in sets.iter() {
        let vertices = vertices.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
        // Writing to a String cannot fail
        let _ = writeln!(out, "level {level}: {vertices}");
    }
    out
}

/// Draws the grid with each cell showing the level it was reached at.
///
/// Unreached cells, and cells beyond the traversed graph, are shown as `.`.
/// Columns are right-aligned to the widest level number.
pub fn format_level_map(sets: &LevelSets, grid: &SquareGrid) -> String {
    let width = sets.level_count().saturating_sub(1).to_string().len();
    let mut out = String::new();

    for row in 0..grid.size() {
        let cells = (0..grid.size())
            .map(|col| {
                let vertex = row * grid.size() + col;
                match sets.level_of(vertex) {
                    Some(level) => format!("{level:>width$}"),
                    None => format!("{:>width$}", "."),
                }
            })
            .collect::<Vec<_>>();
        let _ = writeln!(out, "{}", cells.join(" "));
    }
    out
}

/// Serializes the start vertex, traversal kind and levels as JSON.
pub fn to_json(sets: &LevelSets) -> serde_json::Result<String> {
    serde_json::to_string_pretty(sets)
}
