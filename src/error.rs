//! Centralized error types for grid construction and traversal.
//!
//! Each area of the crate has its own error enum; [`WalkError`] wraps all of
//! them for callers that do not care which stage failed.

use crate::grid::Vertex;

/// Main error type for the crate.
///
/// This is the error returned by operations that span several stages, such as
/// mapping a pixel to a vertex and then traversing from it.
#[derive(thiserror::Error, Debug)]
pub enum WalkError {
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    #[error("Traversal error: {0}")]
    Traversal(#[from] TraversalError),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while building or indexing a grid.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid grid size: {0}")]
    InvalidGridSize(usize),

    #[error("Coordinate ({x}, {y}) is outside a grid of side {size}")]
    CoordinateOutOfBounds { x: u32, y: u32, size: usize },

    #[error("Vertex {vertex} is outside a graph of {vertex_count} vertices")]
    VertexOutOfBounds { vertex: Vertex, vertex_count: usize },

    #[error("Vertex {vertex} lists an invalid neighbor {neighbor}")]
    NeighborOutOfRange { vertex: Vertex, neighbor: Vertex },

    #[error("Vertex {0} lists itself as a neighbor")]
    SelfLoop(Vertex),

    #[error("Vertex {vertex} lists neighbor {neighbor} more than once")]
    DuplicateNeighbor { vertex: Vertex, neighbor: Vertex },

    #[error("Vertex {vertex} lists {neighbor}, but {neighbor} does not list {vertex}")]
    Asymmetric { vertex: Vertex, neighbor: Vertex },

    /// A cell matched none, or more than one, of the corner/edge/interior cases.
    ///
    /// This is a logic defect and never happens for a valid grid.
    #[error("Vertex {0} could not be classified as corner, edge or interior")]
    InternalClassification(Vertex),
}

/// Errors raised by a level traversal.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TraversalError {
    #[error("Start vertex {vertex} is not in a graph of {vertex_count} vertices")]
    InvalidVertex { vertex: Vertex, vertex_count: usize },
}

/// Errors related to mapping canvas pixels onto grid cells.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Cell size must be positive")]
    ZeroCellSize,

    #[error("Canvas size {canvas} is not a multiple of cell size {cell}")]
    CanvasNotDivisible { canvas: u32, cell: u32 },

    #[error("Pixel ({x}, {y}) is outside the canvas")]
    PixelOutOfBounds { x: i32, y: i32 },
}

/// Errors related to loading configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to extract configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Extract(Box::new(err))
    }
}

/// Result type for grid construction.
pub type GridResult<T> = Result<T, GridError>;

/// Result type for operations spanning several stages.
pub type WalkResult<T> = Result<T, WalkError>;
