//! Mapping between canvas pixels and grid cells.
//!
//! A square canvas is divided into square cells of a fixed pixel size. The
//! layout owns the conversion in both directions so that the grid used to
//! build the adjacency and the grid the pixels land on always agree.

use glam::{IVec2, UVec2};

use crate::error::{GridResult, LayoutError, WalkResult};
use crate::grid::{Coordinate, SquareGrid, Vertex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Side of the canvas, in pixels.
    canvas_size: u32,
    /// Side of one cell, in pixels.
    cell_size: u32,
    grid: SquareGrid,
}

impl GridLayout {
    /// Creates a layout for a square canvas cut into cells of `cell_size` pixels.
    ///
    /// # Errors
    ///
    /// Fails if `cell_size` is zero, if the canvas is not a whole number of
    /// cells wide, or if that leaves an empty grid.
    pub fn new(canvas_size: u32, cell_size: u32) -> WalkResult<Self> {
        if cell_size == 0 {
            return Err(LayoutError::ZeroCellSize.into());
        }
        if canvas_size % cell_size != 0 {
            return Err(LayoutError::CanvasNotDivisible {
                canvas: canvas_size,
                cell: cell_size,
            }
            .into());
        }

        let grid = SquareGrid::new((canvas_size / cell_size) as usize)?;
        Ok(GridLayout {
            canvas_size,
            cell_size,
            grid,
        })
    }

    pub fn canvas_size(&self) -> u32 {
        self.canvas_size
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// The number of cells along one side.
    pub fn side(&self) -> usize {
        self.grid.size()
    }

    pub fn grid(&self) -> SquareGrid {
        self.grid
    }

    /// Returns the cell containing `pixel`.
    pub fn pixel_to_coordinate(&self, pixel: IVec2) -> Result<Coordinate, LayoutError> {
        let out_of_bounds = LayoutError::PixelOutOfBounds { x: pixel.x, y: pixel.y };
        let x = u32::try_from(pixel.x).map_err(|_| out_of_bounds.clone())?;
        let y = u32::try_from(pixel.y).map_err(|_| out_of_bounds.clone())?;
        if x >= self.canvas_size || y >= self.canvas_size {
            return Err(out_of_bounds);
        }
        Ok(UVec2::new(x / self.cell_size, y / self.cell_size))
    }

    /// Returns the top-left pixel of the cell at `coordinate`.
    pub fn coordinate_to_pixel(&self, coordinate: Coordinate) -> GridResult<UVec2> {
        // Validates the coordinate against the grid before scaling it.
        self.grid.vertex(coordinate)?;
        Ok(coordinate * self.cell_size)
    }

    /// Returns the vertex of the cell containing `pixel`.
    pub fn vertex_at_pixel(&self, pixel: IVec2) -> WalkResult<Vertex> {
        let coordinate = self.pixel_to_coordinate(pixel)?;
        Ok(self.grid.vertex(coordinate)?)
    }

    /// Returns the top-left pixel of the cell for `vertex`.
    pub fn vertex_to_pixel(&self, vertex: Vertex) -> GridResult<UVec2> {
        let coordinate = self.grid.coordinate(vertex)?;
        Ok(coordinate * self.cell_size)
    }
}
