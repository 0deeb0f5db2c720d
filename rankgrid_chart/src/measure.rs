// Copyright 2026 the RankGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The measurement seam between the host's layout and overlay geometry.

use kurbo::{Point, Rect};

/// A width/height pair in host pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Creates a size from explicit extents.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Access to the host's realized grid layout, in host pixels.
///
/// The chart never lays anything out itself; after the host has positioned
/// the grid it answers these queries from its final pixel layout. Any method
/// may return `None` while layout is unavailable (grid not mounted yet, or
/// collapsed to zero size); geometry resolution then leaves the previous
/// state untouched.
pub trait GridMeasurer {
    /// Bounding box of the cell region, excluding row and column headers.
    fn grid_bounds(&self) -> Option<Rect>;

    /// Bounding box of the cell at `(row, col)`, or `None` out of range.
    fn cell_bounds(&self, row: usize, col: usize) -> Option<Rect>;

    /// Width of the row-header column, used to indent the caption block so
    /// it aligns with the first data column.
    fn header_width(&self) -> Option<f64>;
}

/// A [`GridMeasurer`] for hosts that lay the grid out as uniform rows and
/// columns inside a known rectangle.
///
/// Covers the common case where the host gives the chart a fixed box and
/// splits it evenly; hosts with a real layout engine implement
/// [`GridMeasurer`] directly instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformGridMeasurer {
    /// Top-left corner of the whole table, headers included.
    pub origin: Point,
    /// Size of the whole table, headers included.
    pub size: Size,
    /// Number of band rows.
    pub rows: usize,
    /// Number of period columns.
    pub cols: usize,
    /// Width reserved for the row-header column.
    pub row_header_width: f64,
    /// Height reserved for the column-header row.
    pub col_header_height: f64,
}

impl UniformGridMeasurer {
    /// Creates a measurer with default header reservations.
    pub fn new(origin: Point, size: Size, rows: usize, cols: usize) -> Self {
        Self {
            origin,
            size,
            rows,
            cols,
            row_header_width: 56.0,
            col_header_height: 28.0,
        }
    }

    /// Builder-style method to set the row-header width.
    pub fn with_row_header_width(mut self, width: f64) -> Self {
        self.row_header_width = width;
        self
    }

    /// Builder-style method to set the column-header height.
    pub fn with_col_header_height(mut self, height: f64) -> Self {
        self.col_header_height = height;
        self
    }

    fn cell_size(&self) -> Option<Size> {
        if self.rows == 0 || self.cols == 0 {
            return None;
        }
        let width = (self.size.width - self.row_header_width) / self.cols as f64;
        let height = (self.size.height - self.col_header_height) / self.rows as f64;
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        Some(Size::new(width, height))
    }
}

impl GridMeasurer for UniformGridMeasurer {
    fn grid_bounds(&self) -> Option<Rect> {
        self.cell_size()?;
        Some(Rect::new(
            self.origin.x + self.row_header_width,
            self.origin.y + self.col_header_height,
            self.origin.x + self.size.width,
            self.origin.y + self.size.height,
        ))
    }

    fn cell_bounds(&self, row: usize, col: usize) -> Option<Rect> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let cell = self.cell_size()?;
        let x0 = self.origin.x + self.row_header_width + cell.width * col as f64;
        let y0 = self.origin.y + self.col_header_height + cell.height * row as f64;
        Some(Rect::new(x0, y0, x0 + cell.width, y0 + cell.height))
    }

    fn header_width(&self) -> Option<f64> {
        Some(self.row_header_width)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn uniform_cells_tile_the_grid_region() {
        let m = UniformGridMeasurer::new(Point::new(10.0, 20.0), Size::new(456.0, 300.0), 4, 10);

        let grid = m.grid_bounds().expect("grid bounds");
        assert_eq!(grid, Rect::new(66.0, 48.0, 466.0, 320.0));

        let first = m.cell_bounds(0, 0).expect("cell (0, 0)");
        assert_eq!(first, Rect::new(66.0, 48.0, 106.0, 116.0));

        let last = m.cell_bounds(3, 9).expect("cell (3, 9)");
        assert_eq!(last.x1, grid.x1);
        assert_eq!(last.y1, grid.y1);
    }

    #[test]
    fn out_of_range_cells_are_none() {
        let m = UniformGridMeasurer::new(Point::ZERO, Size::new(400.0, 300.0), 4, 10);

        assert_eq!(m.cell_bounds(4, 0), None);
        assert_eq!(m.cell_bounds(0, 10), None);
    }

    #[test]
    fn degenerate_layout_measures_nothing() {
        let zero = UniformGridMeasurer::new(Point::ZERO, Size::default(), 4, 10);
        assert_eq!(zero.grid_bounds(), None);
        assert_eq!(zero.cell_bounds(0, 0), None);

        let empty = UniformGridMeasurer::new(Point::ZERO, Size::new(400.0, 300.0), 0, 0);
        assert_eq!(empty.grid_bounds(), None);
    }
}
