// Copyright 2026 the RankGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Table rendering: the demo's stand-in for a host grid layout.
//!
//! Produces header, cell, and border marks in absolute coordinates from the
//! same measurer the chart is remeasured against, so the overlay lines up
//! with the cells by construction.

use kurbo::{Point, Rect, Shape};
use peniko::color::palette::css;
use rankgrid_chart::{
    GRID_BACKGROUND, GRID_CELLS, GRID_LABELS, GridMeasurer, GridModel, Mark, MarkKind,
    NOT_ELIGIBLE_TINT, StrokeStyle, TextAnchor, TextBaseline, UPDATING_TINT, UniformGridMeasurer,
};

const HEADER_FONT_SIZE: f64 = 12.0;
const CELL_FONT_SIZE: f64 = 11.0;

fn centered_text(pos: Point, text: impl Into<String>, font_size: f64, z_index: i32) -> Mark {
    let mut mark = Mark::text(pos, text, font_size, css::BLACK, z_index);
    if let MarkKind::Text(t) = &mut mark.kind {
        t.anchor = TextAnchor::Middle;
        t.baseline = TextBaseline::Middle;
    }
    mark
}

pub(crate) fn table_marks(grid: &GridModel, measurer: &UniformGridMeasurer) -> Vec<Mark> {
    let mut marks = Vec::new();
    let border = StrokeStyle::solid(css::LIGHT_GRAY, 1.0);

    let table = Rect::new(
        measurer.origin.x,
        measurer.origin.y,
        measurer.origin.x + measurer.size.width,
        measurer.origin.y + measurer.size.height,
    );
    marks.push(Mark::rect(table, css::WHITE, GRID_BACKGROUND));

    // Column headers, centered over their columns.
    let header_y = measurer.origin.y + measurer.col_header_height * 0.5;
    for (col, period) in grid.periods().iter().enumerate() {
        let Some(bounds) = measurer.cell_bounds(0, col) else {
            continue;
        };
        marks.push(centered_text(
            Point::new(bounds.center().x, header_y),
            period.label.clone(),
            HEADER_FONT_SIZE,
            GRID_LABELS,
        ));
    }

    // Row headers, centered in the header column.
    let header_x = measurer.origin.x + measurer.row_header_width * 0.5;
    for (row, band) in grid.bands().iter().enumerate() {
        let Some(bounds) = measurer.cell_bounds(row, 0) else {
            continue;
        };
        marks.push(centered_text(
            Point::new(header_x, bounds.center().y),
            band.to_string(),
            HEADER_FONT_SIZE,
            GRID_LABELS,
        ));
    }

    for row in 0..grid.row_count() {
        for col in 0..grid.col_count() {
            let (Some(cell), Some(bounds)) = (grid.cell(row, col), measurer.cell_bounds(row, col))
            else {
                continue;
            };

            if cell.status.is_not_eligible {
                marks.push(Mark::rect(bounds, NOT_ELIGIBLE_TINT, GRID_CELLS));
            } else if cell.status.is_updating {
                marks.push(Mark::rect(bounds, UPDATING_TINT, GRID_CELLS));
            }
            marks.push(Mark::stroked_path(bounds.to_path(0.1), &border, GRID_CELLS));

            if let Some(average) = &cell.average {
                marks.push(centered_text(
                    bounds.center(),
                    average.clone(),
                    CELL_FONT_SIZE,
                    GRID_LABELS,
                ));
            }
        }
    }

    marks
}
