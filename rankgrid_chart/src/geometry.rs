// Copyright 2026 the RankGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay geometry resolution: from measured cell boxes to plot points.
//!
//! The overlay is drawn on a canvas laid over the grid's cell region, so all
//! coordinates here are relative to the grid origin, not the host viewport.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::data::RankingRecord;
use crate::grid::GridModel;
use crate::measure::{GridMeasurer, Size};

/// The overlay position resolved for one period.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotPoint {
    /// Label of the period this point belongs to.
    pub period: String,
    /// Horizontal center of the populated cell, relative to the grid origin.
    pub x: f64,
    /// Vertical center of the populated cell, relative to the grid origin.
    pub y: f64,
}

/// Resolved overlay geometry for one measurement pass.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayGeometry {
    /// Size of the grid's cell region; the overlay canvas matches it.
    pub bounds: Size,
    /// One slot per period, in period order; `None` where the period has no
    /// plottable value.
    pub points: Vec<Option<PlotPoint>>,
    /// Left indent for the caption block, matching the row-header width.
    pub legend_margin: f64,
}

/// Maps the grid's populated cells onto measured pixel positions.
///
/// Returns `None` when the grid region itself cannot be measured, so a
/// transiently unmountable layout never wipes previously resolved geometry.
///
/// A period gets a point only when both hold: its record in `records`
/// (matched by period label alone) carries an average, and some populated
/// cell in its column was measurable. The candidate centers are ordered by
/// their horizontal position rather than by column index, mirroring a host
/// that reads positions back from a live layout.
pub fn resolve(
    grid: &GridModel,
    records: &[RankingRecord],
    measurer: &dyn GridMeasurer,
) -> Option<OverlayGeometry> {
    let grid_bounds = measurer.grid_bounds()?;

    // Centers of every populated cell, tagged with the owning period.
    let mut centers: Vec<(&str, f64, f64)> = Vec::new();
    for row in 0..grid.row_count() {
        for col in 0..grid.col_count() {
            let Some(cell) = grid.cell(row, col) else {
                continue;
            };
            if !cell.status.has_value {
                continue;
            }
            let Some(bounds) = measurer.cell_bounds(row, col) else {
                continue;
            };
            let center = bounds.center();
            centers.push((
                grid.periods()[col].label.as_str(),
                center.x - grid_bounds.x0,
                center.y - grid_bounds.y0,
            ));
        }
    }
    centers.sort_by(|a, b| a.1.total_cmp(&b.1));

    let points = grid
        .periods()
        .iter()
        .map(|period| {
            let has_average = records
                .iter()
                .find(|record| record.period == period.label)
                .and_then(|record| record.average.as_ref())
                .is_some();
            if !has_average {
                return None;
            }
            centers
                .iter()
                .find(|(label, _, _)| *label == period.label)
                .map(|&(_, x, y)| PlotPoint {
                    period: period.label.clone(),
                    x,
                    y,
                })
        })
        .collect();

    Some(OverlayGeometry {
        bounds: Size::new(grid_bounds.width(), grid_bounds.height()),
        points,
        legend_margin: measurer.header_width().unwrap_or(0.0),
    })
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::Point;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use crate::data::Period;
    use crate::grid::GridSpec;
    use crate::measure::UniformGridMeasurer;

    use super::*;

    fn two_point_grid() -> (GridModel, Vec<RankingRecord>) {
        let records = vec![
            RankingRecord::new("20.2", 1, "7,4"),
            RankingRecord::new("20.1", 100, "8,5"),
        ];
        let spec = GridSpec::new(
            vec![Period::new("20.2"), Period::new("20.1")],
            vec![1, 40, 100, 160],
            records.clone(),
        );
        (spec.build(&mut SmallRng::seed_from_u64(0)), records)
    }

    #[test]
    fn points_are_cell_centers_relative_to_the_grid() {
        let (grid, records) = two_point_grid();
        // 400 - 56 header = 344 wide over 2 cols; 300 - 28 = 272 over 4 rows.
        let measurer = UniformGridMeasurer::new(Point::ZERO, Size::new(400.0, 300.0), 4, 2);

        let geometry = resolve(&grid, &records, &measurer).expect("geometry");
        assert_eq!(geometry.bounds, Size::new(344.0, 272.0));
        assert_eq!(geometry.legend_margin, 56.0);
        assert_eq!(geometry.points.len(), 2);

        // Column order is 20.1 then 20.2; 20.1 hit band row 2, 20.2 row 0.
        let first = geometry.points[0].as_ref().expect("point for 20.1");
        assert_eq!(first.period, "20.1");
        assert_eq!((first.x, first.y), (86.0, 170.0));

        let second = geometry.points[1].as_ref().expect("point for 20.2");
        assert_eq!(second.period, "20.2");
        assert_eq!((second.x, second.y), (258.0, 34.0));
    }

    #[test]
    fn periods_without_averages_stay_empty() {
        let records = vec![
            RankingRecord::new("20.1", 100, "8,5"),
            RankingRecord::unranked("20.2"),
            RankingRecord::new("21.1", 1, "7,4"),
        ];
        let spec = GridSpec::new(
            vec![
                Period::new("20.1"),
                Period::new("20.2"),
                Period::new("21.1"),
            ],
            vec![1, 40, 100, 160],
            records.clone(),
        );
        let grid = spec.build(&mut SmallRng::seed_from_u64(0));
        let measurer = UniformGridMeasurer::new(Point::ZERO, Size::new(400.0, 300.0), 4, 3);

        let geometry = resolve(&grid, &records, &measurer).expect("geometry");
        assert!(geometry.points[0].is_some());
        assert_eq!(geometry.points[1], None);
        assert!(geometry.points[2].is_some());
    }

    #[test]
    fn unmeasurable_grid_resolves_to_none() {
        let (grid, records) = two_point_grid();
        let measurer = UniformGridMeasurer::new(Point::ZERO, Size::default(), 4, 2);

        assert_eq!(resolve(&grid, &records, &measurer), None);
    }

    #[test]
    fn geometry_tracks_the_host_offset() {
        let (grid, records) = two_point_grid();
        let at_origin = UniformGridMeasurer::new(Point::ZERO, Size::new(400.0, 300.0), 4, 2);
        let offset = UniformGridMeasurer::new(
            Point::new(120.0, 80.0),
            Size::new(400.0, 300.0),
            4,
            2,
        );

        // Grid-relative coordinates are invariant under host translation.
        assert_eq!(
            resolve(&grid, &records, &at_origin),
            resolve(&grid, &records, &offset),
        );
    }
}
