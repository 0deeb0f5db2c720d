// Copyright 2026 the RankGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The line-and-point overlay traced across the grid.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::BezPath;
use peniko::Brush;
use peniko::color::palette::css;

use crate::geometry::PlotPoint;
use crate::mark::{Mark, StrokeStyle};
use crate::symbol::Symbol;
use crate::z_order;

/// Styling for the ranking overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlaySpec {
    /// Stroke for the connecting segments.
    pub stroke: StrokeStyle,
    /// Marker shape drawn at each resolved point.
    pub symbol: Symbol,
    /// Marker diameter/side length in pixels.
    pub marker_size: f64,
    /// Marker fill paint.
    pub marker_fill: Brush,
}

impl Default for OverlaySpec {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle::solid(css::BLACK, 2.0),
            symbol: Symbol::Circle,
            marker_size: 12.0,
            marker_fill: Brush::Solid(css::BLACK),
        }
    }
}

impl OverlaySpec {
    /// Builder-style method to set the segment stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Builder-style method to set the marker shape.
    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = symbol;
        self
    }

    /// Builder-style method to set the marker size.
    pub fn with_marker_size(mut self, marker_size: f64) -> Self {
        self.marker_size = marker_size;
        self
    }

    /// Builder-style method to set the marker fill.
    pub fn with_marker_fill(mut self, marker_fill: impl Into<Brush>) -> Self {
        self.marker_fill = marker_fill.into();
        self
    }

    /// Emits overlay marks for resolved geometry, in grid-relative
    /// coordinates.
    ///
    /// Each resolved point with a successor slot gets one segment toward it;
    /// when that slot is empty the segment is zero-length, so a gap in the
    /// data breaks the line instead of bridging it. The final point has no
    /// outgoing segment. Markers are emitted after all segments and sit
    /// above them.
    pub fn marks(&self, points: &[Option<PlotPoint>]) -> Vec<Mark> {
        let mut marks = Vec::new();

        for (i, point) in points.iter().enumerate() {
            let Some(point) = point else {
                continue;
            };
            let Some(successor) = points.get(i + 1) else {
                continue;
            };
            let (x2, y2) = match successor {
                Some(next) => (next.x, next.y),
                None => (point.x, point.y),
            };
            let mut segment = BezPath::new();
            segment.move_to((point.x, point.y));
            segment.line_to((x2, y2));
            marks.push(Mark::stroked_path(
                segment,
                &self.stroke,
                z_order::OVERLAY_STROKE,
            ));
        }

        for point in points.iter().flatten() {
            marks.push(Mark::filled_path(
                self.symbol.path(point.x, point.y, self.marker_size),
                self.marker_fill.clone(),
                z_order::OVERLAY_POINTS,
            ));
        }

        marks
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::Shape;

    use crate::mark::MarkKind;

    use super::*;

    fn point(period: &str, x: f64, y: f64) -> Option<PlotPoint> {
        Some(PlotPoint {
            period: String::from(period),
            x,
            y,
        })
    }

    fn segment_spans(marks: &[Mark]) -> Vec<f64> {
        marks
            .iter()
            .filter_map(|mark| match &mark.kind {
                MarkKind::Path(path) if mark.z_index == z_order::OVERLAY_STROKE => {
                    Some(path.path.bounding_box().width())
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn adjacent_points_are_joined_once() {
        let points = vec![point("20.1", 86.0, 170.0), point("20.2", 258.0, 34.0)];
        let marks = OverlaySpec::default().marks(&points);

        let spans = segment_spans(&marks);
        assert_eq!(spans.len(), 1, "the final point has no outgoing segment");
        assert!(spans[0] > 0.0);

        let markers = marks
            .iter()
            .filter(|m| m.z_index == z_order::OVERLAY_POINTS)
            .count();
        assert_eq!(markers, 2);
    }

    #[test]
    fn a_gap_breaks_the_line() {
        let points = vec![
            point("20.1", 50.0, 100.0),
            None,
            point("21.1", 250.0, 40.0),
        ];
        let marks = OverlaySpec::default().marks(&points);

        // The first point's segment collapses to a stub; nothing bridges the
        // missing middle period, and the last point emits no segment.
        let spans = segment_spans(&marks);
        assert_eq!(spans, vec![0.0]);

        let markers = marks
            .iter()
            .filter(|m| m.z_index == z_order::OVERLAY_POINTS)
            .count();
        assert_eq!(markers, 2);
    }

    #[test]
    fn empty_geometry_emits_no_marks() {
        assert!(OverlaySpec::default().marks(&[]).is_empty());
        assert!(OverlaySpec::default().marks(&[None, None]).is_empty());
    }

    #[test]
    fn markers_sit_above_segments() {
        let points = vec![point("20.1", 10.0, 10.0), point("20.2", 20.0, 20.0)];
        let marks = OverlaySpec::default().marks(&points);

        let max_segment_z = marks
            .iter()
            .filter(|m| matches!(&m.kind, MarkKind::Path(p) if p.stroke_width > 0.0))
            .map(|m| m.z_index)
            .max()
            .expect("segments");
        let min_marker_z = marks
            .iter()
            .filter(|m| matches!(&m.kind, MarkKind::Path(p) if p.stroke_width == 0.0))
            .map(|m| m.z_index)
            .min()
            .expect("markers");
        assert!(min_marker_z > max_segment_z);
    }
}
