// Copyright 2026 the RankGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend-neutral render marks.
//!
//! Mark generation and painting are decoupled: the chart emits a flat list
//! of [`Mark`]s and the host paints them in ascending z order with whatever
//! backend it has.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;

/// Horizontal text alignment relative to the anchor position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// The position marks the start of the text.
    #[default]
    Start,
    /// The position marks the middle of the text.
    Middle,
    /// The position marks the end of the text.
    End,
}

/// Vertical text alignment relative to the anchor position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    /// The alphabetic baseline sits at the position.
    #[default]
    Alphabetic,
    /// The text is vertically centered on the position.
    Middle,
    /// The text hangs below the position.
    Hanging,
}

/// How a stroked path is painted.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// An axis-aligned filled rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RectMark {
    /// The rectangle, in host pixels.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// A run of text at a point.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    /// Anchor position.
    pub pos: Point,
    /// The text to draw.
    pub text: String,
    /// Font size in pixels.
    pub font_size: f64,
    /// Horizontal alignment.
    pub anchor: TextAnchor,
    /// Vertical alignment.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// An arbitrary Bézier path, filled and/or stroked.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMark {
    /// The path geometry.
    pub path: BezPath,
    /// Fill paint; transparent for stroke-only paths.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in pixels; zero for fill-only paths.
    pub stroke_width: f64,
}

/// The payload of one mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkKind {
    /// A filled rectangle.
    Rect(RectMark),
    /// A text run.
    Text(TextMark),
    /// A Bézier path.
    Path(PathMark),
}

/// One drawable item with a z order.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Paint order; higher is painted later. Equal values keep emission
    /// order.
    pub z_index: i32,
    /// The payload.
    pub kind: MarkKind,
}

impl Mark {
    /// Creates a mark from a payload.
    pub fn new(z_index: i32, kind: MarkKind) -> Self {
        Self { z_index, kind }
    }

    /// A filled rectangle mark.
    pub fn rect(rect: Rect, fill: impl Into<Brush>, z_index: i32) -> Self {
        Self::new(z_index, MarkKind::Rect(RectMark {
            rect,
            fill: fill.into(),
        }))
    }

    /// A text mark with default (start/alphabetic) alignment.
    pub fn text(
        pos: Point,
        text: impl Into<String>,
        font_size: f64,
        fill: impl Into<Brush>,
        z_index: i32,
    ) -> Self {
        Self::new(z_index, MarkKind::Text(TextMark {
            pos,
            text: text.into(),
            font_size,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
            fill: fill.into(),
        }))
    }

    /// A stroke-only path mark.
    pub fn stroked_path(path: BezPath, style: &StrokeStyle, z_index: i32) -> Self {
        Self::new(z_index, MarkKind::Path(PathMark {
            path,
            fill: Brush::Solid(css::TRANSPARENT),
            stroke: style.brush.clone(),
            stroke_width: style.stroke_width,
        }))
    }

    /// A fill-only path mark.
    pub fn filled_path(path: BezPath, fill: impl Into<Brush>, z_index: i32) -> Self {
        Self::new(z_index, MarkKind::Path(PathMark {
            path,
            fill: fill.into(),
            stroke: Brush::Solid(css::TRANSPARENT),
            stroke_width: 0.0,
        }))
    }
}
