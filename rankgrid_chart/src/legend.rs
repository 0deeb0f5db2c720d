// Copyright 2026 the RankGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Status captions rendered below the grid.
//!
//! The captions explain the two cell tints (not-eligible and updating) and
//! are indented to line up with the grid's first data column.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::mark::{Mark, MarkKind, TextAnchor, TextBaseline};
use crate::z_order;

/// Background tint for cells of not-eligible periods.
pub const NOT_ELIGIBLE_TINT: Color = css::MISTY_ROSE;

/// Background tint for cells of periods still being updated.
pub const UPDATING_TINT: Color = css::LEMON_CHIFFON;

/// One caption row: a color swatch and its explanation.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendCaption {
    /// The explanation shown next to the swatch.
    pub label: String,
    /// The swatch fill paint.
    pub fill: Brush,
}

impl LegendCaption {
    /// Convenience constructor for a solid-color swatch.
    pub fn solid(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            fill: Brush::Solid(color),
        }
    }
}

/// A vertical list of status captions.
///
/// Defaults to the two captions the ranking chart ships with.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendCaptionsSpec {
    /// Captions in display order.
    pub items: Vec<LegendCaption>,
    /// Swatch square size.
    pub swatch_size: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Horizontal gap between swatch and label.
    pub label_dx: f64,
    /// Label font size.
    pub font_size: f64,
    /// Label paint.
    pub text_fill: Brush,
}

impl Default for LegendCaptionsSpec {
    fn default() -> Self {
        Self::new(alloc::vec![
            LegendCaption::solid("Period not eligible for ranking", NOT_ELIGIBLE_TINT),
            LegendCaption::solid("Ranking update in progress", UPDATING_TINT),
        ])
    }
}

impl LegendCaptionsSpec {
    /// Creates a caption list with default metrics.
    pub fn new(items: Vec<LegendCaption>) -> Self {
        Self {
            items,
            swatch_size: 10.0,
            row_gap: 6.0,
            label_dx: 6.0,
            font_size: 10.0,
            text_fill: css::BLACK.into(),
        }
    }

    /// Set the label text paint.
    pub fn with_text_fill(mut self, text_fill: impl Into<Brush>) -> Self {
        self.text_fill = text_fill.into();
        self
    }

    /// Set the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the swatch size.
    pub fn with_swatch_size(mut self, swatch_size: f64) -> Self {
        self.swatch_size = swatch_size;
        self
    }

    fn row_height(&self) -> f64 {
        self.swatch_size.max(self.font_size)
    }

    /// Total height of the caption block.
    pub fn height(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        let rows = self.items.len() as f64;
        rows * self.row_height() + (rows - 1.0) * self.row_gap
    }

    /// Generates caption marks (swatch rect + label text per row) with the
    /// block's top-left corner at `(margin_left, y)`.
    pub fn marks(&self, margin_left: f64, y: f64) -> Vec<Mark> {
        let mut out = Vec::new();
        let row_height = self.row_height();

        for (i, item) in self.items.iter().enumerate() {
            let row_y = y + i as f64 * (row_height + self.row_gap);
            let swatch_y = row_y + (row_height - self.swatch_size) * 0.5;

            out.push(Mark::rect(
                Rect::new(
                    margin_left,
                    swatch_y,
                    margin_left + self.swatch_size,
                    swatch_y + self.swatch_size,
                ),
                item.fill.clone(),
                z_order::LEGEND_SWATCHES,
            ));

            let mut label = Mark::text(
                Point::new(
                    margin_left + self.swatch_size + self.label_dx,
                    row_y + row_height * 0.5,
                ),
                item.label.clone(),
                self.font_size,
                self.text_fill.clone(),
                z_order::LEGEND_LABELS,
            );
            if let MarkKind::Text(text) = &mut label.kind {
                text.anchor = TextAnchor::Start;
                text.baseline = TextBaseline::Middle;
            }
            out.push(label);
        }
        out
    }
}
