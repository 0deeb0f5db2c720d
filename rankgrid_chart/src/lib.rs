// Copyright 2026 the RankGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building blocks for an academic "ranking evolution" chart.
//!
//! The chart is a two-axis grid — rows are ranking bands, columns are time
//! periods — with a line-and-point overlay tracing the achieved rankings
//! across periods. This crate owns the non-trivial logic:
//! - **Band synthesis** densifies a sparse band list for display.
//! - **Grid model building** assembles the ordered cell matrix with
//!   per-cell content and status flags (no geometry).
//! - **Geometry resolution** maps the dataset onto measured cell bounding
//!   boxes so the overlay stays pixel-aligned with the grid after layout
//!   changes.
//! - **Overlay/caption mark generation** emits backend-neutral marks a host
//!   renderer paints on a canvas sized to the grid.
//!
//! Rendering and layout themselves are the host's job: it renders the grid
//! model however it likes, implements [`GridMeasurer`] against its final
//! pixel layout, and calls [`RankingChart::remeasure`] after the first
//! layout and on every resize.

#![no_std]

extern crate alloc;

mod band;
mod chart;
mod data;
mod geometry;
mod grid;
mod legend;
mod mark;
mod measure;
mod overlay;
mod sample;
mod symbol;
mod z_order;

pub use band::{BandSampler, MIN_BAND_COUNT, synthesize_bands};
pub use chart::{RankingChart, RankingChartSpec};
pub use data::{Period, RankingRecord, average_for};
pub use geometry::{OverlayGeometry, PlotPoint, resolve};
pub use grid::{CellStatus, GridCell, GridModel, GridSpec};
pub use legend::{LegendCaption, LegendCaptionsSpec, NOT_ELIGIBLE_TINT, UPDATING_TINT};
pub use mark::{
    Mark, MarkKind, PathMark, RectMark, StrokeStyle, TextAnchor, TextBaseline, TextMark,
};
pub use measure::{GridMeasurer, Size, UniformGridMeasurer};
pub use overlay::OverlaySpec;
pub use sample::{sample_bands, sample_periods, sample_records};
pub use symbol::Symbol;
pub use z_order::*;
