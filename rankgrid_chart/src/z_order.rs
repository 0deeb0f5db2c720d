// Copyright 2026 the RankGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default z order constants for the chart's mark layers.
//!
//! Gaps are deliberate so hosts can slot their own marks between layers.

/// The table background sheet.
pub const GRID_BACKGROUND: i32 = -100;

/// Cell fills and borders.
pub const GRID_CELLS: i32 = -50;

/// Header and cell text.
pub const GRID_LABELS: i32 = 0;

/// The connecting polyline of the overlay.
pub const OVERLAY_STROKE: i32 = 10;

/// The point markers of the overlay, above the stroke.
pub const OVERLAY_POINTS: i32 = 20;

/// Caption swatches below the grid.
pub const LEGEND_SWATCHES: i32 = 60;

/// Caption labels, beside their swatches.
pub const LEGEND_LABELS: i32 = 70;
