// Copyright 2026 the RankGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ranking chart widget: grid model plus measured overlay state.

extern crate alloc;

use alloc::vec::Vec;

use crate::band::BandSampler;
use crate::data::{Period, RankingRecord};
use crate::geometry::{self, OverlayGeometry};
use crate::grid::{GridModel, GridSpec};
use crate::legend::LegendCaptionsSpec;
use crate::mark::Mark;
use crate::measure::GridMeasurer;
use crate::overlay::OverlaySpec;

/// Vertical gap between the grid and the caption block.
const CAPTION_OFFSET: f64 = 10.0;

/// Everything needed to build a [`RankingChart`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RankingChartSpec {
    /// Grid inputs: periods, bands, and records.
    pub grid: GridSpec,
    /// Overlay styling.
    pub overlay: OverlaySpec,
    /// Status captions below the grid.
    pub legend: LegendCaptionsSpec,
}

impl RankingChartSpec {
    /// Creates a chart spec from explicit grid inputs, with default styling.
    pub fn new(periods: Vec<Period>, bands: Vec<i64>, records: Vec<RankingRecord>) -> Self {
        Self {
            grid: GridSpec::new(periods, bands, records),
            ..Self::default()
        }
    }

    /// Builds the chart in its unmeasured state.
    ///
    /// Band synthesis happens here, once; later remeasurements reuse the
    /// same grid model, so the synthesized rows stay put across resizes.
    pub fn build(&self, sampler: &mut dyn BandSampler) -> RankingChart {
        RankingChart {
            grid: self.grid.build(sampler),
            records: self.grid.records.clone(),
            overlay: self.overlay.clone(),
            legend: self.legend.clone(),
            geometry: None,
        }
    }
}

/// The chart widget.
///
/// Starts unmeasured: the grid model is ready to render, but no overlay or
/// caption marks exist yet. The host calls [`RankingChart::remeasure`] after
/// its first layout pass and again whenever the layout changes; each call
/// that can measure the grid replaces the overlay geometry wholesale.
#[derive(Clone, Debug, PartialEq)]
pub struct RankingChart {
    grid: GridModel,
    records: Vec<RankingRecord>,
    overlay: OverlaySpec,
    legend: LegendCaptionsSpec,
    geometry: Option<OverlayGeometry>,
}

impl RankingChart {
    /// The grid model for the host to render.
    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    /// Whether a measurement pass has succeeded.
    pub fn is_measured(&self) -> bool {
        self.geometry.is_some()
    }

    /// The resolved overlay geometry, once measured.
    pub fn geometry(&self) -> Option<&OverlayGeometry> {
        self.geometry.as_ref()
    }

    /// The caption configuration, for hosts that lay captions out
    /// themselves.
    pub fn captions(&self) -> &LegendCaptionsSpec {
        &self.legend
    }

    /// Re-resolves overlay geometry against the host's current layout.
    ///
    /// When the measurer cannot see the grid (not mounted, zero size) the
    /// previous geometry is kept, so a transient layout collapse does not
    /// blank an already-drawn overlay.
    pub fn remeasure(&mut self, measurer: &dyn GridMeasurer) {
        if let Some(resolved) = geometry::resolve(&self.grid, &self.records, measurer) {
            self.geometry = Some(resolved);
        }
    }

    /// Overlay marks in grid-relative coordinates; empty while unmeasured.
    pub fn overlay_marks(&self) -> Vec<Mark> {
        match &self.geometry {
            Some(geometry) => self.overlay.marks(&geometry.points),
            None => Vec::new(),
        }
    }

    /// Caption marks for the block below the grid; empty while unmeasured.
    ///
    /// The block's x is measured from the table's left edge and indented by
    /// the measured header width, so the captions align with the first data
    /// column; its y is measured from the grid's top edge.
    pub fn legend_marks(&self) -> Vec<Mark> {
        match &self.geometry {
            Some(geometry) => self
                .legend
                .marks(geometry.legend_margin, geometry.bounds.height + CAPTION_OFFSET),
            None => Vec::new(),
        }
    }
}
