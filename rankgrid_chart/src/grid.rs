// Copyright 2026 the RankGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid model assembly: bands × periods with per-cell content and status.
//!
//! The grid model is the pure computation phase of the widget: it carries no
//! geometry and stays stable across resizes. Only a change to the input data
//! invalidates it.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::band::{BandSampler, synthesize_bands};
use crate::data::{Period, RankingRecord, average_for, sort_periods};
use crate::sample;

/// Status flags for one rendered cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellStatus {
    /// The owning period's data is provisional.
    pub is_updating: bool,
    /// The owning period did not rank the student.
    pub is_not_eligible: bool,
    /// The cell has a recorded average to display.
    pub has_value: bool,
}

/// One cell of the grid model.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridCell {
    /// Display string for the cell's average, present when the student's
    /// ranking fell into this row's band that period.
    pub average: Option<String>,
    /// Derived status flags.
    pub status: CellStatus,
}

/// Inputs for the grid model builder.
///
/// All fields default to the built-in sample set.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSpec {
    /// Time periods (columns); sorted ascending by numeric label at build
    /// time.
    pub periods: Vec<Period>,
    /// Ranking-band thresholds (rows), ascending.
    pub bands: Vec<i64>,
    /// Observed (period, band, average) records.
    pub records: Vec<RankingRecord>,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            periods: sample::sample_periods(),
            bands: sample::sample_bands(),
            records: sample::sample_records(),
        }
    }
}

impl GridSpec {
    /// Creates a grid spec from explicit inputs.
    pub fn new(periods: Vec<Period>, bands: Vec<i64>, records: Vec<RankingRecord>) -> Self {
        Self {
            periods,
            bands,
            records,
        }
    }

    /// Assembles the ordered row/column matrix.
    ///
    /// Periods are sorted ascending here, exactly once; that order is the
    /// canonical one used everywhere downstream. Sparse band sets are
    /// densified via [`synthesize_bands`], which is why building takes a
    /// sampler.
    pub fn build(&self, sampler: &mut dyn BandSampler) -> GridModel {
        let mut periods = self.periods.clone();
        sort_periods(&mut periods);
        let bands = synthesize_bands(&self.bands, sampler);

        let mut cells = Vec::with_capacity(bands.len() * periods.len());
        for &band in &bands {
            for period in &periods {
                let average = average_for(&self.records, &period.label, band);
                cells.push(GridCell {
                    status: CellStatus {
                        is_updating: period.is_updating,
                        is_not_eligible: period.is_not_eligible,
                        has_value: average.is_some(),
                    },
                    average: average.map(String::from),
                });
            }
        }

        GridModel {
            periods,
            bands,
            cells,
        }
    }
}

/// The assembled grid: band rows ascending, period columns ascending.
#[derive(Clone, Debug, PartialEq)]
pub struct GridModel {
    periods: Vec<Period>,
    bands: Vec<i64>,
    /// Row-major cell storage.
    cells: Vec<GridCell>,
}

impl GridModel {
    /// The column periods, in render order.
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// The row bands, in render order.
    pub fn bands(&self) -> &[i64] {
        &self.bands
    }

    /// Number of band rows.
    pub fn row_count(&self) -> usize {
        self.bands.len()
    }

    /// Number of period columns.
    pub fn col_count(&self) -> usize {
        self.periods.len()
    }

    /// The cell at `(row, col)`, or `None` out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&GridCell> {
        if col >= self.col_count() {
            return None;
        }
        self.cells.get(row * self.col_count() + col)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn columns_are_sorted_by_numeric_period() {
        let spec = GridSpec::new(
            vec![
                Period::new("24.2"),
                Period::new("20.1"),
                Period::new("21.1"),
            ],
            vec![1, 40, 100, 160],
            Vec::new(),
        );
        let grid = spec.build(&mut SmallRng::seed_from_u64(0));

        let labels: Vec<&str> = grid.periods().iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["20.1", "21.1", "24.2"]);
    }

    #[test]
    fn cells_carry_averages_and_status() {
        let spec = GridSpec::new(
            vec![
                Period::new("20.1"),
                Period::new("20.2").with_updating(true),
            ],
            vec![1, 40, 100, 160],
            vec![RankingRecord::new("20.1", 40, "6,2")],
        );
        let grid = spec.build(&mut SmallRng::seed_from_u64(0));

        assert_eq!(grid.row_count(), 4);
        assert_eq!(grid.col_count(), 2);

        let hit = grid.cell(1, 0).expect("cell (1, 0)");
        assert_eq!(hit.average.as_deref(), Some("6,2"));
        assert!(hit.status.has_value);
        assert!(!hit.status.is_updating);

        let updating = grid.cell(1, 1).expect("cell (1, 1)");
        assert_eq!(updating.average, None);
        assert!(updating.status.is_updating);
        assert!(!updating.status.has_value);

        assert_eq!(grid.cell(4, 0), None);
        assert_eq!(grid.cell(0, 2), None);
    }

    /// Always picks the midpoint of the interval.
    struct Midpoint;

    impl BandSampler for Midpoint {
        fn sample(&mut self, lo: i64, hi: i64) -> i64 {
            lo + (hi - lo) / 2
        }
    }

    #[test]
    fn sparse_bands_grow_extra_rows() {
        let spec = GridSpec::new(vec![Period::new("20.1")], vec![1, 160], Vec::new());
        let grid = spec.build(&mut Midpoint);

        assert_eq!(grid.bands(), &[1, 80, 160]);
        assert_eq!(grid.row_count(), 3);
    }

    #[test]
    fn empty_periods_build_an_empty_grid() {
        let spec = GridSpec::new(Vec::new(), vec![1, 40, 100, 160], Vec::new());
        let grid = spec.build(&mut SmallRng::seed_from_u64(0));

        assert_eq!(grid.col_count(), 0);
        assert_eq!(grid.cell(0, 0), None);
    }
}
