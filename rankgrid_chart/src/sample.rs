// Copyright 2026 the RankGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in sample data used by the widget defaults.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use crate::data::{Period, RankingRecord};

/// Ten sample periods with mixed status flags.
pub fn sample_periods() -> Vec<Period> {
    vec![
        Period::new("20.2"),
        Period::new("20.1"),
        Period::new("21.2").with_not_eligible(true),
        Period::new("21.1"),
        Period::new("22.2"),
        Period::new("22.1"),
        Period::new("23.2").with_updating(true),
        Period::new("24.2"),
        Period::new("24.1"),
        Period::new("24.3"),
    ]
}

/// The four sample ranking bands.
pub fn sample_bands() -> Vec<i64> {
    vec![1, 40, 100, 160]
}

/// A sample dataset correlating the sample periods and bands.
pub fn sample_records() -> Vec<RankingRecord> {
    vec![
        RankingRecord::new("20.2", 1, "7,4"),
        RankingRecord::new("20.1", 100, "8,5"),
        RankingRecord::unranked("21.2"),
        RankingRecord::new("21.1", 40, "6,2"),
        RankingRecord::new("22.1", 100, "6,2"),
        RankingRecord::new("22.2", 160, "8,2"),
        RankingRecord::unranked("23.2"),
        RankingRecord::new("24.1", 100, "6,2"),
        RankingRecord::new("24.2", 160, "8,2"),
        RankingRecord::new("24.3", 40, "8,2"),
    ]
}
