// Copyright 2026 the RankGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Periods, ranking records, and the first-match average lookup.

extern crate alloc;

use alloc::string::String;

/// One time slot (an academic term) along the chart's x direction.
#[derive(Clone, Debug, PartialEq)]
pub struct Period {
    /// Display label, sortable as a numeric value (e.g. `"20.1"`).
    pub label: String,
    /// Data for this period is provisional.
    pub is_updating: bool,
    /// The student was excluded from ranking this period.
    pub is_not_eligible: bool,
}

impl Period {
    /// Creates an eligible, settled period.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            is_updating: false,
            is_not_eligible: false,
        }
    }

    /// Marks the period's data as provisional.
    pub fn with_updating(mut self, is_updating: bool) -> Self {
        self.is_updating = is_updating;
        self
    }

    /// Marks the student as excluded from ranking this period.
    pub fn with_not_eligible(mut self, is_not_eligible: bool) -> Self {
        self.is_not_eligible = is_not_eligible;
        self
    }

    /// Numeric sort key parsed from the label.
    ///
    /// Labels that fail to parse sort after every numeric one.
    pub fn sort_key(&self) -> f64 {
        self.label.parse().unwrap_or(f64::INFINITY)
    }
}

/// Sorts periods ascending by numeric label.
pub(crate) fn sort_periods(periods: &mut [Period]) {
    periods.sort_by(|a, b| a.sort_key().total_cmp(&b.sort_key()));
}

/// One observed data point: the band the student's ranking fell into for a
/// period, and the average score displayed for it.
#[derive(Clone, Debug, PartialEq)]
pub struct RankingRecord {
    /// Label of the owning period.
    pub period: String,
    /// The discrete band the student fell into, if ranked.
    pub ranking: Option<i64>,
    /// Display string for the average score (e.g. `"8,5"`), if computed.
    ///
    /// Averages are opaque display text; the chart never parses them.
    pub average: Option<String>,
}

impl RankingRecord {
    /// Creates a record for a ranked period.
    pub fn new(period: impl Into<String>, ranking: i64, average: impl Into<String>) -> Self {
        Self {
            period: period.into(),
            ranking: Some(ranking),
            average: Some(average.into()),
        }
    }

    /// Creates a record for a period with no realized ranking.
    pub fn unranked(period: impl Into<String>) -> Self {
        Self {
            period: period.into(),
            ranking: None,
            average: None,
        }
    }
}

/// Returns the average recorded for `(period, band)`, if any.
///
/// Linear scan, first match wins. Duplicate records for a pair are an
/// input-data quality issue, not an error; later duplicates are ignored.
/// A matching record whose average is absent also yields `None` — absence
/// is a normal outcome here, never a failure.
pub fn average_for<'a>(records: &'a [RankingRecord], period: &str, band: i64) -> Option<&'a str> {
    records
        .iter()
        .find(|record| record.ranking == Some(band) && record.period == period)
        .and_then(|record| record.average.as_deref())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn lookup_returns_the_matching_average() {
        let records = vec![
            RankingRecord::new("20.1", 100, "8,5"),
            RankingRecord::new("20.2", 1, "7,4"),
        ];

        assert_eq!(average_for(&records, "20.1", 100), Some("8,5"));
        assert_eq!(average_for(&records, "20.2", 1), Some("7,4"));
    }

    #[test]
    fn lookup_misses_are_none() {
        let records = vec![RankingRecord::new("20.1", 100, "8,5")];

        assert_eq!(average_for(&records, "20.1", 40), None);
        assert_eq!(average_for(&records, "20.2", 100), None);
        assert_eq!(average_for(&[], "20.1", 100), None);
    }

    #[test]
    fn lookup_match_without_average_is_none() {
        let records = vec![RankingRecord {
            period: "21.2".into(),
            ranking: Some(40),
            average: None,
        }];

        assert_eq!(average_for(&records, "21.2", 40), None);
    }

    #[test]
    fn lookup_takes_the_first_duplicate() {
        let records = vec![
            RankingRecord::new("20.1", 100, "8,5"),
            RankingRecord::new("20.1", 100, "9,9"),
        ];

        assert_eq!(average_for(&records, "20.1", 100), Some("8,5"));
    }

    #[test]
    fn periods_sort_numerically_not_lexically() {
        let mut periods = vec![
            Period::new("24.2"),
            Period::new("20.1"),
            Period::new("21.1"),
        ];
        sort_periods(&mut periods);

        let labels: alloc::vec::Vec<&str> =
            periods.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["20.1", "21.1", "24.2"]);
    }
}
