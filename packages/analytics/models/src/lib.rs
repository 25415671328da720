#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Filter criteria and pivot table types for the accident map engines.
//!
//! These value objects travel between the HTTP handlers and the filter and
//! aggregation engines. A fresh [`FilterCriteria`] is built on every user
//! interaction; the [`PivotTable`] is an ephemeral per-request artifact.

use accident_map_accident_models::{Severity, Weekday};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive year range selected by the UI's range control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRange {
    /// First year of the range.
    pub start: i32,
    /// Last year of the range.
    pub end: i32,
}

impl YearRange {
    /// Creates a new year range.
    #[must_use]
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Returns the inclusive date window spanned by this range: January 1
    /// of the start year through December 31 of the end year.
    ///
    /// Returns `None` for years a calendar cannot express; a reversed
    /// range still produces a window (which then matches no dates).
    #[must_use]
    pub fn date_window(self) -> Option<(NaiveDate, NaiveDate)> {
        let start = NaiveDate::from_ymd_opt(self.start, 1, 1)?;
        let end = NaiveDate::from_ymd_opt(self.end, 12, 31)?;
        Some((start, end))
    }
}

/// The three filter inputs of the dashboard, as one value object.
///
/// `parties` may be empty; an empty party or severity selection matches no
/// records (the empty OR / vacuous membership — pinned by tests in the
/// analytics crate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Inclusive year range.
    pub years: YearRange,
    /// Severity codes to include.
    pub severities: Vec<Severity>,
    /// Involved-party column names to OR together.
    pub parties: Vec<String>,
}

impl FilterCriteria {
    /// First year selectable in the UI.
    pub const MIN_YEAR: i32 = 2011;
    /// Last year selectable in the UI.
    pub const MAX_YEAR: i32 = 2022;

    /// Returns the dashboard's default criteria: years 2012-2019, all
    /// three severity codes, pedestrian and bicycle involvement.
    #[must_use]
    pub fn dashboard_default() -> Self {
        Self {
            years: YearRange::new(2012, 2019),
            severities: Severity::all().to_vec(),
            parties: vec!["Fussgänger".to_owned(), "Fahrrad".to_owned()],
        }
    }
}

/// One rendered row of the weekday-by-hour pivot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotRow {
    /// The weekday this row counts.
    pub weekday: Weekday,
    /// Counts aligned index-for-index with [`PivotTable::hours`].
    pub counts: Vec<u64>,
}

/// The weekday-by-hour frequency pivot derived from a filtered view.
///
/// Rows appear in fixed Montag-to-Sonntag order; a weekday that never
/// occurs in the view is omitted entirely. Columns are the hour values
/// actually present, ascending, capped at 24 (the table's fixed-width
/// slice of 25 columns counting the weekday column).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotTable {
    /// Hour column labels, ascending.
    pub hours: Vec<u8>,
    /// Rendered weekday rows in fixed order.
    pub rows: Vec<PivotRow>,
}

impl PivotTable {
    /// Sums every cell of the table.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.rows.iter().flat_map(|row| &row.counts).sum()
    }
}
