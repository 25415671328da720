#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Record store for the accident dataset.
//!
//! Loads the fixed-schema CSV snapshot exactly once at startup, normalizes
//! the two category columns through the fixed lookup tables, and exposes
//! the result as an immutable [`RecordCollection`]. The collection is never
//! mutated after construction, so it is safe to share behind an `Arc`
//! across concurrent readers. Column names and label strings are the
//! original German ones from the source data.

pub mod parsing;

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use accident_map_accident_models::{AccidentType, Severity, Weekday};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fixed, non-boolean columns of the dataset schema. Every remaining
/// column is treated as an involved-party boolean flag.
const FIXED_COLUMNS: [&str; 9] = [
    "Datum",
    "Breitengrad",
    "Längengrad",
    "Unfalltyp",
    "Unfallschwere",
    "Jahr",
    "Monat",
    "Wochentag",
    "Stunde",
];

/// Errors that can occur while loading the dataset.
///
/// All of these are startup-fatal: the dataset is a one-time boot
/// dependency and the process does not serve requests without it.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The CSV structure itself is malformed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the header row.
    #[error("missing required column '{name}'")]
    MissingColumn {
        /// Name of the missing column.
        name: String,
    },

    /// A cell value could not be parsed.
    #[error("row {row}: invalid value '{value}' in column '{column}'")]
    InvalidField {
        /// 1-based data row number (excluding the header).
        row: usize,
        /// Column name.
        column: String,
        /// The offending cell value.
        value: String,
    },
}

/// One accident event from the dataset, after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Calendar date of the accident.
    pub date: NaiveDate,
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
    /// Normalized accident-type code. `None` when the raw label is outside
    /// the fixed eleven-entry table.
    pub accident_type: Option<AccidentType>,
    /// Normalized severity code. `None` when the raw label is outside the
    /// fixed three-entry table; such records never match a severity filter.
    pub severity: Option<Severity>,
    /// Calendar year.
    pub year: i32,
    /// German month abbreviation (`Jan`..`Dez`).
    pub month: String,
    /// Full German weekday name.
    pub weekday: Weekday,
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Involved-party flags, keyed by column name (`Fussgänger`,
    /// `Fahrrad`, `Motorrad`, and any further boolean columns present).
    pub parties: BTreeMap<String, bool>,
}

impl Record {
    /// Returns whether any of the named involved-party flags is set.
    ///
    /// An empty name list matches nothing (the empty OR).
    #[must_use]
    pub fn involves_any(&self, party_names: &[String]) -> bool {
        party_names
            .iter()
            .any(|name| self.parties.get(name).copied().unwrap_or(false))
    }
}

/// The full immutable set of accident records, loaded once per process.
#[derive(Debug, Clone)]
pub struct RecordCollection {
    records: Vec<Record>,
    party_columns: Vec<String>,
}

impl RecordCollection {
    /// Loads and normalizes the dataset from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the file is missing or any row is
    /// malformed. Callers treat this as startup-fatal.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        log::info!("Loading accident dataset from {}", path.display());
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Loads and normalizes the dataset from any reader.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the header is missing a required column
    /// or any row is malformed.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_owned())
            .collect();

        let column_index = |name: &str| -> Result<usize, DatasetError> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DatasetError::MissingColumn {
                    name: name.to_owned(),
                })
        };

        let date_idx = column_index("Datum")?;
        let lat_idx = column_index("Breitengrad")?;
        let lng_idx = column_index("Längengrad")?;
        let type_idx = column_index("Unfalltyp")?;
        let severity_idx = column_index("Unfallschwere")?;
        let year_idx = column_index("Jahr")?;
        let month_idx = column_index("Monat")?;
        let weekday_idx = column_index("Wochentag")?;
        let hour_idx = column_index("Stunde")?;

        // Every column outside the fixed schema is an involved-party flag.
        let party_columns: Vec<(usize, String)> = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| !FIXED_COLUMNS.contains(&h.as_str()))
            .map(|(i, h)| (i, h.clone()))
            .collect();

        let mut records = Vec::new();

        for (row_number, result) in csv_reader.records().enumerate() {
            let row = row_number + 1;
            let record = result?;
            let cell = |idx: usize| record.get(idx).unwrap_or("").trim();

            let invalid = |column: &str, value: &str| DatasetError::InvalidField {
                row,
                column: column.to_owned(),
                value: value.to_owned(),
            };

            let date = parsing::parse_date(cell(date_idx))
                .ok_or_else(|| invalid("Datum", cell(date_idx)))?;
            let latitude: f64 = cell(lat_idx)
                .parse()
                .map_err(|_| invalid("Breitengrad", cell(lat_idx)))?;
            let longitude: f64 = cell(lng_idx)
                .parse()
                .map_err(|_| invalid("Längengrad", cell(lng_idx)))?;
            let year: i32 = cell(year_idx)
                .parse()
                .map_err(|_| invalid("Jahr", cell(year_idx)))?;
            let weekday: Weekday = cell(weekday_idx)
                .parse()
                .map_err(|_| invalid("Wochentag", cell(weekday_idx)))?;
            let hour = parsing::parse_hour(cell(hour_idx))
                .ok_or_else(|| invalid("Stunde", cell(hour_idx)))?;

            // The one-time normalization pass: unmapped labels become an
            // explicit missing marker rather than keeping the raw string.
            let accident_type = AccidentType::normalize(cell(type_idx));
            let severity = Severity::normalize(cell(severity_idx));

            let mut parties = BTreeMap::new();
            for (idx, name) in &party_columns {
                let raw = cell(*idx);
                let flag = if raw.is_empty() {
                    false
                } else {
                    parsing::parse_bool(raw).ok_or_else(|| invalid(name, raw))?
                };
                parties.insert(name.clone(), flag);
            }

            records.push(Record {
                date,
                latitude,
                longitude,
                accident_type,
                severity,
                year,
                month: cell(month_idx).to_owned(),
                weekday,
                hour,
                parties,
            });
        }

        log::info!(
            "Loaded {} accident records ({} involved-party columns)",
            records.len(),
            party_columns.len()
        );

        Ok(Self {
            records,
            party_columns: party_columns.into_iter().map(|(_, name)| name).collect(),
        })
    }

    /// Returns the loaded records.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the involved-party column names in header order.
    #[must_use]
    pub fn party_columns(&self) -> &[String] {
        &self.party_columns
    }

    /// Returns the number of records in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
