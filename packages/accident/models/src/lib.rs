#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Accident category taxonomy types and severity definitions.
//!
//! This crate defines the canonical accident-type and severity code sets
//! used across the accident-map system, together with the fixed lookup
//! tables that normalize the verbose German labels of the raw dataset into
//! short codes. The label strings are preserved exactly as they appear in
//! the source data for compatibility.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Injury severity of an accident, normalized to one of three short codes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Severity {
    /// Light injuries (`Unfall mit Leichtverletzten`).
    Leicht,
    /// Severe injuries (`Unfall mit Schwerverletzten`).
    Schwer,
    /// Fatal (`Unfall mit Getöteten`).
    Tod,
}

impl Severity {
    /// Normalizes a raw severity label to its short code.
    ///
    /// Accepts either the verbose label from the raw dataset or an
    /// already-normalized code (so a second normalization pass is a
    /// no-op). Returns `None` for anything outside the fixed table.
    #[must_use]
    pub fn normalize(raw: &str) -> Option<Self> {
        match raw.trim() {
            "Unfall mit Leichtverletzten" | "Leicht" => Some(Self::Leicht),
            "Unfall mit Schwerverletzten" | "Schwer" => Some(Self::Schwer),
            "Unfall mit Getöteten" | "Tod" => Some(Self::Tod),
            _ => None,
        }
    }

    /// Returns the fixed map color for this severity.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Leicht => "green",
            Self::Schwer => "orange",
            Self::Tod => "red",
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Leicht, Self::Schwer, Self::Tod]
    }
}

/// Accident type, normalized to one of eleven short codes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum AccidentType {
    /// Turning accident (`Abbiegeunfall`).
    Abbiege,
    /// Rear-end collision (`Auffahrunfall`).
    Auffahr,
    /// Other (`Andere`).
    Andere,
    /// Merging accident (`Einbiegeunfall`).
    Einbiege,
    /// Head-on collision (`Frontalkollision`).
    Frontal,
    /// Pedestrian accident (`Fussgängerunfall`).
    #[serde(rename = "Fussgänger")]
    #[strum(serialize = "Fussgänger")]
    Fussgaenger,
    /// Parking accident (`Parkierunfall`).
    Parkier,
    /// Skid or self-caused accident (`Schleuder- oder Selbstunfall`).
    Schleuder,
    /// Animal accident (`Tierunfall`).
    Tier,
    /// Overtaking or lane change (`Überholunfall oder Fahrstreifenwechsel`).
    #[serde(rename = "Überholunfall")]
    #[strum(serialize = "Überholunfall")]
    Ueberholunfall,
    /// Crossing the roadway (`Überqueren der Fahrbahn`).
    #[serde(rename = "Fahrbahnüberquerung")]
    #[strum(serialize = "Fahrbahnüberquerung")]
    Fahrbahnueberquerung,
}

impl AccidentType {
    /// Normalizes a raw accident-type label to its short code.
    ///
    /// Accepts either the verbose label from the raw dataset or an
    /// already-normalized code. Returns `None` for anything outside the
    /// fixed eleven-entry table.
    #[must_use]
    pub fn normalize(raw: &str) -> Option<Self> {
        match raw.trim() {
            "Abbiegeunfall" | "Abbiege" => Some(Self::Abbiege),
            "Auffahrunfall" | "Auffahr" => Some(Self::Auffahr),
            "Andere" => Some(Self::Andere),
            "Einbiegeunfall" | "Einbiege" => Some(Self::Einbiege),
            "Frontalkollision" | "Frontal" => Some(Self::Frontal),
            "Fussgängerunfall" | "Fussgänger" => Some(Self::Fussgaenger),
            "Parkierunfall" | "Parkier" => Some(Self::Parkier),
            "Schleuder- oder Selbstunfall" | "Schleuder" => Some(Self::Schleuder),
            "Tierunfall" | "Tier" => Some(Self::Tier),
            "Überholunfall oder Fahrstreifenwechsel" | "Überholunfall" => {
                Some(Self::Ueberholunfall)
            }
            "Überqueren der Fahrbahn" | "Fahrbahnüberquerung" => Some(Self::Fahrbahnueberquerung),
            _ => None,
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Abbiege,
            Self::Auffahr,
            Self::Andere,
            Self::Einbiege,
            Self::Frontal,
            Self::Fussgaenger,
            Self::Parkier,
            Self::Schleuder,
            Self::Tier,
            Self::Ueberholunfall,
            Self::Fahrbahnueberquerung,
        ]
    }
}

/// Day of the week, in the fixed Montag-to-Sonntag order used by the
/// weekday-by-hour pivot. The discriminant order is the sort order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Weekday {
    /// Monday.
    Montag,
    /// Tuesday.
    Dienstag,
    /// Wednesday.
    Mittwoch,
    /// Thursday.
    Donnerstag,
    /// Friday.
    Freitag,
    /// Saturday.
    Samstag,
    /// Sunday.
    Sonntag,
}

impl Weekday {
    /// Returns all seven weekdays in fixed Montag-to-Sonntag order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Montag,
            Self::Dienstag,
            Self::Mittwoch,
            Self::Donnerstag,
            Self::Freitag,
            Self::Samstag,
            Self::Sonntag,
        ]
    }
}

/// German month abbreviations in calendar order, exactly as they appear in
/// the `Monat` column of the raw dataset.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
];
