#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the accident map server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the dataset record types to allow independent evolution of the
//! API contract.

use accident_map_accident_models::{AccidentType, Severity, Weekday};
use accident_map_analytics_models::{PivotTable, YearRange};
use accident_map_dataset::Record;
use serde::{Deserialize, Serialize};

/// Shared query parameters of the map and table endpoints.
///
/// List-valued parameters are comma-separated (`severities=Leicht,Schwer`,
/// `parties=Fussgänger,Fahrrad`). Missing parameters fall back to the
/// dashboard defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterQueryParams {
    /// First year of the range.
    pub from: Option<i32>,
    /// Last year of the range.
    pub to: Option<i32>,
    /// Comma-separated severity codes to include.
    pub severities: Option<String>,
    /// Comma-separated involved-party column names to include.
    pub parties: Option<String>,
}

/// One accident as a map scatter point.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMapPoint {
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
    /// Severity code.
    pub severity: Severity,
    /// Fixed marker color for the severity.
    pub color: &'static str,
    /// Accident-type code (null when the raw label was unmapped).
    pub accident_type: Option<AccidentType>,
    /// Calendar year.
    pub year: i32,
    /// German month abbreviation.
    pub month: String,
    /// Full German weekday name.
    pub weekday: Weekday,
    /// Hour of day, 0-23.
    pub hour: u8,
}

impl ApiMapPoint {
    /// Builds a map point from a filtered-view record.
    ///
    /// Returns `None` for records without a normalized severity; the map
    /// colors by severity, and the filter engine never passes such
    /// records through anyway.
    #[must_use]
    pub fn from_record(record: &Record) -> Option<Self> {
        let severity = record.severity?;
        Some(Self {
            latitude: record.latitude,
            longitude: record.longitude,
            severity,
            color: severity.color(),
            accident_type: record.accident_type,
            year: record.year,
            month: record.month.clone(),
            weekday: record.weekday,
            hour: record.hour,
        })
    }
}

/// Response of the map endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapResponse {
    /// Scatter points of the filtered view.
    pub points: Vec<ApiMapPoint>,
    /// Size of the filtered view.
    pub total: usize,
}

/// Response of the table endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableResponse {
    /// The weekday-by-hour pivot.
    pub table: PivotTable,
    /// Size of the filtered view the pivot was built from.
    pub total: u64,
}

/// Filter bounds and defaults for the UI controls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaResponse {
    /// First selectable year.
    pub min_year: i32,
    /// Last selectable year.
    pub max_year: i32,
    /// Default year selection.
    pub default_years: YearRange,
    /// The three severity codes, all selected by default.
    pub severities: Vec<Severity>,
    /// Involved-party column names available in the dataset.
    pub parties: Vec<String>,
    /// Default involved-party selection.
    pub default_parties: Vec<String>,
    /// German month abbreviations in calendar order.
    pub months: Vec<String>,
}

/// Request body of the ask endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest {
    /// Free-text question about the dataset.
    pub question: String,
}

/// Response of the ask endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AskResponse {
    /// Answer text, or a literal `Error: <message>` string on failure.
    pub answer: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}
