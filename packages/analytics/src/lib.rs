#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Filter and aggregation engines for the accident map.
//!
//! The two public operations here are the core of the dashboard:
//! [`filter`] turns the immutable record collection plus a
//! [`FilterCriteria`](accident_map_analytics_models::FilterCriteria) into
//! an ephemeral filtered view, and [`aggregate`] turns that view into the
//! weekday-by-hour frequency pivot. Both are total functions: degenerate
//! criteria degrade to empty results, never errors.

mod filter;
mod pivot;

pub use filter::filter;
pub use pivot::aggregate;
