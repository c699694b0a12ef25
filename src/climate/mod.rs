//! Temperature aggregation and dataset inspection.
//!
//! [`calc_temps`](aggregate::calc_temps) runs the min/avg/max query over a
//! date range and [`temperature_report`](types::temperature_report) shapes the
//! result into the JSON array served by the API.

pub mod activity;
pub mod aggregate;
pub mod types;
pub mod utility;

pub use aggregate::calc_temps;
pub use types::{ReportEntry, TemperatureSummary, temperature_report};
