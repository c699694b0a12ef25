//! Data types produced by the temperature aggregation.

use serde::Serialize;
use sqlx::FromRow;

use crate::climate::utility::round_tenths;

/// Minimum, average and maximum `tobs` over a date range.
///
/// All three are `None` when no row falls inside the range.
#[derive(Debug, Clone, Copy, Default, PartialEq, FromRow)]
pub struct TemperatureSummary {
    pub tmin: Option<f64>,
    pub tavg: Option<f64>,
    pub tmax: Option<f64>,
}

/// Label of a temperature statistic in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Observation {
    #[serde(rename = "TMIN")]
    Min,
    #[serde(rename = "TAVG")]
    Avg,
    #[serde(rename = "TMAX")]
    Max,
}

/// One element of the temperature report array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportEntry {
    Range {
        start_date: String,
        end_date: Option<String>,
    },
    Temperature {
        observation: Observation,
        temperature: Option<f64>,
    },
}

/// Builds the four-element report: the date range, then TMIN, TAVG (rounded to
/// one decimal) and TMAX, always in that order.
pub fn temperature_report(
    start_date: &str,
    end_date: Option<&str>,
    summary: TemperatureSummary,
) -> Vec<ReportEntry> {
    vec![
        ReportEntry::Range {
            start_date: start_date.to_string(),
            end_date: end_date.map(str::to_string),
        },
        ReportEntry::Temperature {
            observation: Observation::Min,
            temperature: summary.tmin,
        },
        ReportEntry::Temperature {
            observation: Observation::Avg,
            temperature: round_tenths(summary.tavg),
        },
        ReportEntry::Temperature {
            observation: Observation::Max,
            temperature: summary.tmax,
        },
    ]
}
