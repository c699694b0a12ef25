//! Record types read from the `station` and `measurement` tables.

use serde::Serialize;
use sqlx::FromRow;

/// A weather-recording location.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Station {
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// One daily observation for a station.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Measurement {
    pub station: String,
    /// Zero-padded `YYYY-MM-DD`.
    pub date: String,
    pub prcp: Option<f64>,
    pub tobs: f64,
}

/// A `(date, prcp)` pair as served by `/api/v1.0/precipitation`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Precipitation {
    pub date: String,
    pub prcp: Option<f64>,
}

/// A `(date, tobs)` pair as served by `/api/v1.0/tobs`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct TemperatureObservation {
    pub date: String,
    pub tobs: f64,
}

/// Number of measurement rows recorded by one station.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct StationActivity {
    pub station: String,
    pub observations: i64,
}
