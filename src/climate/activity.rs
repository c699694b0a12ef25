//! Dataset inspection behind the `inspect` subcommand.
//!
//! Reproduces the one-off analysis that chose the `/tobs` station and cutoff:
//! the station with the most measurements, and the date one year before the
//! last recorded day. The served constants are never re-derived from this.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::store::{Session, StationActivity, StoreError};

/// Summary of the observation dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetReport {
    pub station_count: usize,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    pub most_active: Option<StationActivity>,
    pub most_active_name: Option<String>,
    pub last_year_cutoff: Option<NaiveDate>,
}

/// The date 365 days before `max_date`, or `None` if it does not parse.
pub fn last_year_cutoff(max_date: &str) -> Option<NaiveDate> {
    let last = NaiveDate::parse_from_str(max_date, "%Y-%m-%d").ok()?;
    last.checked_sub_signed(Duration::days(365))
}

pub async fn inspect_dataset(session: &mut Session) -> Result<DatasetReport, StoreError> {
    let stations = session.list_stations().await?;
    let activity = session.station_activity().await?;
    let last_date = session.max_date().await?;

    let first_date = sqlx::query_scalar::<_, Option<String>>(
        "SELECT MIN(strftime('%Y-%m-%d', date)) FROM measurement",
    )
    .fetch_one(session.connection())
    .await?;

    let most_active = activity.into_iter().next();
    let most_active_name = most_active.as_ref().and_then(|a| {
        stations
            .iter()
            .find(|s| s.station == a.station)
            .map(|s| s.name.clone())
    });

    Ok(DatasetReport {
        station_count: stations.len(),
        first_date,
        last_year_cutoff: last_date.as_deref().and_then(last_year_cutoff),
        last_date,
        most_active,
        most_active_name,
    })
}
