//! Route handlers. Each one opens its own store session, runs one or two
//! reads and releases the session before the response is serialized.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::Html;
use tracing::{debug, info};

use crate::api::AppState;
use crate::api::error::ApiError;
use crate::climate::{ReportEntry, TemperatureSummary, calc_temps, temperature_report};
use crate::config::{TOBS_SINCE_DATE, TOBS_STATION_ID};
use crate::store::{Precipitation, TemperatureObservation};

const HOME_PAGE: &str = "Available Routes:<br/>\
/api/v1.0/precipitation<br/>\
/api/v1.0/stations<br/>\
/api/v1.0/tobs<br/>\
/api/v1.0/&lt;start&gt;<br/>\
/api/v1.0/&lt;start&gt;/&lt;end&gt;";

/// Lists the available API routes.
pub async fn home() -> Html<&'static str> {
    info!("Received request for home page");
    Html(HOME_PAGE)
}

#[tracing::instrument(skip(state))]
pub async fn precipitation(
    State(state): State<AppState>,
) -> Result<Json<Vec<Precipitation>>, ApiError> {
    info!("Received precipitation API request");

    let mut session = state.store.session().await?;
    let rows = session.list_precipitation().await?;
    drop(session);

    debug!(rows = rows.len(), "Precipitation rows loaded");
    Ok(Json(rows))
}

#[tracing::instrument(skip(state))]
pub async fn stations(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    info!("Received station name API request");

    let mut session = state.store.session().await?;
    let names = session.list_station_names().await?;
    drop(session);

    Ok(Json(names))
}

/// Temperature observations of [`TOBS_STATION_ID`] since [`TOBS_SINCE_DATE`].
#[tracing::instrument(skip(state))]
pub async fn tobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<TemperatureObservation>>, ApiError> {
    info!(
        station = TOBS_STATION_ID,
        since = TOBS_SINCE_DATE,
        "Received temperature observations API request"
    );

    let mut session = state.store.session().await?;
    let rows = session
        .list_temperatures_for_station(TOBS_STATION_ID, TOBS_SINCE_DATE)
        .await?;
    drop(session);

    Ok(Json(rows))
}

/// TMIN/TAVG/TMAX from `start` through the last date in the store.
#[tracing::instrument(skip(state))]
pub async fn temps_from(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> Result<Json<Vec<ReportEntry>>, ApiError> {
    info!("Received temperatures API request with start date");

    let mut session = state.store.session().await?;
    let end = session.max_date().await?;
    let summary = match end.as_deref() {
        Some(end) => calc_temps(&mut session, &start, end).await?,
        None => TemperatureSummary::default(),
    };
    drop(session);

    Ok(Json(temperature_report(&start, end.as_deref(), summary)))
}

/// TMIN/TAVG/TMAX over `start..=end`.
#[tracing::instrument(skip(state))]
pub async fn temps_between(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<ReportEntry>>, ApiError> {
    info!("Received temperatures API request with start and end dates");

    let mut session = state.store.session().await?;
    let summary = calc_temps(&mut session, &start, &end).await?;
    drop(session);

    Ok(Json(temperature_report(&start, Some(&end), summary)))
}
