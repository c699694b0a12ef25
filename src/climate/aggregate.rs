use crate::climate::types::TemperatureSummary;
use crate::store::{Session, StoreError};

/// Computes TMIN, TAVG and TMAX over every measurement with
/// `start_date <= date <= end_date`.
///
/// Dates are compared as strings, so they must be zero-padded `YYYY-MM-DD`.
/// The bounds are not checked for order; a reversed or malformed range simply
/// matches nothing and yields an all-`None` summary.
pub async fn calc_temps(
    session: &mut Session,
    start_date: &str,
    end_date: &str,
) -> Result<TemperatureSummary, StoreError> {
    let summary = sqlx::query_as::<_, TemperatureSummary>(
        "SELECT CAST(MIN(tobs) AS REAL) AS tmin, \
                CAST(AVG(tobs) AS REAL) AS tavg, \
                CAST(MAX(tobs) AS REAL) AS tmax \
         FROM measurement WHERE date >= ? AND date <= ?",
    )
    .bind(start_date)
    .bind(end_date)
    .fetch_one(session.connection())
    .await?;

    Ok(summary)
}
