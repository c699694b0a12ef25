//! Read-only access to the observation store.
//!
//! [`SqliteStore`] owns the connection pool and checks the schema once at
//! startup. [`Session`] is one pooled connection borrowed for the length of a
//! request; it goes back to the pool when dropped, so every exit path releases
//! it.

mod error;
pub mod models;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::StoreError;
pub use models::{Measurement, Precipitation, Station, StationActivity, TemperatureObservation};

use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqliteConnection, SqlitePool};
use std::str::FromStr;
use tracing::{debug, info};

/// Tables the service reads from. Both must exist.
pub const REQUIRED_TABLES: [&str; 2] = ["station", "measurement"];

#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens `database_url` read-only and verifies the expected tables exist.
    ///
    /// The database file is never created; a missing file is reported as
    /// [`StoreError::Unavailable`].
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        let store = Self { pool };
        store.verify_schema().await?;

        info!(database_url, "Connected to observation store");
        Ok(store)
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fails with [`StoreError::MissingTable`] for the first absent table.
    pub async fn verify_schema(&self) -> Result<(), StoreError> {
        for table in REQUIRED_TABLES {
            let found: Option<String> = sqlx::query_scalar(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?",
            )
            .bind(table)
            .fetch_optional(&self.pool)
            .await?;

            if found.is_none() {
                return Err(StoreError::MissingTable(table));
            }
        }

        debug!("Store schema verified");
        Ok(())
    }

    /// Borrows one connection from the pool for a short-lived query session.
    pub async fn session(&self) -> Result<Session, StoreError> {
        let conn = self.pool.acquire().await?;
        Ok(Session { conn })
    }
}

/// A pooled connection scoped to a single request.
pub struct Session {
    conn: PoolConnection<Sqlite>,
}

impl Session {
    pub(crate) fn connection(&mut self) -> &mut SqliteConnection {
        &mut *self.conn
    }

    /// Every `(date, prcp)` pair in the measurement table, in storage order.
    pub async fn list_precipitation(&mut self) -> Result<Vec<Precipitation>, StoreError> {
        let rows = sqlx::query_as::<_, Precipitation>("SELECT date, prcp FROM measurement")
            .fetch_all(self.connection())
            .await?;
        Ok(rows)
    }

    /// One name per station row.
    pub async fn list_station_names(&mut self) -> Result<Vec<String>, StoreError> {
        let names = sqlx::query_scalar::<_, String>("SELECT name FROM station")
            .fetch_all(self.connection())
            .await?;
        Ok(names)
    }

    pub async fn list_stations(&mut self) -> Result<Vec<Station>, StoreError> {
        let stations = sqlx::query_as::<_, Station>(
            "SELECT station, name, latitude, longitude, elevation FROM station",
        )
        .fetch_all(self.connection())
        .await?;
        Ok(stations)
    }

    /// Temperature observations for `station_id` on or after `since_date`.
    pub async fn list_temperatures_for_station(
        &mut self,
        station_id: &str,
        since_date: &str,
    ) -> Result<Vec<TemperatureObservation>, StoreError> {
        let rows = sqlx::query_as::<_, TemperatureObservation>(
            "SELECT date, tobs FROM measurement WHERE date >= ? AND station = ?",
        )
        .bind(since_date)
        .bind(station_id)
        .fetch_all(self.connection())
        .await?;
        Ok(rows)
    }

    /// The latest date in the measurement table, or `None` when it is empty.
    pub async fn max_date(&mut self) -> Result<Option<String>, StoreError> {
        let date = sqlx::query_scalar::<_, Option<String>>(
            "SELECT MAX(strftime('%Y-%m-%d', date)) FROM measurement",
        )
        .fetch_one(self.connection())
        .await?;
        Ok(date)
    }

    /// Measurement counts per station, most active first.
    pub async fn station_activity(&mut self) -> Result<Vec<StationActivity>, StoreError> {
        let rows = sqlx::query_as::<_, StationActivity>(
            "SELECT station, COUNT(*) AS observations FROM measurement \
             GROUP BY station ORDER BY observations DESC, station ASC",
        )
        .fetch_all(self.connection())
        .await?;
        Ok(rows)
    }
}
