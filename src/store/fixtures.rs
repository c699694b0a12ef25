//! In-memory stores for unit tests.

use super::{Measurement, SqliteStore, Station};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

const SCHEMA: &[&str] = &[
    "CREATE TABLE station (
        id INTEGER PRIMARY KEY,
        station TEXT NOT NULL,
        name TEXT NOT NULL,
        latitude FLOAT NOT NULL,
        longitude FLOAT NOT NULL,
        elevation FLOAT NOT NULL
    )",
    "CREATE TABLE measurement (
        id INTEGER PRIMARY KEY,
        station TEXT NOT NULL,
        date TEXT NOT NULL,
        prcp FLOAT,
        tobs FLOAT NOT NULL
    )",
];

/// A single-connection pool so every session sees the same in-memory database.
async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}

/// A store with no tables at all.
pub(crate) async fn empty_store() -> SqliteStore {
    SqliteStore::from_pool(memory_pool().await)
}

pub(crate) async fn seeded_store(
    stations: &[Station],
    measurements: &[Measurement],
) -> SqliteStore {
    let pool = memory_pool().await;

    for ddl in SCHEMA {
        sqlx::query(ddl).execute(&pool).await.unwrap();
    }

    for s in stations {
        sqlx::query(
            "INSERT INTO station (station, name, latitude, longitude, elevation) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&s.station)
        .bind(&s.name)
        .bind(s.latitude)
        .bind(s.longitude)
        .bind(s.elevation)
        .execute(&pool)
        .await
        .unwrap();
    }

    for m in measurements {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
            .bind(&m.station)
            .bind(&m.date)
            .bind(m.prcp)
            .bind(m.tobs)
            .execute(&pool)
            .await
            .unwrap();
    }

    SqliteStore::from_pool(pool)
}

pub(crate) fn station(id: &str, name: &str) -> Station {
    Station {
        station: id.to_string(),
        name: name.to_string(),
        latitude: 21.2716,
        longitude: -157.8168,
        elevation: 3.0,
    }
}

pub(crate) fn measurement(station: &str, date: &str, prcp: Option<f64>, tobs: f64) -> Measurement {
    Measurement {
        station: station.to_string(),
        date: date.to_string(),
        prcp,
        tobs,
    }
}
