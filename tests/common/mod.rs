use climate_api::api::{self, AppState};
use climate_api::store::SqliteStore;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::net::SocketAddr;

pub async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory store")
}

/// Creates the two tables and inserts `stations` as `(id, name)` and
/// `measurements` as `(station, date, prcp, tobs)`.
pub async fn seed(
    pool: &SqlitePool,
    stations: &[(&str, &str)],
    measurements: &[(&str, &str, Option<f64>, f64)],
) {
    sqlx::query(
        "CREATE TABLE station (id INTEGER PRIMARY KEY, station TEXT, name TEXT, \
         latitude FLOAT, longitude FLOAT, elevation FLOAT)",
    )
    .execute(pool)
    .await
    .unwrap();
    sqlx::query(
        "CREATE TABLE measurement (id INTEGER PRIMARY KEY, station TEXT, date TEXT, \
         prcp FLOAT, tobs FLOAT)",
    )
    .execute(pool)
    .await
    .unwrap();

    for (id, name) in stations {
        sqlx::query(
            "INSERT INTO station (station, name, latitude, longitude, elevation) \
             VALUES (?, ?, 21.3331, -157.8025, 152.4)",
        )
        .bind(*id)
        .bind(*name)
        .execute(pool)
        .await
        .unwrap();
    }

    for (station, date, prcp, tobs) in measurements {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
            .bind(*station)
            .bind(*date)
            .bind(*prcp)
            .bind(*tobs)
            .execute(pool)
            .await
            .unwrap();
    }
}

/// Binds the API on an ephemeral port and returns its base URL.
pub async fn spawn_app(pool: SqlitePool) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    let state = AppState::new(SqliteStore::from_pool(pool));
    tokio::spawn(api::serve(listener, state, std::future::pending()));

    format!("http://{addr}")
}

pub async fn get_text(url: &str) -> (reqwest::StatusCode, String) {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let resp = client.get(url).send().await.unwrap();
    let status = resp.status();
    (status, resp.text().await.unwrap())
}

pub async fn get_json(url: &str) -> (reqwest::StatusCode, serde_json::Value) {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let resp = client.get(url).send().await.unwrap();
    let status = resp.status();
    let body = resp.json().await.unwrap();
    (status, body)
}
