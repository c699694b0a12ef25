//! Process settings and fixed dataset constants.

use std::net::SocketAddr;

use anyhow::{Context, Result};

/// Station served by `/api/v1.0/tobs`: the most active station in the dataset.
pub const TOBS_STATION_ID: &str = "USC00519281";

/// First date served by `/api/v1.0/tobs`: one year before the last recorded day.
pub const TOBS_SINCE_DATE: &str = "2016-08-23";

pub const DEFAULT_DATABASE_URL: &str = "sqlite://Resources/hawaii.sqlite";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_LOG_FILE_PATH: &str = "logs/climate_api.log";

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub log_file_path: String,
}

impl Settings {
    /// Reads `DATABASE_URL`, `BIND_ADDR` and `LOG_FILE_PATH`, falling back to
    /// the defaults above. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let bind = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let log_file_path =
            lookup("LOG_FILE_PATH").unwrap_or_else(|| DEFAULT_LOG_FILE_PATH.to_string());

        let bind_addr = bind
            .parse()
            .with_context(|| format!("BIND_ADDR '{bind}' is not a socket address"))?;

        Ok(Self {
            database_url,
            bind_addr,
            log_file_path,
        })
    }
}
