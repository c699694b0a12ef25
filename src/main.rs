//! CLI entry point for the climate API.
//!
//! Serves the read-only HTTP API by default, and offers subcommands for
//! running a temperature report or inspecting the dataset from the shell.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use climate_api::api::{self, AppState};
use climate_api::climate::activity::inspect_dataset;
use climate_api::climate::{TemperatureSummary, calc_temps, temperature_report};
use climate_api::config::{Settings, TOBS_SINCE_DATE, TOBS_STATION_ID};
use climate_api::output::print_json;
use climate_api::store::SqliteStore;
use std::ffi::OsStr;
use std::net::SocketAddr;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "climate_api")]
#[command(about = "Read-only JSON API over the Hawaii climate dataset", long_about = None)]
struct Cli {
    /// Database URL (overrides DATABASE_URL)
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (the default when no subcommand is given)
    Serve {
        /// Address to listen on (overrides BIND_ADDR)
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },
    /// Print the TMIN/TAVG/TMAX report for a date range
    Temps {
        /// First date, YYYY-MM-DD
        #[arg(short, long)]
        start: String,

        /// Last date, YYYY-MM-DD (defaults to the last date in the store)
        #[arg(short, long)]
        end: Option<String>,
    },
    /// Summarize the dataset and check the /tobs constants against it
    Inspect,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let mut settings = Settings::from_env()?;
    let cli = Cli::parse();
    if let Some(url) = cli.database_url {
        settings.database_url = url;
    }

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = Path::new(&settings.log_file_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&settings.log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("climate_api.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(
            EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        );

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(
            EnvFilter::try_from_env("RUST_LOG_JSON").unwrap_or_else(|_| EnvFilter::new("debug")),
        );

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let store = SqliteStore::connect(&settings.database_url)
        .await
        .with_context(|| format!("Failed to open store at {}", settings.database_url))?;

    match cli.command.unwrap_or(Commands::Serve { bind: None }) {
        Commands::Serve { bind } => {
            let addr = bind.unwrap_or(settings.bind_addr);
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?;

            api::serve(listener, AppState::new(store), shutdown_signal()).await?;
            info!("Server stopped");
        }
        Commands::Temps { start, end } => {
            let mut session = store.session().await?;
            let end = match end {
                Some(end) => Some(end),
                None => session.max_date().await?,
            };
            let summary = match end.as_deref() {
                Some(end) => calc_temps(&mut session, &start, end).await?,
                None => TemperatureSummary::default(),
            };
            drop(session);

            print_json(&temperature_report(&start, end.as_deref(), summary))?;
        }
        Commands::Inspect => {
            let mut session = store.session().await?;
            let report = inspect_dataset(&mut session).await?;
            drop(session);

            info!(
                stations = report.station_count,
                first_date = report.first_date.as_deref().unwrap_or("-"),
                last_date = report.last_date.as_deref().unwrap_or("-"),
                "Dataset summary"
            );

            match &report.most_active {
                Some(active) if active.station != TOBS_STATION_ID => warn!(
                    most_active = %active.station,
                    configured = TOBS_STATION_ID,
                    "Most active station differs from the /tobs station"
                ),
                Some(active) => info!(
                    station = %active.station,
                    observations = active.observations,
                    "Most active station"
                ),
                None => warn!("No measurements in store"),
            }

            if let Some(cutoff) = report.last_year_cutoff {
                let cutoff = cutoff.format("%Y-%m-%d").to_string();
                if cutoff != TOBS_SINCE_DATE {
                    warn!(
                        derived = %cutoff,
                        configured = TOBS_SINCE_DATE,
                        "Last-year cutoff differs from the /tobs cutoff"
                    );
                }
            }

            print_json(&report)?;
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
