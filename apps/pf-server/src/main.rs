//! Physioflow server — dose-response simulations over HTTP.
//!
//! # Endpoints
//!
//! - `POST /v1/simulate`       — simulation request JSON → time-series JSON
//! - `POST /v1/simulate/batch` — ordered request array → ordered response array
//! - `GET  /v1/health`         — server status, version, uptime

mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use clap::Parser;
use pf_solver::{Solver, SolverConfig};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use state::AppState;

/// Physioflow simulation server — dose-response time series over HTTP.
#[derive(Parser, Debug)]
#[command(name = "pf-server", version, about)]
struct Cli {
    /// Bind address.
    #[arg(long, env = "PHYSIOFLOW_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(short, long, env = "PHYSIOFLOW_PORT", default_value = "8080")]
    port: u16,

    /// Worker pool size ceiling for day and batch dispatch.
    #[arg(long, env = "PHYSIOFLOW_MAX_CONCURRENCY", default_value = "4")]
    max_concurrency: usize,

    /// Simulated-day length passed to the models, in days.
    #[arg(long, default_value = "1.0")]
    time_step_days: f64,

    /// Per-request compute budget in seconds. A request still queued when
    /// the budget runs out is rejected before any work is scheduled.
    #[arg(long, default_value = "30")]
    timeout_s: u64,

    /// Maximum request body size in MiB (applies to all endpoints).
    #[arg(long, default_value = "16")]
    max_body_mb: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let cli = Cli::parse();

    let solver = Solver::new(SolverConfig {
        time_step_days: cli.time_step_days,
        max_concurrency: cli.max_concurrency,
        ..SolverConfig::default()
    });

    let state = Arc::new(AppState::new(solver, Duration::from_secs(cli.timeout_s)));

    let app = Router::new()
        .merge(routes::router())
        .layer(DefaultBodyLimit::max(cli.max_body_mb * 1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    tracing::info!(%addr, version = env!("CARGO_PKG_VERSION"), "pf-server starting");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped cleanly");
    Ok(())
}

/// Resolves when SIGINT or SIGTERM arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received, draining");
}
