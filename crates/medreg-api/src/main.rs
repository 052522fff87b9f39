//! # medreg Server Entry Point
//!
//! Wires the Federal Register client, the deadline service, and the Axum
//! router together and serves them.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use medreg_api::AppState;
use medreg_core::SystemClock;
use medreg_federal::{FederalRegisterClient, FEDERAL_REGISTER_API};
use medreg_service::{DeadlineService, FederalSource};

/// medreg API server — healthcare regulatory deadline aggregation.
#[derive(Parser, Debug)]
#[command(name = "medreg-server", version, about)]
struct Args {
    /// Socket address to listen on.
    #[arg(long, env = "MEDREG_BIND", default_value = "0.0.0.0:8080")]
    bind: String,

    /// Base URL of the Federal Register API.
    #[arg(long, env = "MEDREG_FEDERAL_REGISTER_URL", default_value = FEDERAL_REGISTER_API)]
    federal_register_url: String,

    /// Per-request timeout for upstream calls, in seconds.
    #[arg(long, env = "MEDREG_UPSTREAM_TIMEOUT_SECS", default_value_t = 10)]
    upstream_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let client = FederalRegisterClient::with_base_url(
        &args.federal_register_url,
        Duration::from_secs(args.upstream_timeout_secs),
    )?;
    let service = Arc::new(DeadlineService::new(
        Arc::new(FederalSource::new(client)),
        Arc::new(SystemClock),
    ));

    let app = medreg_api::router(AppState::new(service))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    info!(bind = %args.bind, "medreg server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
