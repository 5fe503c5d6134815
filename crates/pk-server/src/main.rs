//! ProbKit server — stateless probability/statistics API.
//!
//! Wraps the dispatch engine in a small JSON REST surface so that thin
//! clients (dashboards, notebooks) can run calculations without linking
//! the crates directly.
//!
//! # Endpoints
//!
//! - `POST /v1/calculate` — CalculationRequest JSON → CalculationOutput JSON
//! - `GET  /v1/health`    — server status and version

mod routes;

use std::net::SocketAddr;
use std::time::Instant;

use axum::Router;
use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

/// ProbKit calculation server — probability and statistics over HTTP.
#[derive(Parser, Debug)]
#[command(name = "probkit-server", version = pk_core::VERSION, about)]
struct Cli {
    /// Port to listen on.
    #[arg(short, long, default_value = "3900")]
    port: u16,

    /// Bind address.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
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
    let started = Instant::now();

    let app: Router = routes::router(started)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    tracing::info!("probkit-server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
