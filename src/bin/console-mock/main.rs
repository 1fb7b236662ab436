//! # Console Mock Server CLI
//!
//! Command-line interface for the console mock server.
//!
//! Serves the built-in console handlers plus any stub routes from a fixture
//! file, with optional latency and error injection.

use std::io;
use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use console_mock::chain::HandlerChain;
use console_mock::http::{build_router, AppState};

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> io::Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let chain = HandlerChain::from_config(cli.fixtures.as_deref(), cli.users_delay)?;

    let state = AppState::builder()
        .with_chain(chain)
        .with_latency(cli.latency)
        .with_error_rate(cli.error_rate)
        .build()?;

    let app = build_router(state);

    let addr: SocketAddr = cli.listen.parse().map_err(io::Error::other)?;
    tracing::info!("starting console-mock on http://{addr}");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
