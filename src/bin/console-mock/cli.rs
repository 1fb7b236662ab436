//! Command-line interface definitions for the console mock server.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Command-line arguments for the console mock server.
#[derive(Debug, Parser)]
#[command(name = "console-mock")]
#[command(author, version, about = "Mock backend for the administration console")]
pub struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3001")]
    pub listen: String,

    /// Path to YAML file with extra stub routes
    #[arg(long)]
    pub fixtures: Option<PathBuf>,

    /// Delay before `GET /users` responds (e.g. 500ms, 1s)
    #[arg(long, value_parser = humantime::parse_duration, default_value = "1s")]
    pub users_delay: Duration,

    /// Artificial latency for each mocked request (e.g. 100ms, 1s)
    #[arg(long, value_parser = humantime::parse_duration, default_value = "0s")]
    pub latency: Duration,

    /// Error probability (0.0..1.0). When triggered, returns 503.
    #[arg(long, default_value_t = 0.0)]
    pub error_rate: f32,
}
