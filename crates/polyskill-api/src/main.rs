//! Polyskill webhook server entry point.
//!
//! Binary name: `polyskill`
//!
//! Parses CLI arguments, loads configuration and secrets, then serves
//! the dialog webhook over HTTP.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use state::AppState;

mod http;
mod state;

#[derive(Parser)]
#[command(name = "polyskill", version, about = "Multi-skill dialog webhook server")]
struct Cli {
    /// Path to the server configuration file.
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,polyskill=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let config = polyskill_infra::config::load_server_config(&cli.config)?;
    let state = AppState::init(&config)?;

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "webhook server listening");
    axum::serve(listener, http::router::build_router(state)).await?;

    Ok(())
}
