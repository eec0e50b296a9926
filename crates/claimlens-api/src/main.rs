//! ClaimLens backend entry point.
//!
//! Binary name: `clens`
//!
//! Parses CLI arguments, loads configuration, wires services, then
//! either starts the REST API server or runs the model-candidate probe
//! report.

mod http;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use state::AppState;

#[derive(Debug, Parser)]
#[command(name = "clens", version, about = "Policy document Q&A backend")]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml", env = "CLAIMLENS_CONFIG")]
    config: PathBuf,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the HTTP server (the default).
    Serve {
        /// Listen port (overrides the config file).
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },
    /// Probe every configured model candidate and report each outcome.
    Probe,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let config = claimlens_infra::config::load_config(&cli.config).await;
    let state = AppState::init(config);

    match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => serve(state, port).await,
        Commands::Probe => probe(&state).await,
    }
}

/// Run the HTTP server.
///
/// Candidate selection runs once up front; when it fails the server
/// still starts and selection is re-attempted lazily on the first
/// dependent request.
async fn serve(state: AppState, port_override: Option<u16>) -> anyhow::Result<()> {
    match state.connector.ensure_model().await {
        Ok(model) => tracing::info!(%model, "connected to model"),
        Err(e) => tracing::error!(error = %e, "no model candidate connected at startup"),
    }

    let port = port_override.unwrap_or(state.config.server.port);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let router = http::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server running");
    axum::serve(listener, router).await?;
    Ok(())
}

/// Probe every configured candidate and print a per-model report.
async fn probe(state: &AppState) -> anyhow::Result<()> {
    let report = state.connector.probe_report().await;
    for (model, outcome) in &report {
        match outcome {
            Ok(()) => println!("ok      {model}"),
            Err(e) => println!("failed  {model} ({e})"),
        }
    }
    if !report.iter().any(|(_, outcome)| outcome.is_ok()) {
        anyhow::bail!("no candidate model connected");
    }
    Ok(())
}
