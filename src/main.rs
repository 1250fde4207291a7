mod cli;
mod config;
mod controllers;
mod datasource;
mod models;
mod routes;
mod services;
mod utils;

use crate::cli::{Cli, Command};
use crate::config::loader::Config;
use crate::routes::router::AppState;
use crate::services::stations::Stations;
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    datasource::fs::init_fs(&config).await?;
    let pool = datasource::db::init_db(&config).await?;
    let store = services::storage::from_config(&config)?;
    let stations = Stations::load(config.stations_file.as_deref())?;
    tracing::info!("{} stations loaded", stations.names().len());

    let addr = format!("{}:{}", config.host, config.port);
    let app = routes::router::create_routes(AppState {
        pool,
        config,
        store,
        stations: Arc::new(stations),
    });

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(Config::load(&cli.config)?).await,
        Command::Submit(args) => cli::submit(args).await,
    }
}
