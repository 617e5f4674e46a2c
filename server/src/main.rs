use anyhow::Context;
use server::{config::ServerConfig, routes, server_state::ServerState, trail_store::{self, TrailStore}};
use std::{fs::OpenOptions, net::SocketAddr, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    std::fs::create_dir_all("server/log").context("Failed to create log directory")?;
    let log_file = "server/log/server.log";

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .context("Failed to open log file")?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| format!("{}=trace", env!("CARGO_CRATE_NAME")).into())
        )
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(file))
        .init();

    tracing::info!("Starting server...");

    let config = ServerConfig::from_env()?;
    let trails = TrailStore::new();

    if let Some(seed_file) = &config.seed_file {
        for new_trail in trail_store::load_seed(seed_file).await? {
            if let Err(err) = trails.insert(new_trail).await {
                tracing::warn!("Skipping seed trail: {err}");
            }
        }
        if trails.is_empty().await {
            tracing::warn!("Seed file {} had no usable trails", seed_file.display());
        } else {
            tracing::info!("Seeded {} trails from {}", trails.len().await, seed_file.display());
        }
    }

    let addr = SocketAddr::from((config.host, config.port));
    let server_state = Arc::new(ServerState { config, trails });
    let app = routes::router(server_state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
