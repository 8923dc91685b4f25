//! Greeter Server - entry point.

use anyhow::Context;
use greeter_server::{app, config::ServerConfig, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "greeter_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env().context("invalid server configuration")?;
    tracing::info!(
        greeting = %config.greeting,
        count_calls = config.count_calls,
        "Loaded configuration"
    );

    let state = AppState::from_config(&config);
    let app = app(state, &config.frontend).context("invalid frontend configuration")?;

    tracing::info!("Starting server on {}", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
