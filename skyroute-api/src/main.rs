use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use anyhow::Context;
use skyroute_api::{app, AppState};
use skyroute_store::{app_config::Config, FlightLoader, JsonFlightRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skyroute_api=debug,skyroute_store=debug,skyroute_offer=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting SkyRoute API on port {}", config.server.port);

    let repository = JsonFlightRepository::new(&config.data.flights_path)
        .with_latency(Duration::from_millis(config.data.simulated_latency_ms));

    let app_state = AppState::new(config.search.clone(), config.cabin.clone());
    // Requests are served while the dataset is still loading
    app_state.spawn_loader(FlightLoader::new(Arc::new(repository)));

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
