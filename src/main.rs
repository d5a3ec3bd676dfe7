use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use dokterbubung_api::{config::load_config, events, handlers, store::HospitalStore, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!("starting DokterBubung hospital API");

    let store = Arc::new(HospitalStore::new());
    if config.seed_demo_data {
        store.seed_demo_data().await;
    }

    let (event_sender, mut event_receiver) = events::channel(256);
    tokio::spawn(async move {
        while let Some(event) = event_receiver.recv().await {
            info!(event = ?event, "domain event");
        }
    });

    let state = AppState::new(store, event_sender);

    // The dashboard is a separate origin, so CORS stays wide open like the
    // original deployment.
    let app = handlers::app_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install ctrl-c handler");
        return;
    }
    info!("shutdown signal received");
}
