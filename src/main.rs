use anyhow::Context;
use app_tier_server::api::route::create_router;
use app_tier_server::api::setup::{setup, shutdown_signal};
use std::sync::Arc;
use tracing::info;

const BIND_ADDRESS: &str = "0.0.0.0:80";

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let app_state = setup()?;

    let app = create_router(Arc::new(app_state));

    let listener = tokio::net::TcpListener::bind(BIND_ADDRESS)
        .await
        .with_context(|| format!("Failed to bind to {}", BIND_ADDRESS))?;

    info!("🚀 Server listening on {}", BIND_ADDRESS);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .with_context(|| "Server error")?;

    Ok(())
}
