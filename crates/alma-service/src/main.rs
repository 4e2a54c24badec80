use std::time::Duration;

use alma_service::{create_router, AppState, ServiceConfig};
use chrono::Utc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    let state = AppState::new(&config);

    // Periodic sweep of idle sessions.
    let sessions = state.sessions.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(600));
        loop {
            interval.tick().await;
            if let Err(err) = sessions.cleanup_expired(Utc::now()) {
                warn!(error = %err, "Session cleanup failed");
            }
        }
    });

    let app = create_router(state, &config);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(addr = %config.listen_addr, "ALMA Bias Checker service listening");
    axum::serve(listener, app).await?;

    Ok(())
}
