//! FitCoach proxy entry point.

use fitcoach_proxy::{create_router, telemetry, ProxyConfig, ProxyError, ProxyState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), ProxyError> {
    telemetry::init()?;
    let config = ProxyConfig::from_env()?;
    let state = ProxyState::new(reqwest::Client::new(), config.backend_url.clone());

    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!(
        listen_addr = %config.listen_addr,
        backend_url = %config.backend_url,
        "FitCoach proxy listening"
    );
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
