//! Tracing subscriber setup for the proxy.

use crate::error::ProxyError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init() -> Result<(), ProxyError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fitcoach_proxy=info,tower_http=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().json())
        .try_init()
        .map_err(|e| ProxyError::Config(format!("Failed to init subscriber: {}", e)))
}
