//! Proxy configuration from the environment.

use crate::error::ProxyError;
use fitcoach_core::endpoint::{resolve_backend_url, validate_chat_url};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "FITCOACH_PROXY_ADDR";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub listen_addr: SocketAddr,
    /// Full backend `/chat` URL requests are forwarded to.
    pub backend_url: String,
}

impl ProxyConfig {
    pub fn from_env() -> Result<Self, ProxyError> {
        let listen = std::env::var(LISTEN_ADDR_ENV).ok();
        Self::from_parts(listen.as_deref(), resolve_backend_url())
    }

    pub fn from_parts(listen_addr: Option<&str>, backend_url: String) -> Result<Self, ProxyError> {
        let raw = listen_addr
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_LISTEN_ADDR);
        let listen_addr = raw
            .parse::<SocketAddr>()
            .map_err(|e| ProxyError::Config(format!("{}={}: {}", LISTEN_ADDR_ENV, raw, e)))?;
        validate_chat_url(&backend_url).map_err(|e| ProxyError::Config(e.to_string()))?;
        Ok(Self {
            listen_addr,
            backend_url,
        })
    }
}
