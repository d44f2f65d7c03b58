//! FitCoach Proxy
//!
//! Routes `POST /chat` to the backend selected by `BACKEND_URL` so the
//! client only ever talks to one origin.

pub mod config;
pub mod error;
pub mod routes;
pub mod telemetry;

pub use config::ProxyConfig;
pub use error::ProxyError;
pub use routes::{create_router, ProxyState};
