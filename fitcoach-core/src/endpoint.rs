//! Backend `/chat` URL resolution shared by the client and the proxy.

use thiserror::Error;

/// Environment variable that selects the backend `/chat` URL.
pub const BACKEND_URL_ENV: &str = "BACKEND_URL";

/// Used when [`BACKEND_URL_ENV`] is unset or blank.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000/chat";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    #[error("chat URL must not be empty")]
    Empty,
    #[error("chat URL must start with http:// or https://: {0}")]
    UnsupportedScheme(String),
}

/// Resolve the backend URL from the environment, falling back to loopback.
pub fn resolve_backend_url() -> String {
    backend_url_from(std::env::var(BACKEND_URL_ENV).ok())
}

fn backend_url_from(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
}

pub fn validate_chat_url(url: &str) -> Result<(), EndpointError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(EndpointError::Empty);
    }
    let lower = url.to_ascii_lowercase();
    if !(lower.starts_with("http://") || lower.starts_with("https://")) {
        return Err(EndpointError::UnsupportedScheme(url.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_loopback() {
        assert_eq!(backend_url_from(None), DEFAULT_BACKEND_URL);
        assert_eq!(backend_url_from(Some("  ".to_string())), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn env_value_wins() {
        assert_eq!(
            backend_url_from(Some("https://coach.example.com/chat".to_string())),
            "https://coach.example.com/chat"
        );
    }

    #[test]
    fn validation_rejects_bad_urls() {
        assert_eq!(validate_chat_url(""), Err(EndpointError::Empty));
        assert!(matches!(
            validate_chat_url("ftp://host/chat"),
            Err(EndpointError::UnsupportedScheme(_))
        ));
        assert!(validate_chat_url(DEFAULT_BACKEND_URL).is_ok());
    }
}
