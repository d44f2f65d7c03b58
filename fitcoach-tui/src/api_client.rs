//! HTTP client for the single `/chat` endpoint.
//!
//! One attempt per call: no retry, no backoff, and no timeout unless the
//! config sets one. [`ChatClient::call_chat`] swallows every failure into
//! `None` so callers only have to handle "no update".

use crate::config::TuiConfig;
use fitcoach_core::wire::{ChatRequest, ChatResponse};
use reqwest::StatusCode;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Chat API error: {status} - {body}")]
    Status { status: StatusCode, body: String },
    #[error("Config error: {0}")]
    Config(String),
}

#[derive(Clone, Debug)]
pub struct ChatClient {
    client: reqwest::Client,
    chat_url: String,
}

impl ChatClient {
    pub fn new(config: &TuiConfig) -> Result<Self, ApiClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout_ms) = config.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder.build()?;
        Self::with_client(client, &config.chat_url)
    }

    pub fn with_client(client: reqwest::Client, chat_url: &str) -> Result<Self, ApiClientError> {
        fitcoach_core::validate_chat_url(chat_url)
            .map_err(|err| ApiClientError::Config(err.to_string()))?;
        Ok(Self {
            client,
            chat_url: chat_url.trim().to_string(),
        })
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }

    /// Send one message. An empty `message` is the boot handshake and an
    /// empty `conversation_id` starts a new conversation.
    ///
    /// Returns `None` on any failure after logging it.
    pub async fn call_chat(&self, message: &str, conversation_id: &str) -> Option<ChatResponse> {
        self.send(&ChatRequest::new(conversation_id, message)).await
    }

    /// Like [`Self::call_chat`] for a prepared request.
    pub async fn send(&self, request: &ChatRequest) -> Option<ChatResponse> {
        match self.try_send(request).await {
            Ok(response) => Some(response),
            Err(ApiClientError::Status { status, body }) => {
                tracing::error!(status = status.as_u16(), body = %body, "Chat API error");
                None
            }
            Err(err) => {
                tracing::error!(error = %err, "Error sending message");
                None
            }
        }
    }

    pub async fn try_call_chat(
        &self,
        message: &str,
        conversation_id: &str,
    ) -> Result<ChatResponse, ApiClientError> {
        self.try_send(&ChatRequest::new(conversation_id, message)).await
    }

    async fn try_send(&self, request: &ChatRequest) -> Result<ChatResponse, ApiClientError> {
        tracing::debug!(
            conversation_id = %request.conversation_id,
            handshake = request.is_handshake(),
            "POST chat"
        );
        let response = self.client.post(&self.chat_url).json(request).send().await?;
        self.parse_response(response).await
    }

    async fn parse_response(&self, response: reqwest::Response) -> Result<ChatResponse, ApiClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<ChatResponse>().await?)
        } else {
            let body = response.text().await?;
            Err(ApiClientError::Status { status, body })
        }
    }
}
