//! JSON contract of the `POST /chat` endpoint.
//!
//! Every response field is optional. A missing field means "no update" for
//! the matching slice of session state, never an error. List entries that
//! cannot be decoded are dropped one by one so the rest of the reply still
//! applies.

use crate::agent::{Agent, GuardrailCheck};
use crate::Timestamp;
use chrono::{DateTime, TimeZone, Utc};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Request body. Field order is part of the contract: `conversation_id` first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub conversation_id: String,
    pub message: String,
}

impl ChatRequest {
    pub fn new(conversation_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            message: message.into(),
        }
    }

    /// The empty handshake that opens a conversation.
    pub fn is_handshake(&self) -> bool {
        self.message.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub current_agent: Option<String>,
    #[serde(default)]
    pub context: Option<Map<String, Value>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub events: Option<Vec<WireEvent>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub agents: Option<Vec<Agent>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub guardrails: Option<Vec<GuardrailCheck>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub messages: Option<Vec<WireMessage>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WireMessage {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default)]
    pub agent: Option<String>,
    #[serde(default)]
    pub timestamp: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WireEvent {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub agent: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub metadata: Option<Value>,
    #[serde(default)]
    pub timestamp: Option<Value>,
}

/// Accepts string or numeric ids; empty strings count as absent.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Treats an explicit `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes each entry on its own and skips the ones that don't fit `T`.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Some(entries) = Option::<Vec<Value>>::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(Some(
        entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect(),
    ))
}

/// Read a backend timestamp: numbers are epoch milliseconds, strings RFC 3339.
pub fn parse_timestamp(value: Option<&Value>) -> Option<Timestamp> {
    match value? {
        Value::Number(n) => {
            let millis = n.as_f64()?;
            if !millis.is_finite() {
                return None;
            }
            Utc.timestamp_millis_opt(millis as i64).single()
        }
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|ts| ts.with_timezone(&Utc)),
        _ => None,
    }
}
