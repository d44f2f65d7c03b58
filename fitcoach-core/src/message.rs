//! Transcript messages.

use crate::ids::LocalId;
use crate::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Assistant content that asks the client to show the workout selector
/// instead of rendering text.
pub const WORKOUT_SELECTOR_SENTINEL: &str = "DISPLAY_WORKOUT_SELECTOR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single transcript entry. Immutable once appended to a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: LocalId,
    /// Identifier supplied by the backend, if any. Not guaranteed unique.
    pub remote_id: Option<String>,
    pub content: String,
    pub role: Role,
    /// Name of the agent that produced an assistant message.
    pub agent: Option<String>,
    pub timestamp: Timestamp,
}

/// How a message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageBody<'a> {
    Text(&'a str),
    WorkoutSelector,
}

impl Message {
    pub fn body(&self) -> MessageBody<'_> {
        if self.role == Role::Assistant && self.content.trim() == WORKOUT_SELECTOR_SENTINEL {
            MessageBody::WorkoutSelector
        } else {
            MessageBody::Text(&self.content)
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::IdAllocator;
    use chrono::Utc;

    fn message(role: Role, content: &str) -> Message {
        Message {
            id: IdAllocator::new().next_id(),
            remote_id: None,
            content: content.to_string(),
            role,
            agent: None,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn sentinel_from_assistant_is_selector() {
        let msg = message(Role::Assistant, WORKOUT_SELECTOR_SENTINEL);
        assert_eq!(msg.body(), MessageBody::WorkoutSelector);
    }

    #[test]
    fn sentinel_typed_by_user_stays_text() {
        let msg = message(Role::User, WORKOUT_SELECTOR_SENTINEL);
        assert_eq!(msg.body(), MessageBody::Text(WORKOUT_SELECTOR_SENTINEL));
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
    }
}
