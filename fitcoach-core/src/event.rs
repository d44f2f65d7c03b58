//! Backend-reported agent activity.

use crate::ids::LocalId;
use crate::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Message,
    Handoff,
    ToolCall,
    ToolOutput,
    ContextUpdate,
    Unknown,
}

impl EventKind {
    pub fn from_wire(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "message" => EventKind::Message,
            "handoff" => EventKind::Handoff,
            "tool_call" => EventKind::ToolCall,
            "tool_output" => EventKind::ToolOutput,
            "context_update" => EventKind::ContextUpdate,
            _ => EventKind::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Message => "message",
            EventKind::Handoff => "handoff",
            EventKind::ToolCall => "tool call",
            EventKind::ToolOutput => "tool output",
            EventKind::ContextUpdate => "context update",
            EventKind::Unknown => "event",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the append-only event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentEvent {
    pub id: LocalId,
    pub remote_id: Option<String>,
    pub timestamp: Timestamp,
    pub kind: EventKind,
    pub agent: Option<String>,
    pub content: String,
    /// Free-form payload (handoff endpoints, tool arguments, context changes).
    pub metadata: Option<serde_json::Value>,
}

impl AgentEvent {
    /// One-line description for the event log.
    pub fn summary(&self) -> String {
        let agent = self.agent.as_deref().unwrap_or("unknown");
        match self.kind {
            EventKind::ContextUpdate => {
                let changed = self
                    .metadata
                    .as_ref()
                    .and_then(|meta| meta.get("changes"))
                    .and_then(|changes| changes.as_object())
                    .map(|changes| changes.keys().cloned().collect::<Vec<_>>().join(", "))
                    .unwrap_or_default();
                if changed.is_empty() {
                    format!("{agent}: context updated")
                } else {
                    format!("{agent}: context updated ({changed})")
                }
            }
            _ if self.content.is_empty() => format!("{agent}: {}", self.kind),
            _ => format!("{agent}: {} {}", self.kind, self.content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::IdAllocator;
    use chrono::Utc;
    use serde_json::json;

    fn event(kind: EventKind, content: &str, metadata: Option<serde_json::Value>) -> AgentEvent {
        AgentEvent {
            id: IdAllocator::new().next_id(),
            remote_id: None,
            timestamp: Utc::now(),
            kind,
            agent: Some("Main Planner".to_string()),
            content: content.to_string(),
            metadata,
        }
    }

    #[test]
    fn unknown_kinds_fall_back() {
        assert_eq!(EventKind::from_wire("tool_call"), EventKind::ToolCall);
        assert_eq!(EventKind::from_wire("HANDOFF"), EventKind::Handoff);
        assert_eq!(EventKind::from_wire("telemetry"), EventKind::Unknown);
    }

    #[test]
    fn handoff_summary_includes_content() {
        let ev = event(EventKind::Handoff, "Main Planner -> Nutrition Expert", None);
        assert_eq!(
            ev.summary(),
            "Main Planner: handoff Main Planner -> Nutrition Expert"
        );
    }

    #[test]
    fn context_update_summary_lists_changed_keys() {
        let ev = event(
            EventKind::ContextUpdate,
            "",
            Some(json!({"changes": {"diet_preferences": "vegan"}})),
        );
        assert_eq!(ev.summary(), "Main Planner: context updated (diet_preferences)");
    }
}
