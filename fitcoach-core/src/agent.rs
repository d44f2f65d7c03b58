//! Agent descriptors and guardrail results as reported by the backend.

use crate::wire::null_as_default;
use serde::{Deserialize, Deserializer, Serialize};

/// An agent the backend can route the conversation to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Agent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub handoffs: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tools: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub input_guardrails: Vec<String>,
}

/// Outcome of a backend-side input guardrail for the latest turn.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GuardrailCheck {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub input: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reasoning: String,
    #[serde(default = "default_passed", deserialize_with = "passed_or_default")]
    pub passed: bool,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub timestamp: Option<f64>,
}

fn default_passed() -> bool {
    true
}

/// A `null` verdict counts as passed, same as a missing one.
fn passed_or_default<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_else(default_passed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn agent_tolerates_missing_lists() {
        let agent: Agent = serde_json::from_value(json!({"name": "Escalation Agent"})).unwrap();
        assert_eq!(agent.name, "Escalation Agent");
        assert!(agent.tools.is_empty());
        assert!(agent.handoffs.is_empty());
    }

    #[test]
    fn guardrail_parses_backend_shape() {
        let check: GuardrailCheck = serde_json::from_value(json!({
            "id": "g1",
            "name": "Relevance Guardrail",
            "input": "tell me a joke",
            "reasoning": "off topic",
            "passed": false,
            "timestamp": 1718000000000.0
        }))
        .unwrap();
        assert!(!check.passed);
        assert_eq!(check.reasoning, "off topic");
        assert_eq!(check.timestamp, Some(1718000000000.0));
    }

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let agent: Agent = serde_json::from_value(json!({
            "name": "Main Planner",
            "description": null,
            "handoffs": null,
            "tools": null,
            "input_guardrails": ["Relevance Guardrail"]
        }))
        .unwrap();
        assert!(agent.handoffs.is_empty());
        assert!(agent.tools.is_empty());
        assert_eq!(agent.description, "");
        assert_eq!(agent.input_guardrails, vec!["Relevance Guardrail"]);

        let check: GuardrailCheck =
            serde_json::from_value(json!({"passed": null, "reasoning": null})).unwrap();
        assert_eq!(check.name, "");
        assert!(check.passed);
    }
}
