//! Client-side chat session state and the merge rules for backend responses.
//!
//! A session has two triggers, boot and user submit, and both funnel through
//! [`ChatSession::merge`]. Lists the backend owns (agents, guardrails,
//! context) are replaced wholesale; the transcript and the event log only grow.

use crate::agent::{Agent, GuardrailCheck};
use crate::context::SessionContext;
use crate::event::{AgentEvent, EventKind};
use crate::ids::IdAllocator;
use crate::message::{Message, MessageBody, Role};
use crate::wire::{parse_timestamp, ChatRequest, ChatResponse, WireEvent, WireMessage};
use crate::Timestamp;
use chrono::Utc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MergeMode {
    /// Boot response: the event log is taken as-is.
    Snapshot,
    /// Reply to a submit: events are appended.
    Incremental,
}

/// What a merge changed, for the caller to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeOutcome {
    pub messages_added: usize,
    pub events_added: usize,
    /// An appended assistant message asked for the workout selector.
    pub workout_selector_requested: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    messages: Vec<Message>,
    events: Vec<AgentEvent>,
    agents: Vec<Agent>,
    current_agent: Option<String>,
    guardrails: Vec<GuardrailCheck>,
    context: SessionContext,
    conversation_id: Option<String>,
    loading: bool,
    booted: bool,
    ids: IdAllocator,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn events(&self) -> &[AgentEvent] {
        &self.events
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn current_agent(&self) -> Option<&str> {
        self.current_agent.as_deref()
    }

    pub fn guardrails(&self) -> &[GuardrailCheck] {
        &self.guardrails
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation_id.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_booted(&self) -> bool {
        self.booted
    }

    /// Handshake request: empty message, current conversation id if known.
    pub fn boot_request(&self) -> ChatRequest {
        ChatRequest::new(self.conversation_id.clone().unwrap_or_default(), "")
    }

    /// Apply the boot response as the initial snapshot.
    ///
    /// `None` (the client failed) leaves the session untouched.
    pub fn apply_boot(&mut self, response: Option<ChatResponse>) -> Option<MergeOutcome> {
        let response = response?;
        self.booted = true;
        Some(self.merge(response, MergeMode::Snapshot))
    }

    /// Optimistically append the user's message and mark the session loading.
    ///
    /// Returns the request to send. The loading flag is advisory: a second
    /// submit while one is pending is not rejected here.
    pub fn begin_submit(&mut self, content: impl Into<String>) -> ChatRequest {
        let content = content.into();
        let message = Message {
            id: self.ids.next_id(),
            remote_id: None,
            content: content.clone(),
            role: Role::User,
            agent: None,
            timestamp: Utc::now(),
        };
        self.messages.push(message);
        self.loading = true;
        ChatRequest::new(self.conversation_id.clone().unwrap_or_default(), content)
    }

    /// Merge the reply to a submit. Always clears the loading flag.
    pub fn apply_reply(&mut self, response: Option<ChatResponse>) -> Option<MergeOutcome> {
        self.loading = false;
        let response = response?;
        Some(self.merge(response, MergeMode::Incremental))
    }

    fn merge(&mut self, response: ChatResponse, mode: MergeMode) -> MergeOutcome {
        let mut outcome = MergeOutcome::default();
        let now = Utc::now();

        if self.conversation_id.is_none() {
            if let Some(id) = response.conversation_id.filter(|id| !id.is_empty()) {
                self.conversation_id = Some(id);
            }
        }
        if let Some(agent) = response.current_agent {
            self.current_agent = Some(agent);
        }
        if let Some(context) = response.context {
            self.context = SessionContext::new(context);
        }

        if let Some(events) = response.events {
            let stamped: Vec<AgentEvent> = events
                .into_iter()
                .map(|event| self.ingest_event(event, now))
                .collect();
            outcome.events_added = stamped.len();
            match mode {
                MergeMode::Snapshot => self.events = stamped,
                MergeMode::Incremental => self.events.extend(stamped),
            }
        }

        if let Some(agents) = response.agents {
            self.agents = agents;
        }
        if let Some(guardrails) = response.guardrails {
            self.guardrails = guardrails;
        }

        if let Some(messages) = response.messages {
            for message in messages {
                let message = self.ingest_message(message, now);
                if message.body() == MessageBody::WorkoutSelector {
                    outcome.workout_selector_requested = true;
                }
                self.messages.push(message);
                outcome.messages_added += 1;
            }
        }

        outcome
    }

    fn ingest_message(&mut self, wire: WireMessage, now: Timestamp) -> Message {
        Message {
            id: self.ids.next_id(),
            remote_id: wire.id,
            content: wire.content,
            role: Role::Assistant,
            agent: wire.agent,
            timestamp: parse_timestamp(wire.timestamp.as_ref()).unwrap_or(now),
        }
    }

    fn ingest_event(&mut self, wire: WireEvent, now: Timestamp) -> AgentEvent {
        AgentEvent {
            id: self.ids.next_id(),
            remote_id: wire.id,
            timestamp: parse_timestamp(wire.timestamp.as_ref()).unwrap_or(now),
            kind: wire
                .kind
                .as_deref()
                .map(EventKind::from_wire)
                .unwrap_or(EventKind::Unknown),
            agent: wire.agent,
            content: wire.content.unwrap_or_default(),
            metadata: wire.metadata,
        }
    }
}
