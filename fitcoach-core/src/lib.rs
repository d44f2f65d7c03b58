//! FitCoach Core - Chat Session Model
//!
//! Data types, the `/chat` wire contract and the merge rules that turn backend
//! responses into client-side session state. No I/O lives here; the terminal
//! client and the proxy both build on these types.

pub mod agent;
pub mod context;
pub mod endpoint;
pub mod event;
pub mod ids;
pub mod message;
pub mod session;
pub mod wire;
pub mod workout;

use chrono::{DateTime, Utc};

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

pub use agent::{Agent, GuardrailCheck};
pub use context::{is_truthy, summarize_value, SessionContext};
pub use endpoint::{
    resolve_backend_url, validate_chat_url, EndpointError, BACKEND_URL_ENV, DEFAULT_BACKEND_URL,
};
pub use event::{AgentEvent, EventKind};
pub use ids::{IdAllocator, LocalId};
pub use message::{Message, MessageBody, Role, WORKOUT_SELECTOR_SENTINEL};
pub use session::{ChatSession, MergeOutcome};
pub use wire::{ChatRequest, ChatResponse, WireEvent, WireMessage};
pub use workout::{
    find_workout, selection_label, Intensity, Workout, WorkoutCategory, WORKOUT_CATEGORIES,
};
