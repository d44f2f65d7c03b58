//! Reusable widget components.

pub mod detail;
pub mod status;

pub use detail::{DetailField, DetailPanel};
pub use status::StatusIndicator;
