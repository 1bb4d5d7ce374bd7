//! Deterministic command pipeline
//!
//! Parses typed commands and applies them to the world:
//! input -> dispatcher -> {movement, inventory, puzzle, describe}

pub mod classifier;
pub mod dispatcher;
pub mod inventory;
pub mod movement;
pub mod parser;
pub mod puzzle;

pub use classifier::is_critical_use;
pub use dispatcher::interpret;
pub use parser::{parse, ParsedCommand, Verb};

/// How a command was settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Fully decided by the local engines
    Resolved(String),
    /// Not decided locally. `fallback` is the local text to show when no
    /// richer narration replaces it.
    Unresolved { fallback: String },
}

impl Outcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Outcome::Resolved(_))
    }

    /// The text this outcome would display on its own
    pub fn message(&self) -> &str {
        match self {
            Outcome::Resolved(message) => message,
            Outcome::Unresolved { fallback } => fallback,
        }
    }
}
