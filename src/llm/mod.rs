//! External narrator collaborator
//!
//! Descriptive commands the engines cannot settle are described by an LLM.
//! The narrator only produces text; puzzle state is owned by `command`.

pub mod client;
pub mod context;
pub mod narrator;

pub use client::LlmClient;
pub use context::NarrationRequest;
pub use narrator::{narrate, NARRATOR_FALLBACK, NARRATOR_UNAVAILABLE};
