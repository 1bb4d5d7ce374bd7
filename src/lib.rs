//! Blackout Bargain - text-adventure puzzle engine
//!
//! Puzzle state is decided by deterministic engines; an optional LLM
//! narrator only describes what the engines leave open.

pub mod command;
pub mod core;
pub mod describe;
pub mod llm;
pub mod session;
pub mod ui;
pub mod world;
