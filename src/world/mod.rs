//! World model for a single play session

pub mod state;

pub use state::WorldState;
