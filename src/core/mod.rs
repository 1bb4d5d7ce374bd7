pub mod config;
pub mod error;
pub mod types;

pub use config::GameConfig;
pub use error::{BargainError, Result};
pub use types::{Fact, InputMode, Item, Location, SessionId};
