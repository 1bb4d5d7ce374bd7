use thiserror::Error;

#[derive(Error, Debug)]
pub enum BargainError {
    #[error("LLM error: {0}")]
    LlmError(String),

    #[error("Narrator is disabled")]
    NarratorDisabled,

    #[error("A narration is still pending; wait for it or abandon it")]
    NarrationPending,

    #[error("No narration is pending")]
    NoPendingNarration,

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BargainError>;
