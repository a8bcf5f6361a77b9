use thiserror::Error;

#[derive(Error, Debug)]
pub enum QualifierError {
    #[error("Quote is too long (limit is {limit} characters)")]
    TooLong { limit: usize },

    #[error("Quote was not modified")]
    NoOp,

    #[error("Quote has already been added previously")]
    Duplicate(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, QualifierError>;
