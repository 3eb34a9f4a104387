use thiserror::Error;

#[derive(Error, Debug)]
pub enum RemindrError {
    #[error("Reminder not found: {0}")]
    NotFound(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// A repeating reminder that lacks the fields its recurrence needs.
    /// Only reported by validation; scheduling degrades instead of failing.
    #[error("Malformed recurrence: {0}")]
    MalformedRecurrence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RemindrError>;
