use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    /// Input document (or one of its records) does not have the expected shape.
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Nothing has been persisted yet. Readers fold this into the empty document.
    #[error("No state found at {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store could not complete a call: a simulated failure, a poisoned
    /// lock, or a write abandoned by a caller that stopped waiting.
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BoardError>;
