// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Cannot open bookmark store: {0}")]
    Connection(String),

    #[error("URL already exists: {0}")]
    DuplicateUrl(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Cannot fetch metadata: {0}")]
    CannotFetchMetadata(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl DomainError {
    pub fn context<C: Into<String>>(self, context: C) -> Self {
        match self {
            DomainError::Storage(msg) => DomainError::Storage(format!("{}: {}", context.into(), msg)),
            DomainError::Serialization(msg) => {
                DomainError::Serialization(format!("{}: {}", context.into(), msg))
            }
            DomainError::Other(msg) => DomainError::Other(format!("{}: {}", context.into(), msg)),
            // Variants checked by callers keep their payload untouched
            err => err,
        }
    }

    /// True for the uniqueness violation on `url`
    pub fn is_duplicate(&self) -> bool {
        matches!(self, DomainError::DuplicateUrl(_))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Serialization(e.to_string())
    }
}
