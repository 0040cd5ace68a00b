use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum NxsError {
    #[error("I/O Error: {0}")]
    Io(#[from] Arc<std::io::Error>),

    #[error("Configuration Error: {0}")]
    Config(String),

    /// Missing or malformed attributes supplied by the caller.
    #[error("{0}")]
    Input(String),

    /// Remote or local state does not allow the action to proceed.
    #[error("{0}")]
    Precondition(String),

    /// A write reported success but the resulting state could not be observed.
    #[error("{0}")]
    Postcondition(String),

    #[error("HttpError: {0}")]
    HttpError(String),

    #[error("Checksum Mismatch: {0}")]
    ChecksumMismatch(String),

    #[error("Validation Error: {0}")]
    ValidationError(String),

    #[error("IoError: {0}")]
    IoError(String),
}

impl NxsError {
    pub fn input(msg: impl Into<String>) -> Self {
        NxsError::Input(msg.into())
    }

    pub fn precondition(msg: impl Into<String>) -> Self {
        NxsError::Precondition(msg.into())
    }

    pub fn postcondition(msg: impl Into<String>) -> Self {
        NxsError::Postcondition(msg.into())
    }
}

impl From<std::io::Error> for NxsError {
    fn from(err: std::io::Error) -> Self {
        NxsError::Io(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, NxsError>;
