//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] tsimiguno_storage::StorageError),

    #[error("API error: {0}")]
    Api(#[from] tsimiguno_api::ApiError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not logged in")]
    NotAuthenticated,
}
