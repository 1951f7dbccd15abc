//! tsimiguno storage layer
//!
//! SQLite-backed key-value store for client-local state. The application
//! treats it as a durable mirror of in-memory state: write-through on
//! mutation, read-once at startup.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
