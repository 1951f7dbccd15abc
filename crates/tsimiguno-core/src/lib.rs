//! tsimiguno core
//!
//! Central coordination layer for the tsimiguno client: wires the session
//! container, local store, API client and candidate board together behind
//! one [`App`] facade that a UI shell embeds. Rust owns all state; the
//! rendering layer is stateless.

mod app;
mod config;
mod error;

pub use app::App;
pub use config::Config;
pub use error::CoreError;

// Re-export core components
pub use tsimiguno_api::{ApiClient, ApiError};
pub use tsimiguno_auth::{AuthManager, AuthSession, CredentialResponse};
pub use tsimiguno_storage::{Database, StorageError};
pub use tsimiguno_words::{hira_to_kata, Candidate, CandidateBoard, Rating};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
