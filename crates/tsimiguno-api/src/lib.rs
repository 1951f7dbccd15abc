//! tsimiguno remote API client
//!
//! Thin client for the word-evaluation service. The server owns candidate
//! generation, the per-user preference model and the favorites list; this
//! crate only speaks its HTTP contract:
//!
//! - `GET  /candidates` — next batch of candidate words
//! - `POST /eval`       — word→score map, returns the following batch
//! - `GET  /favorites`  — words the user marked as favorites
//!
//! Every request carries the session credential as a bearer token. The
//! credential itself is owned by the session container; callers pass it in
//! per call.

mod client;
mod error;

pub use client::ApiClient;
pub use error::ApiError;

pub type Result<T> = std::result::Result<T, ApiError>;
