//! tsimiguno session container
//!
//! Single source of truth for the user's authentication state:
//! - Holds the opaque identity-provider credential and the derived
//!   authenticated flag, always mutated together
//! - Persists the session across restarts in the local store (key `user`)
//! - Restores exactly once at startup, before anything reads the state
//! - Absorbs malformed or missing input silently: every failure path lands
//!   back in the unauthenticated state, never in an error
//!
//! ```text
//! Unauthenticated ──login/restore (non-empty credential)──▶ Authenticated
//!       ▲                                                       │
//!       └───────────────────────logout──────────────────────────┘
//! ```

mod manager;
mod session;

pub use manager::AuthManager;
pub use session::{AuthSession, CredentialResponse};
