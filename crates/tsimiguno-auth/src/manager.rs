//! Session manager
//!
//! Owns the in-memory session and its persisted mirror. Writes through to
//! the store on every mutation; storage failures are logged and absorbed so
//! the in-memory state stays authoritative.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use tsimiguno_storage::Database;

use crate::session::{AuthSession, CredentialResponse};

/// Store key for the persisted session record
const USER_KEY: &str = "user";

/// Persisted shape: `{"credential": "..."}`. Anything that does not parse
/// into exactly this is treated as no record at all.
#[derive(Debug, Serialize, Deserialize)]
struct StoredUser {
    credential: String,
}

pub struct AuthManager {
    /// In-memory session, the single source of truth
    session: Arc<RwLock<AuthSession>>,
    /// Store holding the persisted mirror
    db: Database,
}

impl AuthManager {
    pub fn new(db: Database) -> Self {
        Self {
            session: Arc::new(RwLock::new(AuthSession::anonymous())),
            db,
        }
    }

    /// Restore a persisted session, once, at startup.
    ///
    /// A record that is absent, unreadable, malformed, or carries an empty
    /// credential leaves the session unauthenticated; none of those cases
    /// is distinguishable to callers. Returns the resulting snapshot.
    pub fn initialize(&self) -> AuthSession {
        match self.db.get(USER_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<StoredUser>(&raw) {
                Ok(stored) if !stored.credential.is_empty() => {
                    self.set_login(stored.credential);
                    tracing::info!("Restored persisted session");
                }
                Ok(_) => {
                    tracing::debug!("Persisted session record has empty credential, ignoring");
                }
                Err(e) => {
                    tracing::debug!("Persisted session record is malformed, ignoring: {}", e);
                }
            },
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Failed to read persisted session: {}", e);
            }
        }

        self.session()
    }

    /// Handle an identity-provider login callback.
    ///
    /// A response without a credential (or with an empty one) changes
    /// nothing; a response with one replaces the current session even if a
    /// user is already logged in.
    pub fn google_login(&self, response: &CredentialResponse) {
        match response.credential.as_deref() {
            Some(credential) if !credential.is_empty() => {
                self.set_login(credential.to_string());
                tracing::info!("Logged in");
            }
            _ => {
                tracing::debug!("Login response carried no credential, ignoring");
            }
        }
    }

    /// Log out: clear the in-memory session and drop the persisted record.
    /// Safe to call any number of times.
    pub fn logout(&self) {
        *self.session.write() = AuthSession::anonymous();

        if let Err(e) = self.db.delete(USER_KEY) {
            tracing::warn!("Failed to remove persisted session: {}", e);
        }

        tracing::info!("Logged out");
    }

    /// Current session snapshot
    pub fn session(&self) -> AuthSession {
        self.session.read().clone()
    }

    /// Current credential, empty when logged out
    pub fn credential(&self) -> String {
        self.session.read().credential.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated
    }

    /// Adopt `credential` as the current session and write it through to
    /// the store. Both login and restoration funnel through here so the
    /// mutation and the persisted mirror cannot diverge.
    fn set_login(&self, credential: String) {
        let record = StoredUser {
            credential: credential.clone(),
        };

        *self.session.write() = AuthSession::authenticated(credential);

        match serde_json::to_string(&record) {
            Ok(raw) => {
                if let Err(e) = self.db.put(USER_KEY, &raw) {
                    tracing::warn!("Failed to persist session: {}", e);
                }
            }
            Err(e) => {
                tracing::warn!("Failed to serialize session record: {}", e);
            }
        }
    }
}

impl Clone for AuthManager {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            db: self.db.clone(),
        }
    }
}
