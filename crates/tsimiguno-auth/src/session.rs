//! Session data structures

use serde::{Deserialize, Serialize};

/// Snapshot of the current authentication state.
///
/// `is_authenticated` is true exactly when `credential` is non-empty; the
/// constructors are the only way to build one, so the pair can never
/// disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Opaque bearer token issued by the identity provider, empty when
    /// logged out
    pub credential: String,
    /// Whether a user is currently logged in
    pub is_authenticated: bool,
}

impl AuthSession {
    /// The logged-out state
    pub fn anonymous() -> Self {
        Self {
            credential: String::new(),
            is_authenticated: false,
        }
    }

    /// A logged-in state carrying `credential`.
    ///
    /// Callers must pass a non-empty credential; the manager filters empty
    /// ones out before ever reaching here.
    pub fn authenticated(credential: String) -> Self {
        Self {
            credential,
            is_authenticated: true,
        }
    }
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::anonymous()
    }
}

/// Callback payload from the identity provider.
///
/// The provider sends more fields than this; the credential is the only one
/// consumed, so the rest are ignored during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialResponse {
    #[serde(default)]
    pub credential: Option<String>,
}

impl CredentialResponse {
    pub fn new(credential: impl Into<String>) -> Self {
        Self {
            credential: Some(credential.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_session() {
        let session = AuthSession::anonymous();
        assert!(!session.is_authenticated);
        assert!(session.credential.is_empty());
        assert_eq!(session, AuthSession::default());
    }

    #[test]
    fn test_authenticated_session() {
        let session = AuthSession::authenticated("tok-123".to_string());
        assert!(session.is_authenticated);
        assert_eq!(session.credential, "tok-123");
    }

    #[test]
    fn test_credential_response_ignores_extra_fields() {
        let response: CredentialResponse =
            serde_json::from_str(r#"{"credential":"abc","select_by":"btn","clientId":"x"}"#)
                .unwrap();
        assert_eq!(response.credential.as_deref(), Some("abc"));

        let empty: CredentialResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.credential, None);
    }
}
