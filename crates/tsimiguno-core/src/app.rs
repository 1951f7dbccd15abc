//! Main application state container
//!
//! The embedding surface for a UI shell: owns the session container, the
//! local store, the API client and the candidate board, and exposes the
//! operations pages call. All state lives here; the rendering layer is
//! stateless.

use url::Url;

use tsimiguno_api::ApiClient;
use tsimiguno_auth::{AuthManager, AuthSession, CredentialResponse};
use tsimiguno_storage::Database;
use tsimiguno_words::{Candidate, CandidateBoard, Rating};

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

pub struct App {
    /// Configuration
    config: Config,
    /// Local database
    db: Database,
    /// Session container
    auth: AuthManager,
    /// Remote API client
    api: ApiClient,
    /// Candidates currently being scored
    board: CandidateBoard,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        // Ensure data directory exists
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        let auth = AuthManager::new(db.clone());

        let base_url = parse_base_url(&config.api_url)?;
        let api = ApiClient::new(base_url)?;

        Ok(Self {
            config,
            db,
            auth,
            api,
            board: CandidateBoard::new(),
        })
    }

    /// Restore any persisted session. Runs once, before the first render
    /// that depends on the authentication state.
    pub fn initialize(&self) -> AuthSession {
        let session = self.auth.initialize();

        tracing::info!(
            is_authenticated = session.is_authenticated,
            "tsimiguno initialized"
        );

        session
    }

    // === Session operations ===

    /// Handle the identity-provider login callback
    pub fn login(&self, response: &CredentialResponse) {
        self.auth.google_login(response);
    }

    pub fn logout(&self) {
        self.auth.logout();
    }

    // === Word operations ===

    /// Fetch a fresh batch of candidates onto the board.
    pub async fn refresh_candidates(&self) -> Result<Vec<Candidate>> {
        let session = self.authenticated_session()?;

        let words = self.api.candidates(&session.credential).await?;
        self.board.replace(words);

        Ok(self.board.candidates())
    }

    /// Score one candidate on the board. Returns false if the word is not
    /// part of the current batch.
    pub fn rate(&self, word: &str, rating: Rating) -> bool {
        self.board.rate(word, rating)
    }

    /// Submit the board's scores and install the next batch the server
    /// answers with.
    pub async fn submit_evaluation(&self) -> Result<Vec<Candidate>> {
        let session = self.authenticated_session()?;

        let scores = self.board.evaluation();
        let next = self.api.evaluate(&session.credential, &scores).await?;
        self.board.replace(next);

        Ok(self.board.candidates())
    }

    /// Fetch the server-side favorites list.
    pub async fn favorites(&self) -> Result<Vec<String>> {
        let session = self.authenticated_session()?;

        Ok(self.api.favorites(&session.credential).await?)
    }

    // === Accessors ===

    pub fn auth(&self) -> &AuthManager {
        &self.auth
    }

    pub fn board(&self) -> &CandidateBoard {
        &self.board
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    fn authenticated_session(&self) -> Result<AuthSession> {
        let session = self.auth.session();
        if !session.is_authenticated {
            return Err(CoreError::NotAuthenticated);
        }
        Ok(session)
    }
}

/// Parse the configured API base URL, normalizing to a trailing slash so
/// endpoint paths join underneath it rather than replacing the last
/// segment.
fn parse_base_url(api_url: &str) -> Result<Url> {
    let normalized = if api_url.ends_with('/') {
        api_url.to_string()
    } else {
        format!("{api_url}/")
    };

    Url::parse(&normalized).map_err(|e| CoreError::Config(format!("invalid API URL: {e}")))
}
