//! # Session Store
//!
//! Single source of truth for authentication state.
//!
//! The store is an explicitly constructed, cloneable handle (`Arc` inside) so
//! it can be injected into the API client, the app state and tests without a
//! process-wide singleton. All mutations go through the store's own methods;
//! readers take cheap snapshots.
//!
//! ## State machine
//!
//! ```text
//! Rehydrating ──initialize()──► Authenticated | Unauthenticated
//! Unauthenticated ──login() ok──► Authenticated
//! Authenticated ──logout()──► Unauthenticated
//! Authenticated ──refresh/revalidation rejected──► Unauthenticated
//! ```
//!
//! ## Persistence
//!
//! One JSON document on disk is the authoritative persisted representation,
//! written on login and token refresh, removed on logout and forced clears.
//! `initialize()` rehydrates from it without any network call; the caller is
//! expected to revalidate in the background afterwards.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared::{AuthTokens, LoginRequest, RefreshResponse, Role, User};

use crate::core::error::{ApiError, ApiResult};
use crate::services::api::{auth, ApiClient};

const DEFAULT_SESSION_FILE: &str = "./sentinelle-session.json";

/// Where the session currently stands. `Authenticated` holds if and only if
/// an access token is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Process start, before the persisted document has been read.
    Rehydrating,
    Unauthenticated,
    Authenticated,
}

/// Snapshot of the session state, cheap to clone for rendering.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: Option<User>,
    pub tokens: Option<AuthTokens>,
    pub status: SessionStatus,
    pub error: Option<String>,
    pub loading: bool,
}

impl Session {
    fn empty() -> Self {
        Session {
            user: None,
            tokens: None,
            status: SessionStatus::Rehydrating,
            error: None,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// On-disk representation. Read at startup by `initialize()` before any
/// protected screen is allowed to render.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    user: User,
    tokens: AuthTokens,
    saved_at: DateTime<Utc>,
}

/// Cloneable session handle. See module docs.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<Session>>,
    path: Arc<PathBuf>,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SessionStore {
            inner: Arc::new(RwLock::new(Session::empty())),
            path: Arc::new(path.into()),
        }
    }

    /// Session file path from `SENTINELLE_SESSION_FILE`, with a working
    /// directory default.
    pub fn from_env() -> Self {
        let path = std::env::var("SENTINELLE_SESSION_FILE")
            .unwrap_or_else(|_| DEFAULT_SESSION_FILE.to_string());
        Self::new(path)
    }

    pub fn snapshot(&self) -> Session {
        self.inner.read().clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.inner.read().status
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().is_authenticated()
    }

    pub fn role(&self) -> Option<Role> {
        self.inner.read().role()
    }

    pub fn user(&self) -> Option<User> {
        self.inner.read().user.clone()
    }

    pub fn access_token(&self) -> Option<String> {
        self.inner
            .read()
            .tokens
            .as_ref()
            .map(|t| t.access_token.clone())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.inner
            .read()
            .tokens
            .as_ref()
            .and_then(|t| t.refresh_token.clone())
    }

    /// Surface a local (pre-network) failure on the session, e.g. form
    /// validation before a login attempt.
    pub fn set_error(&self, message: impl Into<String>) {
        self.inner.write().error = Some(message.into());
    }

    /// Rehydrate from the persisted document. Purely local: no network call
    /// happens here; revalidation is the caller's responsibility.
    pub fn initialize(&self) -> SessionStatus {
        let restored = std::fs::read_to_string(self.path.as_ref())
            .ok()
            .and_then(|content| serde_json::from_str::<PersistedSession>(&content).ok());

        let mut session = self.inner.write();
        match restored {
            Some(persisted) => {
                tracing::info!(
                    user_id = %persisted.user.id,
                    role = persisted.user.role.label(),
                    saved_at = %persisted.saved_at,
                    "Session rehydrated from disk"
                );
                session.user = Some(persisted.user);
                session.tokens = Some(persisted.tokens);
                session.status = SessionStatus::Authenticated;
            }
            None => {
                tracing::debug!(path = %self.path.display(), "No persisted session found");
                session.status = SessionStatus::Unauthenticated;
            }
        }
        session.status
    }

    /// Authenticate against the backend. Only required-field validation
    /// happens locally; everything else is delegated to the transport.
    pub async fn login(&self, api: &ApiClient, phone_number: &str, password: &str) -> ApiResult<User> {
        if phone_number.trim().is_empty() || password.is_empty() {
            let err = ApiError::Validation("Phone number and password are required".to_string());
            let mut session = self.inner.write();
            session.error = Some(err.user_message());
            return Err(err);
        }

        {
            let mut session = self.inner.write();
            session.loading = true;
            session.error = None;
        }

        let request = LoginRequest {
            phone_number: phone_number.trim().to_string(),
            password: password.to_string(),
        };

        match auth::login(api, &request).await {
            Ok(response) => {
                let tokens = AuthTokens::from(&response);
                let user = response.user;
                {
                    let mut session = self.inner.write();
                    session.user = Some(user.clone());
                    session.tokens = Some(tokens);
                    session.status = SessionStatus::Authenticated;
                    session.error = None;
                    session.loading = false;
                }
                self.persist();
                Ok(user)
            }
            Err(err) => {
                let mut session = self.inner.write();
                session.loading = false;
                session.status = SessionStatus::Unauthenticated;
                session.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Notify the server, then clear local state unconditionally. A failing
    /// logout endpoint never leaves the session authenticated.
    pub async fn logout(&self, api: &ApiClient) {
        if let Err(err) = auth::logout(api).await {
            tracing::debug!(error = %err, "Server-side logout failed; clearing locally anyway");
        }
        self.clear();
    }

    /// Revalidate the session by fetching the current profile.
    ///
    /// A definitive rejection clears the session; a network failure keeps it,
    /// so an offline start does not log the user out.
    pub async fn check_auth(&self, api: &ApiClient) -> ApiResult<User> {
        match auth::me(api).await {
            Ok(user) => {
                {
                    let mut session = self.inner.write();
                    session.user = Some(user.clone());
                }
                self.persist();
                Ok(user)
            }
            Err(err) => {
                if err.is_auth_rejection() {
                    tracing::warn!(error = %err, "Session revalidation rejected; clearing session");
                    self.clear();
                } else {
                    tracing::debug!(error = %err, "Session revalidation inconclusive; keeping session");
                }
                Err(err)
            }
        }
    }

    /// Merge a refresh response into the stored tokens and persist the
    /// result. Returns the new pair.
    pub(crate) fn apply_refresh(&self, response: &RefreshResponse) -> AuthTokens {
        let tokens = {
            let mut session = self.inner.write();
            let merged = match session.tokens.as_ref() {
                Some(current) => current.merged_with(response),
                None => AuthTokens {
                    access_token: response.access_token.clone(),
                    refresh_token: response.refresh_token.clone(),
                    expires_at: response.expires_at,
                },
            };
            session.tokens = Some(merged.clone());
            session.status = SessionStatus::Authenticated;
            merged
        };
        self.persist();
        tokens
    }

    /// Drop to `Unauthenticated` and remove the persisted document. Used by
    /// logout and by the transport when the session becomes unusable.
    pub fn clear(&self) {
        {
            let mut session = self.inner.write();
            session.user = None;
            session.tokens = None;
            session.status = SessionStatus::Unauthenticated;
            session.loading = false;
        }
        if let Err(err) = std::fs::remove_file(self.path.as_ref()) {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(error = %err, "Could not remove persisted session");
            }
        }
    }

    fn persist(&self) {
        let document = {
            let session = self.inner.read();
            match (session.user.as_ref(), session.tokens.as_ref()) {
                (Some(user), Some(tokens)) => PersistedSession {
                    user: user.clone(),
                    tokens: tokens.clone(),
                    saved_at: Utc::now(),
                },
                _ => return,
            }
        };

        let write = || -> std::io::Result<()> {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let content = serde_json::to_string_pretty(&document)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            std::fs::write(self.path.as_ref(), content)
        };

        if let Err(err) = write() {
            tracing::warn!(error = %err, path = %self.path.display(), "Could not persist session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sentinelle-session-{}-{}.json", std::process::id(), name))
    }

    fn member() -> User {
        User {
            id: "u1".to_string(),
            phone_number: "0712345678".to_string(),
            first_name: "Awa".to_string(),
            last_name: "Diop".to_string(),
            role: Role::Member,
            balance: 1500.0,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn tokens(access: &str) -> AuthTokens {
        AuthTokens {
            access_token: access.to_string(),
            refresh_token: Some("refresh1".to_string()),
            expires_at: None,
        }
    }

    fn seed(store: &SessionStore, access: &str) {
        let mut session = store.inner.write();
        session.user = Some(member());
        session.tokens = Some(tokens(access));
        session.status = SessionStatus::Authenticated;
        drop(session);
        store.persist();
    }

    #[test]
    fn starts_rehydrating() {
        let store = SessionStore::new(temp_path("fresh"));
        assert_eq!(store.status(), SessionStatus::Rehydrating);
        assert!(!store.is_authenticated());
        assert!(store.access_token().is_none());
    }

    #[test]
    fn initialize_without_file_is_unauthenticated() {
        let path = temp_path("missing");
        let _ = std::fs::remove_file(&path);
        let store = SessionStore::new(path);
        assert_eq!(store.initialize(), SessionStatus::Unauthenticated);
    }

    #[test]
    fn persisted_session_round_trips_through_initialize() {
        let path = temp_path("roundtrip");
        let _ = std::fs::remove_file(&path);

        let store = SessionStore::new(path.clone());
        seed(&store, "tok1");

        // A brand new store over the same file reconstructs the session
        // without any network call.
        let restored = SessionStore::new(path.clone());
        assert_eq!(restored.initialize(), SessionStatus::Authenticated);
        assert_eq!(restored.role(), Some(Role::Member));
        assert_eq!(restored.access_token(), Some("tok1".to_string()));
        assert_eq!(restored.refresh_token(), Some("refresh1".to_string()));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn clear_drops_state_and_file() {
        let path = temp_path("clear");
        let _ = std::fs::remove_file(&path);

        let store = SessionStore::new(path.clone());
        seed(&store, "tok1");
        assert!(path.exists());

        store.clear();
        assert!(!store.is_authenticated());
        assert!(store.access_token().is_none());
        assert!(store.user().is_none());
        assert!(!path.exists());

        // Re-initializing after a clear must not resurrect the session.
        let restored = SessionStore::new(path);
        assert_eq!(restored.initialize(), SessionStatus::Unauthenticated);
    }

    #[test]
    fn apply_refresh_replaces_access_and_keeps_refresh_token() {
        let path = temp_path("refresh");
        let _ = std::fs::remove_file(&path);

        let store = SessionStore::new(path.clone());
        seed(&store, "tok1");

        let response = RefreshResponse {
            access_token: "tok2".to_string(),
            refresh_token: None,
            expires_at: None,
        };
        let merged = store.apply_refresh(&response);
        assert_eq!(merged.access_token, "tok2");
        assert_eq!(store.access_token(), Some("tok2".to_string()));
        assert_eq!(store.refresh_token(), Some("refresh1".to_string()));

        let _ = std::fs::remove_file(&path);
    }
}
