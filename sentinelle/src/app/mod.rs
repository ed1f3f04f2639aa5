//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, async task
//! handlers, and application state management.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    UI Thread (egui)                      │
//! │  App::on_frame() - drains events, advances the wheel     │
//! │  App::handle_*() - user action handlers                  │
//! │  State: Arc<RwLock<AppState>> (locks held briefly)       │
//! └──────────────────────┬───────────────────────────────────┘
//!                        │ async_channel (unbounded)
//! ┌──────────────────────▼───────────────────────────────────┐
//! │                 Async Tasks (Tokio)                      │
//! │  tasks::session - login / logout / revalidation          │
//! │  tasks::lists   - paginated collection fetches           │
//! │  tasks::manage  - create / update / delete calls         │
//! │  tasks::wheel   - spins, balance, won prizes             │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Tasks never touch the UI; they send an [`AppEvent`] back and the event
//! handler applies it under a short write lock. The session store itself is
//! injected (no singleton) so tests can run the whole pipeline against a
//! stub backend.

mod event_handler;
mod events;
pub mod guard;
pub(crate) mod handlers;
mod state;
pub(crate) mod tasks;

pub use events::AppEvent;
pub use guard::{RouteDecision, RouteGuard};
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::services::api::ApiClient;
use crate::services::session::{SessionStatus, SessionStore};

/// Main application orchestrator.
pub struct App {
    /// Thread-safe shared application state.
    pub state: Arc<RwLock<AppState>>,
    /// Channel receiver for async task results, polled every frame.
    pub event_rx: Receiver<AppEvent>,
    /// Channel sender handed to async tasks.
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create the application from the environment: session file and API
    /// base URL come from `SENTINELLE_SESSION_FILE` / `SENTINELLE_API_URL`.
    pub fn new() -> Self {
        let session = SessionStore::from_env();
        let api = Arc::new(ApiClient::from_env(session.clone()));
        Self::with_parts(session, api)
    }

    /// Create the application from explicit parts. Used by tests to inject
    /// a session store and client pointed at a stub backend.
    pub fn with_parts(session: SessionStore, api: Arc<ApiClient>) -> Self {
        // Local rehydration only; revalidation happens in the background
        // right after, so a stale token cannot survive long.
        let status = session.initialize();

        let mut state = AppState::new(session, api);
        state.current_screen = match status {
            SessionStatus::Authenticated => Screen::Dashboard,
            _ => Screen::Login,
        };

        let (event_tx, event_rx) = unbounded();
        let app = App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
        };

        if status == SessionStatus::Authenticated {
            tracing::info!("Session rehydrated; starting background revalidation");
            tasks::session::revalidate(app.state.clone(), app.event_tx.clone());
            handlers::navigation::trigger_screen_fetch(&app.state, &app.event_tx, Screen::Dashboard);
        }

        app
    }

    /// Drain pending async events and enforce the route guard. Called every
    /// frame, non-blocking.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
        self.enforce_route_guard();
    }

    /// Per-frame work: event draining plus the wheel animation.
    pub fn on_frame(&mut self, dt: f32) {
        self.on_tick();

        let landed = {
            let mut state = self.state.write();
            state.wheel.wheel.tick(dt)
        };
        if landed {
            self.finish_spin();
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// The session can drop out from under the current screen (forced
    /// logout, failed refresh). Route back to login when that happens.
    fn enforce_route_guard(&mut self) {
        let (screen, decision) = {
            let state = self.state.read();
            let session = state.session.snapshot();
            (
                state.current_screen,
                state.current_screen.guard().evaluate(session.status, session.role()),
            )
        };
        if decision == RouteDecision::RequireLogin {
            tracing::info!(screen = screen.title(), "Session gone; returning to login");
            self.state.write().current_screen = Screen::Login;
        }
    }

    /// The wheel has come to rest: reveal the held-back outcome.
    fn finish_spin(&mut self) {
        let outcome = {
            let mut state = self.state.write();
            state.wheel.spinning = false;
            state.needs_repaint = true;
            state.wheel.pending_outcome.take()
        };
        let Some(outcome) = outcome else { return };

        let won = outcome.spin.prize.is_some();
        {
            let mut state = self.state.write();
            match &outcome.spin.prize {
                Some(prize) => {
                    state.notify(NotifyLevel::Success, format!("You won {}!", prize.name))
                }
                None => state.notify(NotifyLevel::Info, "No win this time. Spin again!"),
            }
            state.wheel.last_outcome = Some(outcome.spin);
        }

        if won {
            // Stock and the won-prize list both changed server-side.
            tasks::wheel::fetch_my_prizes(self.state.clone(), self.event_tx.clone());
            tasks::lists::fetch_prizes(self.state.clone(), self.event_tx.clone());
        }
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    /// Handle login button click
    pub fn handle_login_click(&mut self) {
        handlers::auth::handle_login_click(self.state.clone(), self.event_tx.clone());
    }

    /// Handle logout button click
    pub fn handle_logout_click(&mut self) {
        handlers::auth::handle_logout_click(self.state.clone(), self.event_tx.clone());
    }

    /// Handle screen change (guarded)
    pub fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(self.state.clone(), self.event_tx.clone(), screen);
    }

    /// Jump a collection screen to another page
    pub fn handle_page_change(&mut self, screen: Screen, page: u32) {
        handlers::navigation::handle_page_change(
            self.state.clone(),
            self.event_tx.clone(),
            screen,
            page,
        );
    }

    /// Apply a collection screen's search box
    pub fn handle_search_submit(&mut self, screen: Screen) {
        handlers::navigation::handle_search_submit(self.state.clone(), self.event_tx.clone(), screen);
    }

    /// Handle spin button click
    pub fn handle_spin_click(&mut self) {
        handlers::wheel::handle_spin_click(self.state.clone(), self.event_tx.clone());
    }

    /// Claim a won prize (member)
    pub fn handle_claim_prize(&mut self, id: String) {
        tasks::wheel::claim_prize(self.state.clone(), self.event_tx.clone(), id);
    }

    /// Mark a won prize as delivered (admin)
    pub fn handle_deliver_prize(&mut self, id: String) {
        tasks::wheel::deliver_prize(self.state.clone(), self.event_tx.clone(), id);
    }

    /// Submit the new-member form (admin)
    pub fn handle_create_user(&mut self) {
        handlers::manage::handle_create_user(self.state.clone(), self.event_tx.clone());
    }

    /// Toggle a member's active flag (admin)
    pub fn handle_toggle_user_active(&mut self, id: String, active: bool) {
        handlers::manage::handle_toggle_user_active(
            self.state.clone(),
            self.event_tx.clone(),
            id,
            active,
        );
    }

    /// Delete a member (admin)
    pub fn handle_delete_user(&mut self, id: String) {
        handlers::manage::handle_delete_user(self.state.clone(), self.event_tx.clone(), id);
    }

    /// Submit the new-campaign form (admin)
    pub fn handle_create_campaign(&mut self) {
        handlers::manage::handle_create_campaign(self.state.clone(), self.event_tx.clone());
    }

    /// Delete a campaign (admin)
    pub fn handle_delete_campaign(&mut self, id: String) {
        handlers::manage::handle_delete_campaign(self.state.clone(), self.event_tx.clone(), id);
    }

    /// Submit the new-prize form (admin)
    pub fn handle_create_prize(&mut self) {
        handlers::manage::handle_create_prize(self.state.clone(), self.event_tx.clone());
    }

    /// Delete a prize (admin)
    pub fn handle_delete_prize(&mut self, id: String) {
        handlers::manage::handle_delete_prize(self.state.clone(), self.event_tx.clone(), id);
    }

    /// Submit the contribution form (member)
    pub fn handle_contribute(&mut self) {
        handlers::manage::handle_contribute(self.state.clone(), self.event_tx.clone());
    }

    /// Confirm a pending payment (admin)
    pub fn handle_confirm_payment(&mut self, id: String) {
        handlers::manage::handle_confirm_payment(self.state.clone(), self.event_tx.clone(), id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ApiError;
    use chrono::Utc;
    use shared::{AuthTokens, Role, User};
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sentinelle-app-{}-{}.json", std::process::id(), name))
    }

    fn member() -> User {
        User {
            id: "u1".to_string(),
            phone_number: "0712345678".to_string(),
            first_name: "Awa".to_string(),
            last_name: "Diop".to_string(),
            role: Role::Member,
            balance: 0.0,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn offline_app(name: &str) -> App {
        let path = temp_path(name);
        let _ = std::fs::remove_file(&path);
        let session = SessionStore::new(path);
        // Nothing listens here; network calls fail fast with a Network error.
        let api = Arc::new(ApiClient::new("http://127.0.0.1:9", session.clone()));
        App::with_parts(session, api)
    }

    // ========== Screen Tests ==========

    #[test]
    fn test_screen_all_contains_every_screen() {
        let screens = Screen::all();
        assert_eq!(screens.len(), 8);
        assert_eq!(screens[0], Screen::Login);
        assert!(screens.contains(&Screen::Wheel));
        assert!(screens.contains(&Screen::Users));
    }

    #[test]
    fn test_screen_titles() {
        assert_eq!(Screen::Login.title(), "Sign In");
        assert_eq!(Screen::Wheel.title(), "Fortune Wheel");
        assert_eq!(Screen::Users.title(), "Members");
    }

    // ========== Startup Tests ==========

    #[test]
    fn test_fresh_app_starts_unauthenticated_on_login() {
        let app = offline_app("fresh");
        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Login);
        assert!(!state.is_authenticated());
        assert!(state.users.items.is_empty());
    }

    #[tokio::test]
    async fn test_rehydrated_session_starts_on_dashboard() {
        let path = temp_path("rehydrate");
        let _ = std::fs::remove_file(&path);

        let document = serde_json::json!({
            "user": member(),
            "tokens": AuthTokens {
                access_token: "tok1".to_string(),
                refresh_token: Some("refresh1".to_string()),
                expires_at: None,
            },
            "saved_at": Utc::now(),
        });
        std::fs::write(&path, serde_json::to_string_pretty(&document).unwrap()).unwrap();

        let session = SessionStore::new(path.clone());
        let api = Arc::new(ApiClient::new("http://127.0.0.1:9", session.clone()));
        let app = App::with_parts(session, api);

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Dashboard);
        assert!(state.is_authenticated());
        assert_eq!(state.session.role(), Some(Role::Member));

        let _ = std::fs::remove_file(&path);
    }

    // ========== Event Handling Tests ==========

    #[tokio::test]
    async fn test_login_result_success_navigates_to_dashboard() {
        let mut app = offline_app("login-ok");
        app.handle_event(AppEvent::LoginResult(Ok(member())));

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Dashboard);
        assert!(state
            .pending_notifications
            .iter()
            .any(|(level, _)| *level == NotifyLevel::Success));
    }

    #[tokio::test]
    async fn test_logout_complete_resets_cached_collections() {
        let mut app = offline_app("logout");
        {
            let mut state = app.state.write();
            state.current_screen = Screen::Dashboard;
            state.users.items = vec![member()];
        }

        app.handle_event(AppEvent::LogoutComplete);

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Login);
        assert!(state.users.items.is_empty());
    }

    #[tokio::test]
    async fn test_unauthorized_list_load_redirects_to_login() {
        let mut app = offline_app("unauth");
        let seq = {
            let mut state = app.state.write();
            state.current_screen = Screen::Campaigns;
            state.campaigns.begin_fetch()
        };

        app.handle_event(AppEvent::CampaignsLoaded {
            seq,
            result: Err(ApiError::Unauthorized("session expired".into())),
        });

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Login);
        assert!(!state.pending_notifications.is_empty());
    }

    #[tokio::test]
    async fn test_failed_mutation_notifies_error() {
        let mut app = offline_app("mutation-err");
        app.handle_event(AppEvent::MutationDone {
            label: "Prize created",
            result: Err(ApiError::Validation("stock must be positive".into())),
            refetch: None,
        });

        let state = app.state.read();
        assert!(state
            .pending_notifications
            .iter()
            .any(|(level, message)| *level == NotifyLevel::Error && message.contains("stock")));
    }

    #[tokio::test]
    async fn test_spin_error_stops_spinning() {
        let mut app = offline_app("spin-err");
        app.state.write().wheel.spinning = true;

        app.handle_event(AppEvent::SpinResolved(Err(ApiError::Validation(
            "no spins available".into(),
        ))));

        let state = app.state.read();
        assert!(!state.wheel.spinning);
    }

    // ========== Route Guard Enforcement ==========

    #[tokio::test]
    async fn test_guard_enforcement_leaves_protected_screen() {
        let mut app = offline_app("guard");
        {
            // The session is unauthenticated, but force a protected screen.
            let mut state = app.state.write();
            state.current_screen = Screen::Dashboard;
        }

        app.on_tick();

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Login);
    }
}
