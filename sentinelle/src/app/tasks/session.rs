//! # Session Tasks
//!
//! Login, logout and background revalidation, delegating to the session
//! store which owns the actual state transitions.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::AppState;

/// Spawn a login attempt. The result event carries the user on success; the
/// failure message is already stored on the session for inline display.
pub(crate) fn login(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    phone_number: String,
    password: String,
) {
    let (api, session) = {
        let state = state.read();
        (state.api.clone(), state.session.clone())
    };

    tokio::spawn(async move {
        let result = session.login(&api, &phone_number, &password).await;
        let _ = event_tx.send(AppEvent::LoginResult(result)).await;
    });
}

/// Spawn a logout: best-effort server notification, unconditional local
/// clear, then a completion event for navigation.
pub(crate) fn logout(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api, session) = {
        let state = state.read();
        (state.api.clone(), state.session.clone())
    };

    tokio::spawn(async move {
        session.logout(&api).await;
        let _ = event_tx.send(AppEvent::LogoutComplete).await;
    });
}

/// Spawn a background revalidation of a rehydrated session.
pub(crate) fn revalidate(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api, session) = {
        let state = state.read();
        (state.api.clone(), state.session.clone())
    };

    tokio::spawn(async move {
        let result = session.check_auth(&api).await;
        let _ = event_tx.send(AppEvent::ProfileChecked(result)).await;
    });
}
