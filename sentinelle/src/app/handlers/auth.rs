//! # Authentication Handlers
//!
//! Handlers for login and logout actions.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;
use crate::utils::validation;

/// Handle login button click
///
/// Internal handler function - use [`crate::app::App::handle_login_click`] instead.
pub(crate) fn handle_login_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (phone_number, password, session) = {
        let state = state.read();
        (
            state.login_form.phone_number.clone(),
            state.login_form.password.clone(),
            state.session.clone(),
        )
    };

    // Local validation covers required fields only; everything else is the
    // backend's call.
    let check = validation::validate_phone_number(&phone_number);
    if !check.is_valid {
        session.set_error(check.error.unwrap_or_else(|| "Invalid phone number".to_string()));
        return;
    }
    if password.is_empty() {
        session.set_error("Password is required");
        return;
    }

    tasks::session::login(state, event_tx, phone_number, password);
}

/// Handle logout button click
///
/// Internal handler function - use [`crate::app::App::handle_logout_click`] instead.
pub(crate) fn handle_logout_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    tracing::info!("Logout requested");
    tasks::session::logout(state, event_tx);
}
