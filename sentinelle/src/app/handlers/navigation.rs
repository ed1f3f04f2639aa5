//! # Navigation Handlers
//!
//! Screen changes gated by the route guard, plus pagination and search for
//! the collection screens.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::guard::RouteDecision;
use crate::app::state::{AppState, NotifyLevel, Screen};
use crate::app::tasks;

/// Handle screen change with the route guard
///
/// Internal handler function - use [`crate::app::App::handle_screen_change`] instead.
pub(crate) fn handle_screen_change(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    screen: Screen,
) {
    let decision = {
        let session = state.read().session.snapshot();
        screen.guard().evaluate(session.status, session.role())
    };

    match decision {
        RouteDecision::Allow | RouteDecision::Loading => {
            state.write().current_screen = screen;
            trigger_screen_fetch(&state, &event_tx, screen);
        }
        RouteDecision::RequireLogin => {
            tracing::info!(screen = screen.title(), "Access requires authentication, redirecting to login");
            state.write().current_screen = Screen::Login;
        }
        RouteDecision::Deny => {
            let mut state = state.write();
            state.notify(NotifyLevel::Error, "You do not have permission to open that screen");
        }
    }
}

/// Kick off the data loads a screen needs when it becomes active.
pub(crate) fn trigger_screen_fetch(
    state: &Arc<RwLock<AppState>>,
    event_tx: &Sender<AppEvent>,
    screen: Screen,
) {
    let is_admin = state.read().session.role() == Some(shared::Role::Admin);

    match screen {
        Screen::Login => {}
        Screen::Dashboard => {
            tasks::lists::fetch_campaigns(state.clone(), event_tx.clone());
            tasks::lists::fetch_recent_spins(state.clone(), event_tx.clone());
            tasks::wheel::fetch_balance(state.clone(), event_tx.clone());
            if is_admin {
                tasks::lists::fetch_payments(state.clone(), event_tx.clone());
            }
        }
        Screen::Users => tasks::lists::fetch_users(state.clone(), event_tx.clone()),
        Screen::Campaigns => tasks::lists::fetch_campaigns(state.clone(), event_tx.clone()),
        Screen::Prizes => tasks::lists::fetch_prizes(state.clone(), event_tx.clone()),
        Screen::Payments => tasks::lists::fetch_payments(state.clone(), event_tx.clone()),
        Screen::Spins => tasks::lists::fetch_spins(state.clone(), event_tx.clone()),
        Screen::Wheel => {
            tasks::lists::fetch_prizes(state.clone(), event_tx.clone());
            tasks::wheel::fetch_balance(state.clone(), event_tx.clone());
            tasks::wheel::fetch_my_prizes(state.clone(), event_tx.clone());
        }
    }
}

/// Move a collection screen to `page` and refetch it.
pub(crate) fn handle_page_change(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    screen: Screen,
    page: u32,
) {
    {
        let mut state = state.write();
        match screen {
            Screen::Users => state.users.page = page.max(1),
            Screen::Campaigns => state.campaigns.page = page.max(1),
            Screen::Prizes => state.prizes.page = page.max(1),
            Screen::Payments => state.payments.page = page.max(1),
            Screen::Spins => state.spins.page = page.max(1),
            _ => return,
        }
    }
    refetch_list(&state, &event_tx, screen);
}

/// Apply the search box of a collection screen: back to page one, refetch.
pub(crate) fn handle_search_submit(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    screen: Screen,
) {
    {
        let mut state = state.write();
        match screen {
            Screen::Users => state.users.page = 1,
            Screen::Campaigns => state.campaigns.page = 1,
            Screen::Prizes => state.prizes.page = 1,
            Screen::Payments => state.payments.page = 1,
            Screen::Spins => state.spins.page = 1,
            _ => return,
        }
    }
    refetch_list(&state, &event_tx, screen);
}

fn refetch_list(state: &Arc<RwLock<AppState>>, event_tx: &Sender<AppEvent>, screen: Screen) {
    match screen {
        Screen::Users => tasks::lists::fetch_users(state.clone(), event_tx.clone()),
        Screen::Campaigns => tasks::lists::fetch_campaigns(state.clone(), event_tx.clone()),
        Screen::Prizes => tasks::lists::fetch_prizes(state.clone(), event_tx.clone()),
        Screen::Payments => tasks::lists::fetch_payments(state.clone(), event_tx.clone()),
        Screen::Spins => tasks::lists::fetch_spins(state.clone(), event_tx.clone()),
        _ => {}
    }
}
