//! # Collection Fetch Tasks
//!
//! One fetch task per paginated screen. Every task bumps the screen's fetch
//! sequence under the write lock before spawning, and sends the sequence
//! back with the result so late responses from superseded fetches are
//! dropped by the event handler.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::ListQuery;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;

macro_rules! list_fetch_task {
    ($name:ident, $field:ident, $method:ident, $event:ident) => {
        pub(crate) fn $name(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
            let (api, seq, query) = {
                let mut state = state.write();
                let seq = state.$field.begin_fetch();
                let query = ListQuery::page(state.$field.page).with_search(&state.$field.search);
                (state.api.clone(), seq, query)
            };

            tokio::spawn(async move {
                let result = api.$method(query).await;
                let _ = event_tx.send(AppEvent::$event { seq, result }).await;
            });
        }
    };
}

list_fetch_task!(fetch_users, users, list_users, UsersLoaded);
list_fetch_task!(fetch_campaigns, campaigns, list_campaigns, CampaignsLoaded);
list_fetch_task!(fetch_prizes, prizes, list_prizes, PrizesLoaded);
list_fetch_task!(fetch_payments, payments, list_payments, PaymentsLoaded);
list_fetch_task!(fetch_spins, spins, list_spins, SpinsLoaded);

/// Latest own spins for the dashboard. Not sequence-guarded: the dashboard
/// only ever issues one of these at a time.
pub(crate) fn fetch_recent_spins(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api = state.read().api.clone();

    tokio::spawn(async move {
        let query = ListQuery {
            page: 1,
            limit: 5,
            search: None,
        };
        let result = api.spin_history(query).await;
        let _ = event_tx.send(AppEvent::RecentSpinsLoaded(result)).await;
    });
}
