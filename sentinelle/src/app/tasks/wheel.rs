//! # Wheel Tasks
//!
//! Spin execution and supporting data (balance, won prizes). The spin
//! outcome is resolved server-side; the UI animation starts when the
//! `SpinResolved` event lands.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen};
use crate::core::service::ApiService;

/// Consume one spin. The guard against double-spins (`wheel.spinning`) is
/// checked and set by the click handler before this is called.
pub(crate) fn spin(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api = state.read().api.clone();
    tokio::spawn(async move {
        let result = api.spin().await;
        let _ = event_tx.send(AppEvent::SpinResolved(result)).await;
    });
}

pub(crate) fn fetch_balance(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api = state.read().api.clone();
    tokio::spawn(async move {
        let result = api.spin_balance().await;
        let _ = event_tx.send(AppEvent::SpinBalanceLoaded(result)).await;
    });
}

pub(crate) fn fetch_my_prizes(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api = state.read().api.clone();
    tokio::spawn(async move {
        let result = api.my_prizes().await;
        let _ = event_tx.send(AppEvent::MyPrizesLoaded(result)).await;
    });
}

pub(crate) fn claim_prize(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, id: String) {
    let api = state.read().api.clone();
    tokio::spawn(async move {
        let result = api.claim_prize(&id).await.map(|_| ());
        let _ = event_tx
            .send(AppEvent::MutationDone {
                label: "Prize claimed",
                result,
                refetch: Some(Screen::Wheel),
            })
            .await;
    });
}

pub(crate) fn deliver_prize(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, id: String) {
    let api = state.read().api.clone();
    tokio::spawn(async move {
        let result = api.deliver_prize(&id).await.map(|_| ());
        let _ = event_tx
            .send(AppEvent::MutationDone {
                label: "Prize delivered",
                result,
                refetch: Some(Screen::Wheel),
            })
            .await;
    });
}
