//! # Wheel Handlers
//!
//! Spin button handling. One spin at a time: the click is ignored while a
//! request or animation is still running.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, NotifyLevel};
use crate::app::tasks;

/// Handle spin button click
///
/// Internal handler function - use [`crate::app::App::handle_spin_click`] instead.
pub(crate) fn handle_spin_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    {
        let mut guard = state.write();
        if guard.wheel.spinning {
            return;
        }
        let available = guard.wheel.balance.map(|b| b.available_spins).unwrap_or(0);
        if available == 0 {
            guard.notify(NotifyLevel::Info, "No spins available. Contribute to a campaign to earn more.");
            return;
        }
        guard.wheel.spinning = true;
        guard.wheel.last_outcome = None;
        guard.needs_repaint = true;
    }

    tracing::info!("Spin requested");
    tasks::wheel::spin(state, event_tx);
}
