//! # Management Handlers
//!
//! Form submission handlers for the admin screens and the member
//! contribution flow. Parse and validate the form buffers, then hand the
//! typed request to the matching task.

use std::sync::Arc;

use async_channel::Sender;
use chrono::{Duration, Utc};
use parking_lot::RwLock;
use shared::{
    CreateCampaignRequest, CreatePaymentRequest, CreatePrizeRequest, CreateUserRequest, Role,
};

use crate::app::events::AppEvent;
use crate::app::state::{AppState, NotifyLevel};
use crate::app::tasks;
use crate::utils::validation;

pub(crate) fn handle_create_user(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let form = state.read().user_form.clone();

    let phone = validation::validate_phone_number(&form.phone_number);
    if !phone.is_valid {
        notify_invalid(&state, phone.error);
        return;
    }
    let password = validation::validate_password(&form.password);
    if !password.is_valid {
        notify_invalid(&state, password.error);
        return;
    }
    if form.first_name.trim().is_empty() || form.last_name.trim().is_empty() {
        notify_invalid(&state, Some("First and last name are required".to_string()));
        return;
    }

    let request = CreateUserRequest {
        phone_number: form.phone_number.trim().to_string(),
        first_name: form.first_name.trim().to_string(),
        last_name: form.last_name.trim().to_string(),
        password: form.password,
        role: if form.admin { Role::Admin } else { Role::Member },
    };

    {
        let mut state = state.write();
        state.user_form = Default::default();
    }
    tasks::manage::create_user(&state, event_tx, request);
}

pub(crate) fn handle_create_campaign(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let form = state.read().campaign_form.clone();

    if form.name.trim().is_empty() {
        notify_invalid(&state, Some("Campaign name is required".to_string()));
        return;
    }
    let goal = match validation::parse_amount(&form.goal_amount) {
        Ok(v) => v,
        Err(e) => return notify_invalid(&state, Some(format!("Goal amount: {e}"))),
    };
    let per_spin = match validation::parse_amount(&form.amount_per_spin) {
        Ok(v) => v,
        Err(e) => return notify_invalid(&state, Some(format!("Amount per spin: {e}"))),
    };
    let days: i64 = match form.duration_days.trim().parse() {
        Ok(v) if v > 0 => v,
        _ => return notify_invalid(&state, Some("Duration must be a positive number of days".to_string())),
    };

    let now = Utc::now();
    let request = CreateCampaignRequest {
        name: form.name.trim().to_string(),
        description: form.description.trim().to_string(),
        goal_amount: goal,
        amount_per_spin: per_spin,
        starts_at: now,
        ends_at: now + Duration::days(days),
    };

    {
        let mut state = state.write();
        state.campaign_form = Default::default();
    }
    tasks::manage::create_campaign(&state, event_tx, request);
}

pub(crate) fn handle_create_prize(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let form = state.read().prize_form.clone();

    if form.name.trim().is_empty() {
        notify_invalid(&state, Some("Prize name is required".to_string()));
        return;
    }
    let stock: u32 = match form.stock.trim().parse() {
        Ok(v) => v,
        Err(_) => return notify_invalid(&state, Some("Stock must be a whole number".to_string())),
    };

    let request = CreatePrizeRequest {
        name: form.name.trim().to_string(),
        description: form.description.trim().to_string(),
        stock,
    };

    {
        let mut state = state.write();
        state.prize_form = Default::default();
    }
    tasks::manage::create_prize(&state, event_tx, request);
}

/// Member contribution to the selected campaign.
pub(crate) fn handle_contribute(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let form = state.read().contribute_form.clone();

    let Some(campaign_id) = form.campaign_id else {
        notify_invalid(&state, Some("Pick a campaign to contribute to".to_string()));
        return;
    };
    let amount = match validation::parse_amount(&form.amount) {
        Ok(v) => v,
        Err(e) => return notify_invalid(&state, Some(format!("Amount: {e}"))),
    };

    let request = CreatePaymentRequest { campaign_id, amount };

    {
        let mut state = state.write();
        state.contribute_form.amount.clear();
    }
    tasks::manage::create_payment(&state, event_tx, request);
}

pub(crate) fn handle_toggle_user_active(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    id: String,
    active: bool,
) {
    tasks::manage::set_user_active(&state, event_tx, id, active);
}

pub(crate) fn handle_delete_user(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, id: String) {
    tasks::manage::delete_user(&state, event_tx, id);
}

pub(crate) fn handle_delete_campaign(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    id: String,
) {
    tasks::manage::delete_campaign(&state, event_tx, id);
}

pub(crate) fn handle_delete_prize(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, id: String) {
    tasks::manage::delete_prize(&state, event_tx, id);
}

pub(crate) fn handle_confirm_payment(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    id: String,
) {
    tasks::manage::confirm_payment(&state, event_tx, id);
}

fn notify_invalid(state: &Arc<RwLock<AppState>>, message: Option<String>) {
    let mut state = state.write();
    let message = message.unwrap_or_else(|| "Invalid input".to_string());
    state.notify(NotifyLevel::Warning, message);
}
