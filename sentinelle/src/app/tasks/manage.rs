//! # Management Tasks
//!
//! Create/update/delete calls for the admin screens and the member
//! contribution flow. Every task funnels into a single `MutationDone`
//! event: a toast plus an optional refetch of the owning screen.

use std::future::Future;
use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::{
    CreateCampaignRequest, CreatePaymentRequest, CreatePrizeRequest, CreateUserRequest,
    UpdateUserRequest,
};

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen};
use crate::core::error::ApiResult;
use crate::core::service::ApiService;
use crate::services::api::ApiClient;

fn run_mutation<F, Fut>(
    state: &Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    label: &'static str,
    refetch: Option<Screen>,
    operation: F,
) where
    F: FnOnce(Arc<ApiClient>) -> Fut + Send + 'static,
    Fut: Future<Output = ApiResult<()>> + Send + 'static,
{
    let api = state.read().api.clone();
    tokio::spawn(async move {
        let result = operation(api).await;
        if let Err(err) = &result {
            tracing::warn!(label, error = %err, "Mutation failed");
        }
        let _ = event_tx
            .send(AppEvent::MutationDone {
                label,
                result,
                refetch,
            })
            .await;
    });
}

pub(crate) fn create_user(
    state: &Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    request: CreateUserRequest,
) {
    run_mutation(state, event_tx, "Member created", Some(Screen::Users), |api| async move {
        api.create_user(request).await.map(|_| ())
    });
}

pub(crate) fn set_user_active(
    state: &Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    id: String,
    active: bool,
) {
    let label = if active { "Member activated" } else { "Member deactivated" };
    run_mutation(state, event_tx, label, Some(Screen::Users), move |api| async move {
        let update = UpdateUserRequest {
            is_active: Some(active),
            ..Default::default()
        };
        api.update_user(&id, update).await.map(|_| ())
    });
}

pub(crate) fn delete_user(state: &Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, id: String) {
    run_mutation(state, event_tx, "Member deleted", Some(Screen::Users), move |api| async move {
        api.delete_user(&id).await
    });
}

pub(crate) fn create_campaign(
    state: &Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    request: CreateCampaignRequest,
) {
    run_mutation(
        state,
        event_tx,
        "Campaign created",
        Some(Screen::Campaigns),
        |api| async move { api.create_campaign(request).await.map(|_| ()) },
    );
}

pub(crate) fn delete_campaign(state: &Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, id: String) {
    run_mutation(
        state,
        event_tx,
        "Campaign deleted",
        Some(Screen::Campaigns),
        move |api| async move { api.delete_campaign(&id).await },
    );
}

pub(crate) fn create_prize(
    state: &Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    request: CreatePrizeRequest,
) {
    run_mutation(state, event_tx, "Prize created", Some(Screen::Prizes), |api| async move {
        api.create_prize(request).await.map(|_| ())
    });
}

pub(crate) fn delete_prize(state: &Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, id: String) {
    run_mutation(state, event_tx, "Prize deleted", Some(Screen::Prizes), move |api| async move {
        api.delete_prize(&id).await
    });
}

pub(crate) fn create_payment(
    state: &Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    request: CreatePaymentRequest,
) {
    run_mutation(
        state,
        event_tx,
        "Contribution recorded",
        Some(Screen::Campaigns),
        |api| async move { api.create_payment(request).await.map(|_| ()) },
    );
}

pub(crate) fn confirm_payment(state: &Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, id: String) {
    run_mutation(
        state,
        event_tx,
        "Payment confirmed",
        Some(Screen::Payments),
        move |api| async move { api.confirm_payment(&id).await.map(|_| ()) },
    );
}
