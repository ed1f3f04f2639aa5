//! # Spin and Wheel Endpoints
//!
//! The wheel outcome is decided entirely server-side: `spin` returns the
//! resolved prize-or-nothing result and the client only animates it.

use shared::{ListQuery, Paginated, Spin, SpinBalance, SpinResult, WonPrize};

use super::client::ApiClient;
use crate::core::error::ApiResult;

/// Full spin collection (admin view of `/spins`).
pub async fn list(client: &ApiClient, query: &ListQuery) -> ApiResult<Paginated<Spin>> {
    client.get_with_query("/spins", query).await
}

/// The caller's own spin history.
pub async fn history(client: &ApiClient, query: &ListQuery) -> ApiResult<Paginated<Spin>> {
    client.get_with_query("/spins/history", query).await
}

/// Consume one spin and get the server-resolved outcome.
#[tracing::instrument(skip(client))]
pub async fn spin(client: &ApiClient) -> ApiResult<SpinResult> {
    let result: ApiResult<SpinResult> = client.post_empty("/spins/spin").await;
    if let Ok(outcome) = &result {
        tracing::info!(
            spin_id = %outcome.spin.id,
            won = outcome.spin.prize.is_some(),
            remaining = outcome.remaining_spins,
            "Spin resolved"
        );
    }
    result
}

pub async fn balance(client: &ApiClient) -> ApiResult<SpinBalance> {
    client.get("/spins/balance").await
}

pub async fn my_prizes(client: &ApiClient) -> ApiResult<Vec<WonPrize>> {
    client.get("/spins/prizes/my").await
}

pub async fn claim(client: &ApiClient, id: &str) -> ApiResult<WonPrize> {
    client.post_empty(&format!("/spins/prizes/{id}/claim")).await
}

pub async fn deliver(client: &ApiClient, id: &str) -> ApiResult<WonPrize> {
    client
        .post_empty(&format!("/spins/prizes/{id}/deliver"))
        .await
}
