//! # Payment Endpoints
//!
//! Contribution payments over `/payments`. Members record contributions;
//! admins list everything and confirm pending ones.

use shared::{CreatePaymentRequest, ListQuery, Paginated, Payment};

use super::client::ApiClient;
use crate::core::error::ApiResult;

pub async fn list(client: &ApiClient, query: &ListQuery) -> ApiResult<Paginated<Payment>> {
    client.get_with_query("/payments", query).await
}

#[tracing::instrument(skip(client, request), fields(campaign_id = %request.campaign_id, amount = request.amount))]
pub async fn create(client: &ApiClient, request: &CreatePaymentRequest) -> ApiResult<Payment> {
    client.post("/payments", request).await
}

pub async fn confirm(client: &ApiClient, id: &str) -> ApiResult<Payment> {
    client.post_empty(&format!("/payments/{id}/confirm")).await
}
