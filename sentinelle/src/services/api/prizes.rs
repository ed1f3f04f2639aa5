//! # Prize Catalogue Endpoints
//!
//! CRUD over `/prizes`. The catalogue also feeds the wheel's segment layout.

use shared::{CreatePrizeRequest, ListQuery, Paginated, Prize};

use super::client::ApiClient;
use crate::core::error::ApiResult;

pub async fn list(client: &ApiClient, query: &ListQuery) -> ApiResult<Paginated<Prize>> {
    client.get_with_query("/prizes", query).await
}

#[tracing::instrument(skip(client, request), fields(name = %request.name, stock = request.stock))]
pub async fn create(client: &ApiClient, request: &CreatePrizeRequest) -> ApiResult<Prize> {
    client.post("/prizes", request).await
}

pub async fn remove(client: &ApiClient, id: &str) -> ApiResult<()> {
    client.delete(&format!("/prizes/{id}")).await
}
