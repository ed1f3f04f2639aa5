//! # Campaign Endpoints
//!
//! CRUD over `/campaigns`. Members read; admins create and delete.

use shared::{Campaign, CreateCampaignRequest, ListQuery, Paginated};

use super::client::ApiClient;
use crate::core::error::ApiResult;

pub async fn list(client: &ApiClient, query: &ListQuery) -> ApiResult<Paginated<Campaign>> {
    client.get_with_query("/campaigns", query).await
}

#[tracing::instrument(skip(client, request), fields(name = %request.name))]
pub async fn create(client: &ApiClient, request: &CreateCampaignRequest) -> ApiResult<Campaign> {
    client.post("/campaigns", request).await
}

pub async fn remove(client: &ApiClient, id: &str) -> ApiResult<()> {
    client.delete(&format!("/campaigns/{id}")).await
}
