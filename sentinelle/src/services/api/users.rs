//! # User Management Endpoints
//!
//! Admin-side CRUD over `/users`.

use shared::{CreateUserRequest, ListQuery, Paginated, UpdateUserRequest, User};

use super::client::ApiClient;
use crate::core::error::ApiResult;

pub async fn list(client: &ApiClient, query: &ListQuery) -> ApiResult<Paginated<User>> {
    client.get_with_query("/users", query).await
}

pub async fn create(client: &ApiClient, request: &CreateUserRequest) -> ApiResult<User> {
    client.post("/users", request).await
}

pub async fn update(client: &ApiClient, id: &str, update: &UpdateUserRequest) -> ApiResult<User> {
    client.put(&format!("/users/{id}"), update).await
}

pub async fn remove(client: &ApiClient, id: &str) -> ApiResult<()> {
    client.delete(&format!("/users/{id}")).await
}
