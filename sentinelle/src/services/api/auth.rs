//! # Authentication Endpoints
//!
//! Login, best-effort logout, and profile revalidation.

use shared::{mask_phone, AuthResponse, LoginRequest, User};

use super::client::ApiClient;
use crate::core::error::ApiResult;

/// Login with phone number and password.
#[tracing::instrument(skip(client, request), fields(phone = %mask_phone(&request.phone_number)))]
pub async fn login(client: &ApiClient, request: &LoginRequest) -> ApiResult<AuthResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let result: ApiResult<AuthResponse> = client.post_public("/auth/login", request).await;
    let duration = start.elapsed();

    match &result {
        Ok(response) => {
            tracing::info!(
                user_id = %response.user.id,
                role = response.user.role.label(),
                duration_ms = duration.as_millis() as u64,
                "Login successful"
            );
        }
        Err(err) => {
            tracing::warn!(
                error = %err,
                duration_ms = duration.as_millis() as u64,
                "Login failed"
            );
        }
    }
    result
}

/// Notify the server of a logout. Single shot: a 401 here must not trigger a
/// refresh, the caller is about to drop the session either way.
pub async fn logout(client: &ApiClient) -> ApiResult<()> {
    client.post_once("/auth/logout").await
}

/// Fetch the current user profile for session revalidation.
pub async fn me(client: &ApiClient) -> ApiResult<User> {
    client.get("/auth/me").await
}
