//! # Token Refresh Coordinator
//!
//! Deduplicates concurrent token refresh attempts.
//!
//! The first caller that needs a refresh starts the network call and parks
//! the in-flight future in a slot; every caller that arrives before it
//! completes clones the same [`Shared`] future and awaits the same outcome.
//! A successful refresh replaces the stored tokens; a failed refresh clears
//! the session and is terminal — no automatic retry follows.

use futures::future::{BoxFuture, FutureExt, Shared};
use reqwest::Client;
use shared::{AuthTokens, RefreshRequest, RefreshResponse};
use tokio::sync::Mutex;

use crate::core::error::{ApiError, ApiResult};
use crate::services::api::client::{decode, ApiClient};
use crate::services::session::SessionStore;

type InflightRefresh = Shared<BoxFuture<'static, ApiResult<AuthTokens>>>;

pub(crate) struct RefreshCoordinator {
    inflight: Mutex<Option<InflightRefresh>>,
}

impl RefreshCoordinator {
    pub(crate) fn new() -> Self {
        RefreshCoordinator {
            inflight: Mutex::new(None),
        }
    }

    /// Join the in-flight refresh, or start one if none is running.
    pub(crate) async fn run(&self, client: &ApiClient) -> ApiResult<AuthTokens> {
        let future = {
            let mut slot = self.inflight.lock().await;
            match slot.as_ref() {
                Some(inflight) => {
                    tracing::debug!("Joining in-flight token refresh");
                    inflight.clone()
                }
                None => {
                    let future = refresh_once(
                        client.http.clone(),
                        client.base_url().to_string(),
                        client.session().clone(),
                    )
                    .boxed()
                    .shared();
                    *slot = Some(future.clone());
                    future
                }
            }
        };

        let result = future.clone().await;

        // Only the future we awaited may vacate the slot; a newer refresh
        // started after this one resolved must not be evicted.
        let mut slot = self.inflight.lock().await;
        if slot.as_ref().is_some_and(|inflight| inflight.ptr_eq(&future)) {
            *slot = None;
        }

        result
    }
}

/// The single network refresh behind the shared future.
async fn refresh_once(
    http: Client,
    base_url: String,
    session: SessionStore,
) -> ApiResult<AuthTokens> {
    let Some(refresh_token) = session.refresh_token() else {
        tracing::warn!("No refresh token available; session cannot be recovered");
        session.clear();
        return Err(ApiError::Unauthorized("no refresh token".to_string()));
    };

    tracing::info!("Refreshing access token");
    let request = RefreshRequest { refresh_token };
    let response = http
        .post(format!("{base_url}/auth/refresh"))
        .json(&request)
        .send()
        .await
        .map_err(ApiError::from_reqwest)?;

    match decode::<RefreshResponse>(response).await {
        Ok(refreshed) => {
            let tokens = session.apply_refresh(&refreshed);
            tracing::info!("Access token refreshed");
            Ok(tokens)
        }
        Err(err) => {
            // Terminal for this session: callers are expected to route the
            // user back to the login screen.
            tracing::warn!(error = %err, "Token refresh failed; clearing session");
            session.clear();
            Err(err)
        }
    }
}
