//! # API Client
//!
//! Main HTTP client for backend API communication.
//!
//! The client attaches the current bearer token to every authenticated
//! request and classifies failures into [`ApiError`]. A 401 on an
//! authenticated request triggers exactly one token refresh (deduplicated by
//! [`super::refresh::RefreshCoordinator`]) followed by a single retry; if the
//! retried request is rejected again the session is cleared.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    AuthResponse, Campaign, CreateCampaignRequest, CreatePaymentRequest, CreatePrizeRequest,
    CreateUserRequest, ErrorResponse, ListQuery, LoginRequest, Paginated, Payment, Prize, Spin,
    SpinBalance, SpinResult, UpdateUserRequest, User, WonPrize,
};

use crate::core::error::{ApiError, ApiResult};
use crate::core::service::ApiService;
use crate::services::api::refresh::RefreshCoordinator;
use crate::services::session::SessionStore;

/// Default base URL for the backend API server.
const DEFAULT_API_URL: &str = "http://127.0.0.1:3001/api";

/// HTTP client for communicating with the backend API server.
///
/// Holds the connection pool, the base URL, the session handle used for
/// bearer attachment, and the refresh coordinator.
pub struct ApiClient {
    pub(crate) http: Client,
    base_url: String,
    session: SessionStore,
    refresh: RefreshCoordinator,
}

impl ApiClient {
    /// Create a new API client with default configuration.
    ///
    /// The client is configured with a 10 second timeout to prevent freezing.
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        ApiClient {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
            refresh: RefreshCoordinator::new(),
        }
    }

    /// Base URL from `SENTINELLE_API_URL`, with a localhost default.
    pub fn from_env(session: SessionStore) -> Self {
        let base_url =
            std::env::var("SENTINELLE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url, session)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.access_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Authenticated request with the 401 → refresh → single retry policy.
    ///
    /// The builder closure is invoked again for the retry so the new bearer
    /// token is attached to a fresh request.
    async fn execute<T: DeserializeOwned>(
        &self,
        make: impl Fn(&Client) -> RequestBuilder,
    ) -> ApiResult<T> {
        let response = self
            .authorize(make(&self.http))
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return decode(response).await;
        }

        // One refresh, one retry. Concurrent callers share the same refresh
        // outcome through the coordinator; a failed refresh already cleared
        // the session.
        self.refresh.run(self).await?;

        let retried = self
            .authorize(make(&self.http))
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        if retried.status() == StatusCode::UNAUTHORIZED {
            // The freshly refreshed token was rejected too; the session is
            // not usable anymore.
            self.session.clear();
        }
        decode(retried).await
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.execute(|http| http.get(self.url(path))).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> ApiResult<T> {
        self.execute(|http| http.get(self.url(path)).query(query))
            .await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.execute(|http| http.post(self.url(path)).json(body))
            .await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.execute(|http| http.post(self.url(path))).await
    }

    pub(crate) async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.execute(|http| http.put(self.url(path)).json(body))
            .await
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        let response = self
            .authorize(self.http.delete(self.url(path)))
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return decode_empty(response).await;
        }

        self.refresh.run(self).await?;
        let retried = self
            .authorize(self.http.delete(self.url(path)))
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        if retried.status() == StatusCode::UNAUTHORIZED {
            self.session.clear();
        }
        decode_empty(retried).await
    }

    /// Unauthenticated request: no bearer, no refresh retry. Used by login
    /// and by the refresh call itself.
    pub(crate) async fn post_public<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        decode(response).await
    }

    /// Authenticated single-shot request with no refresh retry. Used by the
    /// best-effort logout notification.
    pub(crate) async fn post_once(&self, path: &str) -> ApiResult<()> {
        let response = self
            .authorize(self.http.post(self.url(path)))
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        decode_empty(response).await
    }
}

/// Parse a success body, or classify the error status. The backend error
/// body is preserved when it parses; otherwise the status reason is used.
pub(crate) async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    let status = response.status();
    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Unknown(format!("failed to parse response: {e}")))
    } else {
        Err(classify(status, response).await)
    }
}

/// Like [`decode`] for endpoints whose success body is empty or irrelevant.
pub(crate) async fn decode_empty(response: reqwest::Response) -> ApiResult<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(classify(status, response).await)
    }
}

async fn classify(status: StatusCode, response: reqwest::Response) -> ApiError {
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };
    ApiError::from_status(status.as_u16(), message)
}

// Implement ApiService trait for ApiClient
#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn login(&self, request: LoginRequest) -> ApiResult<AuthResponse> {
        crate::services::api::auth::login(self, &request).await
    }

    async fn logout(&self) -> ApiResult<()> {
        crate::services::api::auth::logout(self).await
    }

    async fn current_user(&self) -> ApiResult<User> {
        crate::services::api::auth::me(self).await
    }

    async fn list_users(&self, query: ListQuery) -> ApiResult<Paginated<User>> {
        crate::services::api::users::list(self, &query).await
    }

    async fn create_user(&self, request: CreateUserRequest) -> ApiResult<User> {
        crate::services::api::users::create(self, &request).await
    }

    async fn update_user(&self, id: &str, update: UpdateUserRequest) -> ApiResult<User> {
        crate::services::api::users::update(self, id, &update).await
    }

    async fn delete_user(&self, id: &str) -> ApiResult<()> {
        crate::services::api::users::remove(self, id).await
    }

    async fn list_campaigns(&self, query: ListQuery) -> ApiResult<Paginated<Campaign>> {
        crate::services::api::campaigns::list(self, &query).await
    }

    async fn create_campaign(&self, request: CreateCampaignRequest) -> ApiResult<Campaign> {
        crate::services::api::campaigns::create(self, &request).await
    }

    async fn delete_campaign(&self, id: &str) -> ApiResult<()> {
        crate::services::api::campaigns::remove(self, id).await
    }

    async fn list_prizes(&self, query: ListQuery) -> ApiResult<Paginated<Prize>> {
        crate::services::api::prizes::list(self, &query).await
    }

    async fn create_prize(&self, request: CreatePrizeRequest) -> ApiResult<Prize> {
        crate::services::api::prizes::create(self, &request).await
    }

    async fn delete_prize(&self, id: &str) -> ApiResult<()> {
        crate::services::api::prizes::remove(self, id).await
    }

    async fn list_payments(&self, query: ListQuery) -> ApiResult<Paginated<Payment>> {
        crate::services::api::payments::list(self, &query).await
    }

    async fn create_payment(&self, request: CreatePaymentRequest) -> ApiResult<Payment> {
        crate::services::api::payments::create(self, &request).await
    }

    async fn confirm_payment(&self, id: &str) -> ApiResult<Payment> {
        crate::services::api::payments::confirm(self, id).await
    }

    async fn list_spins(&self, query: ListQuery) -> ApiResult<Paginated<Spin>> {
        crate::services::api::spins::list(self, &query).await
    }

    async fn spin_history(&self, query: ListQuery) -> ApiResult<Paginated<Spin>> {
        crate::services::api::spins::history(self, &query).await
    }

    async fn spin(&self) -> ApiResult<SpinResult> {
        crate::services::api::spins::spin(self).await
    }

    async fn spin_balance(&self) -> ApiResult<SpinBalance> {
        crate::services::api::spins::balance(self).await
    }

    async fn my_prizes(&self) -> ApiResult<Vec<WonPrize>> {
        crate::services::api::spins::my_prizes(self).await
    }

    async fn claim_prize(&self, id: &str) -> ApiResult<WonPrize> {
        crate::services::api::spins::claim(self, id).await
    }

    async fn deliver_prize(&self, id: &str) -> ApiResult<WonPrize> {
        crate::services::api::spins::deliver(self, id).await
    }
}
