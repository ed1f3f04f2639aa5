//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::{
    AuthResponse, Campaign, CreateCampaignRequest, CreatePaymentRequest, CreatePrizeRequest,
    CreateUserRequest, ListQuery, LoginRequest, Paginated, Payment, Prize, Spin, SpinBalance,
    SpinResult, UpdateUserRequest, User, WonPrize,
};

use crate::core::error::ApiResult;

/// Trait covering every backend operation the client performs.
///
/// The concrete implementation is [`crate::services::api::ApiClient`]; the
/// trait exists so tasks and tests can inject an alternative backend.
#[async_trait]
pub trait ApiService: Send + Sync {
    // Auth
    async fn login(&self, request: LoginRequest) -> ApiResult<AuthResponse>;
    async fn logout(&self) -> ApiResult<()>;
    async fn current_user(&self) -> ApiResult<User>;

    // Users
    async fn list_users(&self, query: ListQuery) -> ApiResult<Paginated<User>>;
    async fn create_user(&self, request: CreateUserRequest) -> ApiResult<User>;
    async fn update_user(&self, id: &str, update: UpdateUserRequest) -> ApiResult<User>;
    async fn delete_user(&self, id: &str) -> ApiResult<()>;

    // Campaigns
    async fn list_campaigns(&self, query: ListQuery) -> ApiResult<Paginated<Campaign>>;
    async fn create_campaign(&self, request: CreateCampaignRequest) -> ApiResult<Campaign>;
    async fn delete_campaign(&self, id: &str) -> ApiResult<()>;

    // Prizes
    async fn list_prizes(&self, query: ListQuery) -> ApiResult<Paginated<Prize>>;
    async fn create_prize(&self, request: CreatePrizeRequest) -> ApiResult<Prize>;
    async fn delete_prize(&self, id: &str) -> ApiResult<()>;

    // Payments
    async fn list_payments(&self, query: ListQuery) -> ApiResult<Paginated<Payment>>;
    async fn create_payment(&self, request: CreatePaymentRequest) -> ApiResult<Payment>;
    async fn confirm_payment(&self, id: &str) -> ApiResult<Payment>;

    // Spins and the wheel
    async fn list_spins(&self, query: ListQuery) -> ApiResult<Paginated<Spin>>;
    async fn spin_history(&self, query: ListQuery) -> ApiResult<Paginated<Spin>>;
    async fn spin(&self) -> ApiResult<SpinResult>;
    async fn spin_balance(&self) -> ApiResult<SpinBalance>;
    async fn my_prizes(&self) -> ApiResult<Vec<WonPrize>>;
    async fn claim_prize(&self, id: &str) -> ApiResult<WonPrize>;
    async fn deliver_prize(&self, id: &str) -> ApiResult<WonPrize>;
}
