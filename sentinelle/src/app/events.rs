//! # Application Events
//!
//! Event types for async task communication between background tasks and the
//! UI thread.

use shared::{Campaign, Paginated, Payment, Prize, Spin, SpinBalance, SpinResult, User, WonPrize};

use crate::app::state::Screen;
use crate::core::error::ApiResult;

/// Async task results sent to the UI thread
#[derive(Debug)]
pub enum AppEvent {
    /// Login completed (the session store is already updated)
    LoginResult(ApiResult<User>),
    /// Logout completed; local state is already cleared
    LogoutComplete,
    /// Background profile revalidation completed
    ProfileChecked(ApiResult<User>),

    /// Collection loads, tagged with the fetch sequence they were spawned
    /// with so stale responses can be discarded
    UsersLoaded { seq: u64, result: ApiResult<Paginated<User>> },
    CampaignsLoaded { seq: u64, result: ApiResult<Paginated<Campaign>> },
    PrizesLoaded { seq: u64, result: ApiResult<Paginated<Prize>> },
    PaymentsLoaded { seq: u64, result: ApiResult<Paginated<Payment>> },
    SpinsLoaded { seq: u64, result: ApiResult<Paginated<Spin>> },

    /// Latest own spins for the dashboard
    RecentSpinsLoaded(ApiResult<Paginated<Spin>>),

    /// Wheel data
    SpinBalanceLoaded(ApiResult<SpinBalance>),
    SpinResolved(ApiResult<SpinResult>),
    MyPrizesLoaded(ApiResult<Vec<WonPrize>>),

    /// A create/update/delete call finished. On success the named screen's
    /// data is refetched.
    MutationDone {
        label: &'static str,
        result: ApiResult<()>,
        refetch: Option<Screen>,
    },
}
