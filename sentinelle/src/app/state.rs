//! # Application State Types
//!
//! All state-related types for the application: screens, per-screen list
//! state, form buffers, and the wheel mini-game state.

use std::sync::Arc;

use shared::{Campaign, PageInfo, Paginated, Payment, Prize, Spin, SpinBalance, SpinResult, User, WonPrize};

use crate::core::error::ApiResult;
use crate::services::api::ApiClient;
use crate::services::session::SessionStore;
use crate::ui::wheel::FortuneWheel;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Login form
    Login,
    /// Role-aware landing screen
    Dashboard,
    /// User management (admin)
    Users,
    /// Contribution campaigns
    Campaigns,
    /// Prize catalogue (admin)
    Prizes,
    /// Contribution payments
    Payments,
    /// Spin history
    Spins,
    /// Fortune wheel mini-game
    Wheel,
}

impl Screen {
    /// All screens in navigation order
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Login,
            Screen::Dashboard,
            Screen::Campaigns,
            Screen::Wheel,
            Screen::Spins,
            Screen::Payments,
            Screen::Users,
            Screen::Prizes,
        ]
    }

    /// Screen title for the header and navigation bar
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Sign In",
            Screen::Dashboard => "Dashboard",
            Screen::Users => "Members",
            Screen::Campaigns => "Campaigns",
            Screen::Prizes => "Prizes",
            Screen::Payments => "Payments",
            Screen::Spins => "Spin History",
            Screen::Wheel => "Fortune Wheel",
        }
    }
}

/// Notification severity for the toast widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Success,
    Error,
    Warning,
    Info,
}

/// Shared shape of every paginated collection screen.
///
/// `fetch_seq` guards against stale responses: each fetch bumps it, the
/// response carries the value it was spawned with, and only a response with
/// the current value may write the list.
#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_info: Option<PageInfo>,
    pub search: String,
    pub loading: bool,
    pub error: Option<String>,
    pub fetch_seq: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        ListState {
            items: Vec::new(),
            page: 1,
            page_info: None,
            search: String::new(),
            loading: false,
            error: None,
            fetch_seq: 0,
        }
    }
}

impl<T> ListState<T> {
    /// Mark a fetch as started and return its sequence number.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.loading = true;
        self.fetch_seq
    }

    /// Apply a fetch result. Returns `false` when the response is stale
    /// (superseded by a newer fetch) and was discarded.
    pub fn accept(&mut self, seq: u64, result: ApiResult<Paginated<T>>) -> bool {
        if seq != self.fetch_seq {
            tracing::debug!(stale_seq = seq, current_seq = self.fetch_seq, "Dropping stale list response");
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.page = page.pagination.page.max(1);
                self.items = page.data;
                self.page_info = Some(page.pagination);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.user_message());
            }
        }
        true
    }
}

/// Login form buffer. The failure message lives on the session store.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub phone_number: String,
    pub password: String,
}

/// New-member form (admin).
#[derive(Debug, Clone, Default)]
pub struct UserForm {
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub admin: bool,
    pub open: bool,
}

/// New-campaign form (admin). Numeric fields stay strings for input
/// handling and are validated on submit.
#[derive(Debug, Clone, Default)]
pub struct CampaignForm {
    pub name: String,
    pub description: String,
    pub goal_amount: String,
    pub amount_per_spin: String,
    pub duration_days: String,
    pub open: bool,
}

/// New-prize form (admin).
#[derive(Debug, Clone, Default)]
pub struct PrizeForm {
    pub name: String,
    pub description: String,
    pub stock: String,
    pub open: bool,
}

/// Contribution form (member).
#[derive(Debug, Clone, Default)]
pub struct ContributeForm {
    pub campaign_id: Option<String>,
    pub amount: String,
}

/// Wheel mini-game state. The outcome arrives fully resolved from the
/// backend; this only tracks the animation around it.
pub struct WheelState {
    pub wheel: FortuneWheel,
    pub balance: Option<SpinBalance>,
    pub my_prizes: Vec<WonPrize>,
    /// Resolved outcome held back until the animation lands.
    pub pending_outcome: Option<SpinResult>,
    /// Outcome of the last finished spin, shown next to the wheel.
    pub last_outcome: Option<Spin>,
    /// True from the spin click until the animation finishes.
    pub spinning: bool,
    pub loading: bool,
}

impl Default for WheelState {
    fn default() -> Self {
        WheelState {
            wheel: FortuneWheel::default(),
            balance: None,
            my_prizes: Vec::new(),
            pending_outcome: None,
            last_outcome: None,
            spinning: false,
            loading: false,
        }
    }
}

/// Global application state
pub struct AppState {
    /// Current active screen
    pub current_screen: Screen,
    /// Login form buffer
    pub login_form: LoginForm,
    /// Collection screens
    pub users: ListState<User>,
    pub campaigns: ListState<Campaign>,
    pub prizes: ListState<Prize>,
    pub payments: ListState<Payment>,
    pub spins: ListState<Spin>,
    /// Latest own spins for the dashboard
    pub recent_spins: Vec<Spin>,
    /// Wheel mini-game
    pub wheel: WheelState,
    /// Management form buffers
    pub user_form: UserForm,
    pub campaign_form: CampaignForm,
    pub prize_form: PrizeForm,
    pub contribute_form: ContributeForm,
    /// Session store handle (single source of truth for auth state)
    pub session: SessionStore,
    /// API client
    pub api: Arc<ApiClient>,
    /// Pending notifications to hand to the toast widget
    pub pending_notifications: Vec<(NotifyLevel, String)>,
    /// Flag to request immediate repaint
    pub needs_repaint: bool,
}

impl AppState {
    pub fn new(session: SessionStore, api: Arc<ApiClient>) -> Self {
        AppState {
            current_screen: Screen::Login,
            login_form: LoginForm::default(),
            users: ListState::default(),
            campaigns: ListState::default(),
            prizes: ListState::default(),
            payments: ListState::default(),
            spins: ListState::default(),
            recent_spins: Vec::new(),
            wheel: WheelState::default(),
            user_form: UserForm::default(),
            campaign_form: CampaignForm::default(),
            prize_form: PrizeForm::default(),
            contribute_form: ContributeForm::default(),
            session,
            api,
            pending_notifications: Vec::new(),
            needs_repaint: false,
        }
    }

    pub fn notify(&mut self, level: NotifyLevel, message: impl Into<String>) {
        self.pending_notifications.push((level, message.into()));
        self.needs_repaint = true;
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ApiError;

    fn page_of(names: &[&str], page: u32, seq_total: u64) -> Paginated<String> {
        Paginated {
            data: names.iter().map(|n| n.to_string()).collect(),
            pagination: PageInfo {
                page,
                limit: 20,
                total: seq_total,
                total_pages: 1,
            },
        }
    }

    #[test]
    fn accept_applies_matching_sequence() {
        let mut list: ListState<String> = ListState::default();
        let seq = list.begin_fetch();
        assert!(list.loading);

        assert!(list.accept(seq, Ok(page_of(&["a", "b"], 1, 2))));
        assert!(!list.loading);
        assert_eq!(list.items.len(), 2);
        assert!(list.error.is_none());
    }

    #[test]
    fn accept_drops_stale_sequence() {
        let mut list: ListState<String> = ListState::default();
        let first = list.begin_fetch();
        let second = list.begin_fetch();

        // The first (superseded) response arrives late and must not win.
        assert!(!list.accept(first, Ok(page_of(&["stale"], 1, 1))));
        assert!(list.items.is_empty());
        assert!(list.loading);

        assert!(list.accept(second, Ok(page_of(&["fresh"], 1, 1))));
        assert_eq!(list.items, vec!["fresh".to_string()]);
    }

    #[test]
    fn accept_records_error_message() {
        let mut list: ListState<String> = ListState::default();
        let seq = list.begin_fetch();
        assert!(list.accept(seq, Err(ApiError::Server("boom".into()))));
        assert!(!list.loading);
        assert!(list.error.is_some());
        assert!(list.items.is_empty());
    }
}
