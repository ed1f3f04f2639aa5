//! # Event Handler
//!
//! Handles async event results from background tasks, updating application
//! state accordingly.
//!
//! The write lock is taken per event and released before any follow-up task
//! is spawned.

use shared::{Paginated, Spin, SpinBalance, SpinResult, User, WonPrize};

use crate::app::state::{NotifyLevel, Screen};
use crate::app::tasks;
use crate::app::{App, AppEvent};
use crate::core::error::ApiResult;
use crate::ui::theme::Theme;
use crate::ui::wheel::FortuneWheel;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoginResult(result) => self.handle_login_result(result),
            AppEvent::LogoutComplete => self.handle_logout_complete(),
            AppEvent::ProfileChecked(result) => self.handle_profile_checked(result),
            AppEvent::UsersLoaded { seq, result } => {
                self.redirect_if_unauthorized(&result);
                let mut state = self.state.write();
                state.users.accept(seq, result);
                state.needs_repaint = true;
            }
            AppEvent::CampaignsLoaded { seq, result } => {
                self.redirect_if_unauthorized(&result);
                let mut state = self.state.write();
                state.campaigns.accept(seq, result);
                state.needs_repaint = true;
            }
            AppEvent::PrizesLoaded { seq, result } => self.handle_prizes_loaded(seq, result),
            AppEvent::PaymentsLoaded { seq, result } => {
                self.redirect_if_unauthorized(&result);
                let mut state = self.state.write();
                state.payments.accept(seq, result);
                state.needs_repaint = true;
            }
            AppEvent::SpinsLoaded { seq, result } => {
                self.redirect_if_unauthorized(&result);
                let mut state = self.state.write();
                state.spins.accept(seq, result);
                state.needs_repaint = true;
            }
            AppEvent::RecentSpinsLoaded(result) => self.handle_recent_spins(result),
            AppEvent::SpinBalanceLoaded(result) => self.handle_spin_balance(result),
            AppEvent::SpinResolved(result) => self.handle_spin_resolved(result),
            AppEvent::MyPrizesLoaded(result) => self.handle_my_prizes(result),
            AppEvent::MutationDone {
                label,
                result,
                refetch,
            } => self.handle_mutation_done(label, result, refetch),
        }
    }
}

impl App {
    /// On an unauthorized response outside the login screen, route the user
    /// back to login. The transport has already cleared the session.
    fn redirect_if_unauthorized<T>(&mut self, result: &ApiResult<T>) {
        let Err(err) = result else { return };
        if !err.is_unauthorized() {
            return;
        }
        let mut state = self.state.write();
        if state.current_screen != Screen::Login {
            tracing::info!("Unauthorized response; redirecting to login");
            state.current_screen = Screen::Login;
            state.notify(NotifyLevel::Warning, err.user_message());
        }
    }

    fn handle_login_result(&mut self, result: ApiResult<User>) {
        tracing::info!(event = "LoginResult", success = result.is_ok(), "Processing login result");
        match result {
            Ok(user) => {
                {
                    let mut state = self.state.write();
                    state.login_form = Default::default();
                    state.current_screen = Screen::Dashboard;
                    state.notify(
                        NotifyLevel::Success,
                        format!("Welcome back, {}", user.first_name),
                    );
                }
                crate::app::handlers::navigation::trigger_screen_fetch(
                    &self.state,
                    &self.event_tx,
                    Screen::Dashboard,
                );
            }
            Err(_) => {
                // The failure message is already on the session store and is
                // rendered inline by the login form.
                self.state.write().needs_repaint = true;
            }
        }
    }

    fn handle_logout_complete(&mut self) {
        tracing::info!(event = "LogoutComplete", "Processing logout");
        let mut state = self.state.write();
        state.current_screen = Screen::Login;
        state.login_form = Default::default();
        // Drop cached collections so nothing from the previous session
        // flashes up after the next login.
        state.users = Default::default();
        state.campaigns = Default::default();
        state.prizes = Default::default();
        state.payments = Default::default();
        state.spins = Default::default();
        state.recent_spins.clear();
        state.wheel = Default::default();
        state.notify(NotifyLevel::Info, "Signed out");
    }

    fn handle_profile_checked(&mut self, result: ApiResult<User>) {
        match result {
            Ok(user) => {
                tracing::debug!(user_id = %user.id, "Session revalidated");
            }
            Err(err) if err.is_auth_rejection() => {
                let mut state = self.state.write();
                state.current_screen = Screen::Login;
                state.notify(NotifyLevel::Warning, err.user_message());
            }
            Err(err) => {
                // Most likely offline; the optimistic session stands.
                tracing::warn!(error = %err, "Session revalidation inconclusive");
            }
        }
    }

    fn handle_prizes_loaded(&mut self, seq: u64, result: ApiResult<Paginated<shared::Prize>>) {
        self.redirect_if_unauthorized(&result);
        let mut state = self.state.write();
        let accepted = state.prizes.accept(seq, result);

        // Rebuild the wheel layout from the fresh catalogue, but never while
        // a spin animation is in flight against the old layout.
        if accepted && !state.wheel.spinning && !state.wheel.wheel.is_animating() {
            let theme = Theme::default();
            state.wheel.wheel =
                FortuneWheel::from_prizes(&state.prizes.items, &theme.wheel_palette(), theme.panel);
        }
        state.needs_repaint = true;
    }

    fn handle_recent_spins(&mut self, result: ApiResult<Paginated<Spin>>) {
        let mut state = self.state.write();
        match result {
            Ok(page) => {
                state.recent_spins = page.data;
                state.needs_repaint = true;
            }
            Err(err) => {
                tracing::debug!(error = %err, "Could not load recent spins");
            }
        }
    }

    fn handle_spin_balance(&mut self, result: ApiResult<SpinBalance>) {
        let mut state = self.state.write();
        match result {
            Ok(balance) => {
                state.wheel.balance = Some(balance);
                state.needs_repaint = true;
            }
            Err(err) => {
                tracing::debug!(error = %err, "Could not load spin balance");
            }
        }
    }

    fn handle_spin_resolved(&mut self, result: ApiResult<SpinResult>) {
        tracing::info!(event = "SpinResolved", success = result.is_ok(), "Processing spin result");
        match result {
            Ok(outcome) => {
                let mut state = self.state.write();
                if let Some(balance) = state.wheel.balance.as_mut() {
                    balance.available_spins = outcome.remaining_spins;
                    balance.used_total += 1;
                }
                let prize_id = outcome.spin.prize.as_ref().map(|p| p.id.clone());
                let segment = state
                    .wheel
                    .wheel
                    .segment_for_outcome(prize_id.as_deref(), &outcome.spin.id);
                state.wheel.wheel.spin_to(segment);
                state.wheel.pending_outcome = Some(outcome);
                // `spinning` stays true until the animation lands; the
                // outcome is revealed in `App::on_frame`.
                state.needs_repaint = true;
            }
            Err(err) => {
                self.redirect_if_unauthorized::<()>(&Err(err.clone()));
                let mut state = self.state.write();
                state.wheel.spinning = false;
                state.notify(NotifyLevel::Error, err.user_message());
            }
        }
    }

    fn handle_my_prizes(&mut self, result: ApiResult<Vec<WonPrize>>) {
        let mut state = self.state.write();
        match result {
            Ok(prizes) => {
                state.wheel.my_prizes = prizes;
                state.needs_repaint = true;
            }
            Err(err) => {
                tracing::debug!(error = %err, "Could not load won prizes");
            }
        }
    }

    fn handle_mutation_done(
        &mut self,
        label: &'static str,
        result: ApiResult<()>,
        refetch: Option<Screen>,
    ) {
        self.redirect_if_unauthorized(&result);
        match result {
            Ok(()) => {
                self.state.write().notify(NotifyLevel::Success, label);
                if let Some(screen) = refetch {
                    self.refetch_after_mutation(screen);
                }
            }
            Err(err) => {
                let mut state = self.state.write();
                state.notify(
                    NotifyLevel::Error,
                    format!("{}: {}", err.title(), err.user_message()),
                );
            }
        }
    }

    fn refetch_after_mutation(&mut self, screen: Screen) {
        match screen {
            Screen::Users => tasks::lists::fetch_users(self.state.clone(), self.event_tx.clone()),
            Screen::Campaigns => {
                tasks::lists::fetch_campaigns(self.state.clone(), self.event_tx.clone());
                // A contribution also moves the spin balance.
                tasks::wheel::fetch_balance(self.state.clone(), self.event_tx.clone());
            }
            Screen::Prizes => tasks::lists::fetch_prizes(self.state.clone(), self.event_tx.clone()),
            Screen::Payments => {
                tasks::lists::fetch_payments(self.state.clone(), self.event_tx.clone())
            }
            Screen::Wheel => {
                tasks::wheel::fetch_my_prizes(self.state.clone(), self.event_tx.clone());
                tasks::wheel::fetch_balance(self.state.clone(), self.event_tx.clone());
            }
            _ => {}
        }
    }
}
