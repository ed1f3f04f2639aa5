//! # Rendering
//!
//! Top-level frame layout: navigation bar, guarded central content, status
//! bar, and toast notifications.
//!
//! The route guard is evaluated here every frame before any protected
//! screen is drawn. `Loading` renders a spinner (session still
//! rehydrating), `Deny` renders the permission-denied view; redirects for
//! missing sessions are applied by `App::on_tick` before this runs.

pub mod screens;
pub mod theme;
pub mod wheel;
pub mod widgets;

use crate::app::{App, RouteDecision, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::nav_bar::{self, NavAction};
use crate::ui::widgets::notifications::NotificationManager;
use crate::ui::widgets::status_bar;

/// Render one frame.
pub fn render(ctx: &egui::Context, app: &mut App, toasts: &mut NotificationManager) {
    // Hand queued notifications to the toast system.
    let pending = {
        let mut state = app.state.write();
        std::mem::take(&mut state.pending_notifications)
    };
    for (level, message) in pending {
        toasts.push(level, message);
    }

    let (screen, session, api_base) = {
        let state = app.state.read();
        (
            state.current_screen,
            state.session.snapshot(),
            state.api.base_url().to_string(),
        )
    };
    let theme = Theme::default();

    let mut nav_action = NavAction::None;
    if screen != Screen::Login {
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.add_space(4.0);
            nav_action = nav_bar::render(ui, screen, &session, &theme);
            ui.add_space(4.0);
        });
    }

    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        status_bar::render(ui, &session, &api_base, &theme);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        match screen.guard().evaluate(session.status, session.role()) {
            RouteDecision::Loading => render_loading(ui, &theme),
            RouteDecision::Deny => render_permission_denied(ui, &theme),
            // `RequireLogin` is already resolved by the tick-time guard;
            // render the login screen if a frame still lands here.
            RouteDecision::RequireLogin => screens::login::render(ui, app),
            RouteDecision::Allow => match screen {
                Screen::Login => screens::login::render(ui, app),
                Screen::Dashboard => screens::dashboard::render(ui, app),
                Screen::Users => screens::users::render(ui, app),
                Screen::Campaigns => screens::campaigns::render(ui, app),
                Screen::Prizes => screens::prizes::render(ui, app),
                Screen::Payments => screens::payments::render(ui, app),
                Screen::Spins => screens::spins::render(ui, app),
                Screen::Wheel => screens::wheel::render(ui, app),
            },
        }
    });

    match nav_action {
        NavAction::Navigate(target) => app.handle_screen_change(target),
        NavAction::Logout => app.handle_logout_click(),
        NavAction::None => {}
    }
}

fn render_loading(ui: &mut egui::Ui, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(140.0);
        ui.spinner();
        ui.add_space(10.0);
        ui.colored_label(theme.dim, "Restoring session...");
    });
}

fn render_permission_denied(ui: &mut egui::Ui, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        ui.colored_label(theme.error, egui::RichText::new("Permission denied").size(22.0));
        ui.add_space(10.0);
        ui.colored_label(
            theme.dim,
            "Your account does not have access to this screen.",
        );
    });
}
