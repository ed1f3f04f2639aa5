//! # Navigation Bar
//!
//! Top bar with the brand, the screens visible for the current role, and
//! the signed-in identity.

use egui::{Align, Layout, RichText};

use crate::app::Screen;
use crate::services::session::Session;
use crate::ui::theme::Theme;

/// What the user did in the navigation bar this frame.
pub enum NavAction {
    None,
    Navigate(Screen),
    Logout,
}

pub fn render(ui: &mut egui::Ui, current: Screen, session: &Session, theme: &Theme) -> NavAction {
    let mut action = NavAction::None;

    ui.horizontal(|ui| {
        ui.label(
            RichText::new("SENTINELLE")
                .strong()
                .size(18.0)
                .color(theme.selected),
        );
        ui.separator();

        for screen in Screen::all() {
            if !screen.visible_for(session.role()) {
                continue;
            }
            let selected = *screen == current;
            if ui.selectable_label(selected, screen.title()).clicked() && !selected {
                action = NavAction::Navigate(*screen);
            }
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if session.is_authenticated() {
                if ui.button("Sign out").clicked() {
                    action = NavAction::Logout;
                }
                if let Some(user) = &session.user {
                    ui.label(RichText::new(user.role.label()).color(theme.info));
                    ui.label(RichText::new(user.full_name()).color(theme.dim));
                }
            }
        });
    });

    action
}
