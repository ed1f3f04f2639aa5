//! # Status Bar
//!
//! Bottom strip: app version, backend endpoint, session state.

use egui::RichText;
use shared::mask_phone;

use crate::services::session::{Session, SessionStatus};
use crate::ui::theme::Theme;

pub fn render(ui: &mut egui::Ui, session: &Session, api_base: &str, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!("SENTINELLE v{}", env!("CARGO_PKG_VERSION")))
                .size(11.0)
                .color(theme.dim),
        );
        ui.separator();
        ui.label(RichText::new(api_base).size(11.0).color(theme.dim));
        ui.separator();

        let (text, color) = match session.status {
            SessionStatus::Rehydrating => ("Restoring session...".to_string(), theme.warning),
            SessionStatus::Unauthenticated => ("Not signed in".to_string(), theme.dim),
            SessionStatus::Authenticated => {
                let who = session
                    .user
                    .as_ref()
                    .map(|u| mask_phone(&u.phone_number))
                    .unwrap_or_default();
                (format!("Signed in ({who})"), theme.success)
            }
        };
        ui.label(RichText::new(text).size(11.0).color(color));
    });
}
