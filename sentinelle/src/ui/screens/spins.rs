//! # Spin History Screen
//!
//! Paginated spin history. The backend scopes the collection by role.

use egui;
use shared::Role;

use crate::app::{App, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};
use crate::utils::format::format_timestamp;

/// Render the spin history screen
pub fn render(ui: &mut egui::Ui, app: &mut App) {
    let theme = Theme::default();
    let is_admin = app.state.read().session.role() == Some(Role::Admin);
    let mut submit_search = false;
    let mut page_target = None;

    {
        let mut state = app.state.write();

        ui.heading("Spin History");
        ui.add_space(8.0);

        submit_search = tables::render_search_box(ui, &mut state.spins.search);
        ui.add_space(8.0);

        if state.spins.loading {
            ui.spinner();
        } else if let Some(error) = &state.spins.error {
            forms::render_error(ui, error, &theme);
        }

        if state.spins.items.is_empty() && !state.spins.loading {
            tables::render_empty_state(
                ui,
                "No spins yet",
                Some("Spins appear here as soon as the wheel is used"),
                &theme,
            );
        } else {
            let config = tables::TableConfig {
                num_columns: if is_admin { 4 } else { 3 },
                ..Default::default()
            };
            let mut headers = vec!["Date", "Outcome", "Campaign"];
            if is_admin {
                headers.insert(1, "Member");
            }
            tables::render_table(ui, "spins", config, &headers, &theme, |ui| {
                for spin in &state.spins.items {
                    ui.label(format_timestamp(&spin.created_at));
                    if is_admin {
                        ui.label(&spin.user_id);
                    }
                    match &spin.prize {
                        Some(prize) => ui.colored_label(theme.success, &prize.name),
                        None => ui.colored_label(theme.dim, "No win"),
                    };
                    ui.label(spin.campaign_id.as_deref().unwrap_or("-"));
                    ui.end_row();
                }
            });
        }

        page_target = tables::render_pagination(ui, state.spins.page_info.as_ref(), &theme);
    }

    if submit_search {
        app.handle_search_submit(Screen::Spins);
    }
    if let Some(page) = page_target {
        app.handle_page_change(Screen::Spins, page);
    }
}
