//! # Members Screen (admin)
//!
//! Paginated, searchable member table with activate/deactivate, delete and
//! a new-member form.

use egui;
use shared::{format_amount, mask_phone};

use crate::app::{App, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};
use crate::utils::format::format_timestamp;

enum UserAction {
    Toggle(String, bool),
    Delete(String),
}

/// Render the members screen
pub fn render(ui: &mut egui::Ui, app: &mut App) {
    let theme = Theme::default();
    let mut actions: Vec<UserAction> = Vec::new();
    let mut submit_search = false;
    let mut create = false;
    let mut page_target = None;

    {
        let mut state = app.state.write();

        ui.heading("Members");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            submit_search = tables::render_search_box(ui, &mut state.users.search);
            if ui.button("New member").clicked() {
                state.user_form.open = !state.user_form.open;
            }
        });
        ui.add_space(8.0);

        if state.user_form.open {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.colored_label(theme.selected, "New member");
                ui.add_space(6.0);
                forms::render_text_input(
                    ui,
                    "Phone number:",
                    &mut state.user_form.phone_number,
                    "07...",
                    false,
                    [220.0, 26.0],
                );
                forms::render_text_input(
                    ui,
                    "First name:",
                    &mut state.user_form.first_name,
                    "",
                    false,
                    [220.0, 26.0],
                );
                forms::render_text_input(
                    ui,
                    "Last name:",
                    &mut state.user_form.last_name,
                    "",
                    false,
                    [220.0, 26.0],
                );
                forms::render_text_input(
                    ui,
                    "Password:",
                    &mut state.user_form.password,
                    "",
                    true,
                    [220.0, 26.0],
                );
                ui.checkbox(&mut state.user_form.admin, "Administrator");
                ui.add_space(6.0);
                if forms::render_button(ui, "Create", Some(theme.accent), None).clicked() {
                    create = true;
                }
            });
            ui.add_space(8.0);
        }

        if state.users.loading {
            ui.spinner();
        } else if let Some(error) = &state.users.error {
            forms::render_error(ui, error, &theme);
        }

        if state.users.items.is_empty() && !state.users.loading {
            tables::render_empty_state(ui, "No members found", None, &theme);
        } else {
            let config = tables::TableConfig {
                num_columns: 7,
                ..Default::default()
            };
            tables::render_table(
                ui,
                "users",
                config,
                &["Phone", "Name", "Role", "Balance", "Status", "Joined", "Actions"],
                &theme,
                |ui| {
                    for user in &state.users.items {
                        ui.label(mask_phone(&user.phone_number));
                        ui.label(user.full_name());
                        ui.label(user.role.label());
                        ui.label(format_amount(user.balance));
                        if user.is_active {
                            ui.colored_label(theme.success, "Active");
                        } else {
                            ui.colored_label(theme.error, "Inactive");
                        }
                        ui.label(format_timestamp(&user.created_at));
                        ui.horizontal(|ui| {
                            let toggle_label = if user.is_active { "Deactivate" } else { "Activate" };
                            if ui.small_button(toggle_label).clicked() {
                                actions.push(UserAction::Toggle(user.id.clone(), !user.is_active));
                            }
                            if ui.small_button("Delete").clicked() {
                                actions.push(UserAction::Delete(user.id.clone()));
                            }
                        });
                        ui.end_row();
                    }
                },
            );
        }

        page_target = tables::render_pagination(ui, state.users.page_info.as_ref(), &theme);
    }

    if submit_search {
        app.handle_search_submit(Screen::Users);
    }
    if create {
        app.handle_create_user();
    }
    if let Some(page) = page_target {
        app.handle_page_change(Screen::Users, page);
    }
    for action in actions {
        match action {
            UserAction::Toggle(id, active) => app.handle_toggle_user_active(id, active),
            UserAction::Delete(id) => app.handle_delete_user(id),
        }
    }
}
