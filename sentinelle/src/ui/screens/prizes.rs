//! # Prizes Screen (admin)
//!
//! Prize catalogue management. The catalogue drives the wheel layout.

use egui;

use crate::app::{App, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};
use crate::utils::format::format_timestamp;

/// Render the prizes screen
pub fn render(ui: &mut egui::Ui, app: &mut App) {
    let theme = Theme::default();
    let mut submit_search = false;
    let mut create = false;
    let mut deletions: Vec<String> = Vec::new();
    let mut page_target = None;

    {
        let mut state = app.state.write();

        ui.heading("Prizes");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            submit_search = tables::render_search_box(ui, &mut state.prizes.search);
            if ui.button("New prize").clicked() {
                state.prize_form.open = !state.prize_form.open;
            }
        });
        ui.add_space(8.0);

        if state.prize_form.open {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.colored_label(theme.selected, "New prize");
                ui.add_space(6.0);
                forms::render_text_input(
                    ui,
                    "Name:",
                    &mut state.prize_form.name,
                    "Solar lamp",
                    false,
                    [220.0, 26.0],
                );
                forms::render_text_input(
                    ui,
                    "Description:",
                    &mut state.prize_form.description,
                    "",
                    false,
                    [220.0, 26.0],
                );
                forms::render_text_input(
                    ui,
                    "Stock:",
                    &mut state.prize_form.stock,
                    "10",
                    false,
                    [100.0, 26.0],
                );
                ui.add_space(6.0);
                if forms::render_button(ui, "Create", Some(theme.accent), None).clicked() {
                    create = true;
                }
            });
            ui.add_space(8.0);
        }

        if state.prizes.loading {
            ui.spinner();
        } else if let Some(error) = &state.prizes.error {
            forms::render_error(ui, error, &theme);
        }

        if state.prizes.items.is_empty() && !state.prizes.loading {
            tables::render_empty_state(
                ui,
                "No prizes yet",
                Some("The wheel needs at least one in-stock prize"),
                &theme,
            );
        } else {
            let config = tables::TableConfig {
                num_columns: 6,
                ..Default::default()
            };
            tables::render_table(
                ui,
                "prizes",
                config,
                &["Name", "Description", "Stock", "Status", "Added", "Actions"],
                &theme,
                |ui| {
                    for prize in &state.prizes.items {
                        ui.label(&prize.name);
                        ui.label(&prize.description);
                        if prize.stock == 0 {
                            ui.colored_label(theme.error, "0");
                        } else {
                            ui.label(prize.stock.to_string());
                        }
                        if prize.is_active {
                            ui.colored_label(theme.success, "Active");
                        } else {
                            ui.colored_label(theme.dim, "Inactive");
                        }
                        ui.label(format_timestamp(&prize.created_at));
                        if ui.small_button("Delete").clicked() {
                            deletions.push(prize.id.clone());
                        }
                        ui.end_row();
                    }
                },
            );
        }

        page_target = tables::render_pagination(ui, state.prizes.page_info.as_ref(), &theme);
    }

    if submit_search {
        app.handle_search_submit(Screen::Prizes);
    }
    if create {
        app.handle_create_prize();
    }
    if let Some(page) = page_target {
        app.handle_page_change(Screen::Prizes, page);
    }
    for id in deletions {
        app.handle_delete_prize(id);
    }
}
