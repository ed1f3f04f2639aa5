//! # Campaigns Screen
//!
//! Admins create and delete campaigns; members contribute to an active one.
//! Contributions earn spins at the campaign's rate.

use egui;
use shared::{format_amount, Role};

use crate::app::{App, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};
use crate::utils::format::format_date;

/// Render the campaigns screen
pub fn render(ui: &mut egui::Ui, app: &mut App) {
    let theme = Theme::default();
    let role = app.state.read().session.role();
    let mut submit_search = false;
    let mut create = false;
    let mut contribute = false;
    let mut deletions: Vec<String> = Vec::new();
    let mut page_target = None;

    {
        let mut state = app.state.write();

        ui.heading("Campaigns");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            submit_search = tables::render_search_box(ui, &mut state.campaigns.search);
            if role == Some(Role::Admin) && ui.button("New campaign").clicked() {
                state.campaign_form.open = !state.campaign_form.open;
            }
        });
        ui.add_space(8.0);

        if role == Some(Role::Admin) && state.campaign_form.open {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.colored_label(theme.selected, "New campaign");
                ui.add_space(6.0);
                forms::render_text_input(
                    ui,
                    "Name:",
                    &mut state.campaign_form.name,
                    "School roof fund",
                    false,
                    [260.0, 26.0],
                );
                forms::render_text_input(
                    ui,
                    "Description:",
                    &mut state.campaign_form.description,
                    "",
                    false,
                    [260.0, 26.0],
                );
                forms::render_text_input(
                    ui,
                    "Goal amount:",
                    &mut state.campaign_form.goal_amount,
                    "100000",
                    false,
                    [140.0, 26.0],
                );
                forms::render_text_input(
                    ui,
                    "Amount per spin:",
                    &mut state.campaign_form.amount_per_spin,
                    "500",
                    false,
                    [140.0, 26.0],
                );
                forms::render_text_input(
                    ui,
                    "Duration (days):",
                    &mut state.campaign_form.duration_days,
                    "30",
                    false,
                    [140.0, 26.0],
                );
                ui.add_space(6.0);
                if forms::render_button(ui, "Create", Some(theme.accent), None).clicked() {
                    create = true;
                }
            });
            ui.add_space(8.0);
        }

        if role == Some(Role::Member) {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.colored_label(theme.selected, "Contribute");
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    let selected_name = state
                        .contribute_form
                        .campaign_id
                        .as_ref()
                        .and_then(|id| {
                            state
                                .campaigns
                                .items
                                .iter()
                                .find(|c| &c.id == id)
                                .map(|c| c.name.clone())
                        })
                        .unwrap_or_else(|| "Pick a campaign".to_string());

                    let choices: Vec<(String, String)> = state
                        .campaigns
                        .items
                        .iter()
                        .filter(|c| c.is_active)
                        .map(|c| (c.id.clone(), c.name.clone()))
                        .collect();

                    egui::ComboBox::from_id_salt("contribute-campaign")
                        .selected_text(selected_name)
                        .show_ui(ui, |ui| {
                            for (id, name) in choices {
                                ui.selectable_value(
                                    &mut state.contribute_form.campaign_id,
                                    Some(id),
                                    name,
                                );
                            }
                        });

                    ui.add_sized(
                        [120.0, 26.0],
                        egui::TextEdit::singleline(&mut state.contribute_form.amount)
                            .hint_text("Amount"),
                    );
                    if forms::render_button(ui, "Contribute", Some(theme.accent), None).clicked() {
                        contribute = true;
                    }

                    // Live preview of the spins this contribution earns.
                    let preview = state
                        .contribute_form
                        .campaign_id
                        .as_ref()
                        .zip(state.contribute_form.amount.trim().parse::<f64>().ok())
                        .and_then(|(id, amount)| {
                            state
                                .campaigns
                                .items
                                .iter()
                                .find(|c| &c.id == id)
                                .map(|c| c.spins_for(amount))
                        });
                    if let Some(spins) = preview {
                        ui.colored_label(theme.dim, format!("earns {spins} spin(s)"));
                    }
                });
            });
            ui.add_space(8.0);
        }

        if state.campaigns.loading {
            ui.spinner();
        } else if let Some(error) = &state.campaigns.error {
            forms::render_error(ui, error, &theme);
        }

        if state.campaigns.items.is_empty() && !state.campaigns.loading {
            tables::render_empty_state(ui, "No campaigns", None, &theme);
        } else {
            let is_admin = role == Some(Role::Admin);
            let config = tables::TableConfig {
                num_columns: if is_admin { 6 } else { 5 },
                ..Default::default()
            };
            let mut headers = vec!["Name", "Progress", "Per spin", "Ends", "Status"];
            if is_admin {
                headers.push("Actions");
            }
            tables::render_table(ui, "campaigns", config, &headers, &theme, |ui| {
                for campaign in &state.campaigns.items {
                    ui.label(&campaign.name);
                    ui.horizontal(|ui| {
                        ui.add_sized(
                            [140.0, 14.0],
                            egui::ProgressBar::new(campaign.progress()),
                        );
                        ui.colored_label(
                            theme.dim,
                            format!(
                                "{} / {}",
                                format_amount(campaign.collected_amount),
                                format_amount(campaign.goal_amount)
                            ),
                        );
                    });
                    ui.label(format_amount(campaign.amount_per_spin));
                    ui.label(format_date(&campaign.ends_at));
                    if campaign.is_active {
                        ui.colored_label(theme.success, "Active");
                    } else {
                        ui.colored_label(theme.dim, "Closed");
                    }
                    if is_admin {
                        if ui.small_button("Delete").clicked() {
                            deletions.push(campaign.id.clone());
                        }
                    }
                    ui.end_row();
                }
            });
        }

        page_target = tables::render_pagination(ui, state.campaigns.page_info.as_ref(), &theme);
    }

    if submit_search {
        app.handle_search_submit(Screen::Campaigns);
    }
    if create {
        app.handle_create_campaign();
    }
    if contribute {
        app.handle_contribute();
    }
    if let Some(page) = page_target {
        app.handle_page_change(Screen::Campaigns, page);
    }
    for id in deletions {
        app.handle_delete_campaign(id);
    }
}
