//! # Payments Screen
//!
//! Contribution history. The backend scopes the collection: members see
//! their own payments, admins see everything and can confirm pending ones.

use egui;
use shared::{format_amount, PaymentStatus, Role};

use crate::app::{App, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};
use crate::utils::format::format_timestamp;

/// Render the payments screen
pub fn render(ui: &mut egui::Ui, app: &mut App) {
    let theme = Theme::default();
    let role = app.state.read().session.role();
    let is_admin = role == Some(Role::Admin);
    let mut submit_search = false;
    let mut confirmations: Vec<String> = Vec::new();
    let mut page_target = None;

    {
        let mut state = app.state.write();

        ui.heading("Payments");
        ui.add_space(8.0);

        submit_search = tables::render_search_box(ui, &mut state.payments.search);
        ui.add_space(8.0);

        if state.payments.loading {
            ui.spinner();
        } else if let Some(error) = &state.payments.error {
            forms::render_error(ui, error, &theme);
        }

        if state.payments.items.is_empty() && !state.payments.loading {
            tables::render_empty_state(ui, "No payments recorded", None, &theme);
        } else {
            let config = tables::TableConfig {
                num_columns: if is_admin { 7 } else { 6 },
                ..Default::default()
            };
            let mut headers = vec!["Date", "Member", "Campaign", "Amount", "Spins", "Status"];
            if is_admin {
                headers.push("Actions");
            }
            tables::render_table(ui, "payments", config, &headers, &theme, |ui| {
                for payment in &state.payments.items {
                    let status_color = match payment.status {
                        PaymentStatus::Confirmed => theme.success,
                        PaymentStatus::Pending => theme.warning,
                        PaymentStatus::Failed => theme.error,
                    };

                    ui.label(format_timestamp(&payment.created_at));
                    ui.label(&payment.user_id);
                    ui.label(&payment.campaign_id);
                    ui.label(format_amount(payment.amount));
                    ui.label(payment.spins_awarded.to_string());
                    ui.colored_label(status_color, payment.status.label());
                    if is_admin {
                        if payment.status == PaymentStatus::Pending {
                            if ui.small_button("Confirm").clicked() {
                                confirmations.push(payment.id.clone());
                            }
                        } else {
                            ui.label("");
                        }
                    }
                    ui.end_row();
                }
            });
        }

        page_target = tables::render_pagination(ui, state.payments.page_info.as_ref(), &theme);
    }

    if submit_search {
        app.handle_search_submit(Screen::Payments);
    }
    if let Some(page) = page_target {
        app.handle_page_change(Screen::Payments, page);
    }
    for id in confirmations {
        app.handle_confirm_payment(id);
    }
}
