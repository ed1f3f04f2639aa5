//! # Dashboard Screen
//!
//! Role-aware landing screen: admins see collection totals, members see
//! their balance, spins and the running campaigns.

use egui;
use shared::{format_amount, PaymentStatus, Role};

use crate::app::{App, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::tables;
use crate::utils::format::format_timestamp;

/// Render the dashboard
pub fn render(ui: &mut egui::Ui, app: &mut App) {
    let theme = Theme::default();
    let mut goto_wheel = false;

    {
        let state = app.state.read();
        let Some(user) = state.session.user() else {
            return;
        };

        ui.heading(format!("Welcome, {}", user.first_name));
        ui.add_space(12.0);

        match user.role {
            Role::Admin => {
                let campaign_total = state
                    .campaigns
                    .page_info
                    .map(|p| p.total.to_string())
                    .unwrap_or_else(|| "-".to_string());
                let payment_total = state
                    .payments
                    .page_info
                    .map(|p| p.total.to_string())
                    .unwrap_or_else(|| "-".to_string());
                let pending = state
                    .payments
                    .items
                    .iter()
                    .filter(|p| p.status == PaymentStatus::Pending)
                    .count();

                tables::render_stats_summary(
                    ui,
                    &[
                        ("Campaigns", campaign_total),
                        ("Payments", payment_total),
                        ("Pending on this page", pending.to_string()),
                    ],
                );
                ui.add_space(15.0);
            }
            Role::Member => {
                let spins = state
                    .wheel
                    .balance
                    .map(|b| b.available_spins.to_string())
                    .unwrap_or_else(|| "-".to_string());
                tables::render_stats_summary(
                    ui,
                    &[
                        ("Balance", format_amount(user.balance)),
                        ("Spins available", spins),
                    ],
                );
                ui.add_space(8.0);
                if ui.button("Go to the wheel").clicked() {
                    goto_wheel = true;
                }
                ui.add_space(15.0);
            }
        }

        ui.separator();
        ui.add_space(8.0);
        ui.colored_label(theme.selected, "Active campaigns");
        ui.add_space(6.0);

        let active: Vec<_> = state.campaigns.items.iter().filter(|c| c.is_active).collect();
        if active.is_empty() {
            tables::render_empty_state(ui, "No active campaigns", None, &theme);
        } else {
            for campaign in active {
                ui.horizontal(|ui| {
                    ui.label(&campaign.name);
                    ui.add_sized(
                        [220.0, 16.0],
                        egui::ProgressBar::new(campaign.progress()).show_percentage(),
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
            }
        }

        if user.role == Role::Member {
            ui.add_space(15.0);
            ui.separator();
            ui.add_space(8.0);
            ui.colored_label(theme.selected, "Recent spins");
            ui.add_space(6.0);

            if state.recent_spins.is_empty() {
                tables::render_empty_state(
                    ui,
                    "No spins yet",
                    Some("Contribute to a campaign to earn spins"),
                    &theme,
                );
            } else {
                for spin in &state.recent_spins {
                    ui.horizontal(|ui| {
                        ui.colored_label(theme.dim, format_timestamp(&spin.created_at));
                        match &spin.prize {
                            Some(prize) => ui.colored_label(theme.success, &prize.name),
                            None => ui.colored_label(theme.dim, "No win"),
                        };
                    });
                }
            }
        }
    }

    if goto_wheel {
        app.handle_screen_change(Screen::Wheel);
    }
}
