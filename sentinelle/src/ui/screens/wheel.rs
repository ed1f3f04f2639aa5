//! # Fortune Wheel Screen
//!
//! Spin balance, the animated wheel, and the won-prize list with claim
//! (member) and deliver (admin) actions.

use egui;
use shared::{Role, WonPrizeStatus};

use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};
use crate::utils::format::format_timestamp;

enum PrizeAction {
    Claim(String),
    Deliver(String),
}

/// Render the wheel screen
pub fn render(ui: &mut egui::Ui, app: &mut App) {
    let theme = Theme::default();
    let mut spin = false;
    let mut actions: Vec<PrizeAction> = Vec::new();

    {
        let state = app.state.read();
        let role = state.session.role();

        ui.columns(2, |columns| {
            // Left column: the wheel itself
            let ui = &mut columns[0];
            ui.vertical_centered(|ui| {
                ui.heading("Fortune Wheel");
                ui.add_space(6.0);

                match state.wheel.balance {
                    Some(balance) => {
                        ui.colored_label(
                            theme.selected,
                            format!("{} spin(s) available", balance.available_spins),
                        );
                        ui.colored_label(
                            theme.dim,
                            format!(
                                "earned {} | used {}",
                                balance.earned_total, balance.used_total
                            ),
                        );
                    }
                    None => {
                        ui.colored_label(theme.dim, "Loading balance...");
                    }
                }
                ui.add_space(10.0);

                let size = 320.0;
                let (response, painter) =
                    ui.allocate_painter(egui::vec2(size, size + 28.0), egui::Sense::hover());
                let center = response.rect.center() + egui::vec2(0.0, 10.0);
                state.wheel.wheel.render(&painter, center, size / 2.0 - 18.0);

                ui.add_space(10.0);

                let available = state
                    .wheel
                    .balance
                    .map(|b| b.available_spins)
                    .unwrap_or(0);
                let can_spin = !state.wheel.spinning && available > 0;
                if ui
                    .add_enabled(
                        can_spin,
                        egui::Button::new(egui::RichText::new("SPIN").size(18.0).strong())
                            .min_size(egui::vec2(140.0, 42.0))
                            .fill(theme.accent),
                    )
                    .clicked()
                {
                    spin = true;
                }

                ui.add_space(8.0);
                if state.wheel.spinning {
                    ui.colored_label(theme.dim, "Spinning...");
                } else if let Some(last) = &state.wheel.last_outcome {
                    match &last.prize {
                        Some(prize) => {
                            ui.colored_label(theme.success, format!("You won {}!", prize.name))
                        }
                        None => ui.colored_label(theme.dim, "No win this time"),
                    };
                } else if available == 0 {
                    forms::render_hint(ui, "Contribute to a campaign to earn spins", &theme);
                }
            });

            // Right column: won prizes
            let ui = &mut columns[1];
            ui.heading(if role == Some(Role::Admin) {
                "Won prizes"
            } else {
                "My prizes"
            });
            ui.add_space(8.0);

            if state.wheel.my_prizes.is_empty() {
                tables::render_empty_state(ui, "Nothing won yet", None, &theme);
            } else {
                egui::ScrollArea::vertical()
                    .id_salt("won-prizes")
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        for won in &state.wheel.my_prizes {
                            ui.horizontal(|ui| {
                                ui.label(&won.prize.name);
                                let status_color = match won.status {
                                    WonPrizeStatus::Won => theme.warning,
                                    WonPrizeStatus::Claimed => theme.info,
                                    WonPrizeStatus::Delivered => theme.success,
                                };
                                ui.colored_label(status_color, won.status.label());
                                ui.colored_label(theme.dim, format_timestamp(&won.won_at));

                                match (role, won.status) {
                                    (Some(Role::Member), WonPrizeStatus::Won) => {
                                        if ui.small_button("Claim").clicked() {
                                            actions.push(PrizeAction::Claim(won.id.clone()));
                                        }
                                    }
                                    (Some(Role::Admin), WonPrizeStatus::Claimed) => {
                                        if ui.small_button("Deliver").clicked() {
                                            actions.push(PrizeAction::Deliver(won.id.clone()));
                                        }
                                    }
                                    _ => {}
                                }
                            });
                            ui.separator();
                        }
                    });
            }
        });
    }

    if spin {
        app.handle_spin_click();
    }
    for action in actions {
        match action {
            PrizeAction::Claim(id) => app.handle_claim_prize(id),
            PrizeAction::Deliver(id) => app.handle_deliver_prize(id),
        }
    }
}
