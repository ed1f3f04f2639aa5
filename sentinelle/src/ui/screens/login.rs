//! # Login Screen
//!
//! Phone number + password form. Validation failures and backend rejections
//! are rendered inline from the session store's error field.

use egui;

use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

/// Render the login screen
pub fn render(ui: &mut egui::Ui, app: &mut App) {
    let theme = Theme::default();
    let session = app.state.read().session.snapshot();
    let mut submit = false;

    {
        let mut state = app.state.write();

        ui.vertical_centered(|ui| {
            ui.add_space(90.0);
            forms::render_form_heading(ui, "SENTINELLE", &theme);
            ui.colored_label(theme.dim, "Community campaigns, contributions and rewards");
            ui.add_space(35.0);

            forms::render_text_input(
                ui,
                "Phone number:",
                &mut state.login_form.phone_number,
                "0712345678",
                false,
                [260.0, 30.0],
            );
            ui.add_space(10.0);

            let password_response = forms::render_text_input(
                ui,
                "Password:",
                &mut state.login_form.password,
                "Enter password",
                true,
                [260.0, 30.0],
            );
            if password_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }

            ui.add_space(15.0);

            if session.loading {
                ui.spinner();
                ui.colored_label(theme.dim, "Signing in...");
            } else if let Some(error) = &session.error {
                forms::render_error(ui, error, &theme);
            }

            if forms::render_button(
                ui,
                "Sign In",
                Some(theme.accent),
                Some(egui::vec2(120.0, 35.0)),
            )
            .clicked()
            {
                submit = true;
            }

            ui.add_space(10.0);
            forms::render_hint(ui, "Press <Enter> to sign in", &theme);
        });
    }

    if submit && !session.loading {
        app.handle_login_click();
    }
}
