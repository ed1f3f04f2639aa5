//! # Table Components
//!
//! Reusable table/grid components for displaying data consistently

use egui;
use shared::PageInfo;

use crate::ui::theme::Theme;

/// Configuration for table styling
pub struct TableConfig {
    pub num_columns: usize,
    pub spacing: [f32; 2],
    pub striped: bool,
    pub scrollable: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            num_columns: 4,
            spacing: [12.0, 6.0],
            striped: true,
            scrollable: true,
        }
    }
}

/// Render a data table with headers and rows
pub fn render_table<F>(
    ui: &mut egui::Ui,
    id: &str,
    config: TableConfig,
    headers: &[&str],
    theme: &Theme,
    render_rows: F,
) where
    F: FnOnce(&mut egui::Ui),
{
    let table_render = |ui: &mut egui::Ui| {
        egui::Grid::new(id)
            .num_columns(config.num_columns)
            .spacing(config.spacing)
            .striped(config.striped)
            .show(ui, |ui| {
                // Header row
                for header in headers {
                    ui.colored_label(theme.selected, *header);
                }
                ui.end_row();

                // Rows (rendered by callback)
                render_rows(ui);
            });
    };

    if config.scrollable {
        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, table_render);
    } else {
        table_render(ui);
    }
}

/// Render an empty state message
pub fn render_empty_state(
    ui: &mut egui::Ui,
    primary_text: &str,
    secondary_text: Option<&str>,
    theme: &Theme,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.colored_label(theme.dim, primary_text);
        if let Some(secondary) = secondary_text {
            ui.add_space(10.0);
            ui.colored_label(theme.dim, secondary);
        }
    });
}

/// Render stats summary (e.g., "Total: X | Pending: Y")
pub fn render_stats_summary(ui: &mut egui::Ui, stats: &[(&str, String)]) {
    ui.horizontal(|ui| {
        let parts: Vec<String> = stats
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect();
        ui.label(parts.join("  |  "));
    });
}

/// Render a search box with an apply button. Returns `true` when the search
/// should be (re-)applied.
pub fn render_search_box(ui: &mut egui::Ui, value: &mut String) -> bool {
    let mut submit = false;
    ui.horizontal(|ui| {
        let response = ui.add_sized(
            [220.0, 26.0],
            egui::TextEdit::singleline(value).hint_text("Search"),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }
        if ui.button("Search").clicked() {
            submit = true;
        }
    });
    submit
}

/// Render the pagination strip. Returns the page to jump to, if any button
/// was clicked.
pub fn render_pagination(
    ui: &mut egui::Ui,
    page_info: Option<&PageInfo>,
    theme: &Theme,
) -> Option<u32> {
    let info = page_info?;
    let mut target = None;

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui
            .add_enabled(info.page > 1, egui::Button::new("< Prev"))
            .clicked()
        {
            target = Some(info.page - 1);
        }
        ui.label(format!("Page {} / {}", info.page, info.total_pages.max(1)));
        if ui
            .add_enabled(info.page < info.total_pages, egui::Button::new("Next >"))
            .clicked()
        {
            target = Some(info.page + 1);
        }
        ui.colored_label(theme.dim, format!("{} total", info.total));
    });

    target
}
