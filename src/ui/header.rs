//! Header panel UI rendering
//!
//! Handles the top bar with data source controls, date navigation, grid
//! sizing and the theme selector.

use eframe::egui;
use chrono::Duration;
use std::path::PathBuf;
use crate::app::AppState;
use crate::state::{MAX_CELL_WIDTH, MAX_DAYS_TO_SHOW, MIN_CELL_WIDTH};

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a resources file and a bookings file
    OpenFilesRequested { resources: PathBuf, bookings: PathBuf },
    /// User clicked "Demo Data"
    OpenDemoRequested,
}

fn json_dialog(title: &str) -> rfd::FileDialog {
    rfd::FileDialog::new()
        .set_title(title)
        .add_filter("Schedule Files", &["json", "br"])
        .add_filter("JSON", &["json"])
        .add_filter("Brotli-compressed JSON", &["br"])
}

/// Asks for the resources file, then the bookings file next to it.
fn pick_schedule_files() -> Option<(PathBuf, PathBuf)> {
    let mut dialog = json_dialog("Select resources file");
    if let Ok(cwd) = std::env::current_dir() {
        dialog = dialog.set_directory(cwd);
    }
    let resources = dialog.pick_file()?;

    let mut dialog = json_dialog("Select bookings file");
    if let Some(dir) = resources.parent() {
        dialog = dialog.set_directory(dir);
    }
    let bookings = dialog.pick_file()?;

    Some((resources, bookings))
}

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
/// * `is_loading` - Disables the source buttons while a load is running
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState, is_loading: bool) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.add_enabled_ui(!is_loading, |ui| {
            if ui.button("📁 Open Files").on_hover_text("Pick a resources file, then a bookings file").clicked() {
                if let Some((resources, bookings)) = pick_schedule_files() {
                    interaction = Some(HeaderInteraction::OpenFilesRequested { resources, bookings });
                }
            }

            if ui.button("🎲 Demo Data").clicked() {
                interaction = Some(HeaderInteraction::OpenDemoRequested);
            }
        });

        ui.separator();

        // Date navigation
        let anchor = state.viewport.columns().anchor();
        if ui.button("◀").on_hover_text("Back one week").clicked() {
            state.viewport.set_anchor(anchor - Duration::days(7));
        }
        if ui.button("Today").clicked() {
            state.viewport.set_anchor(rsched::dates::today());
        }
        if ui.button("▶").on_hover_text("Forward one week").clicked() {
            state.viewport.set_anchor(anchor + Duration::days(7));
        }
        ui.label(state.viewport.columns().anchor().format("%b %-d, %Y").to_string());

        ui.separator();

        ui.label("Days:");
        let mut days = state.viewport.columns().days_to_show();
        if ui
            .add(egui::DragValue::new(&mut days).range(1..=MAX_DAYS_TO_SHOW).speed(0.2))
            .changed()
        {
            state.viewport.set_days_to_show(days);
        }

        ui.label("Cell:");
        let mut cell_width = state.viewport.cell_width();
        if ui
            .add(egui::Slider::new(&mut cell_width, MIN_CELL_WIDTH..=MAX_CELL_WIDTH).suffix(" px"))
            .changed()
        {
            state.viewport.set_cell_width(cell_width);
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if old_theme != current_theme {
                state.theme.set_theme(&current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        let color = ui.visuals().error_fg_color;
        ui.colored_label(color, err);
    }

    interaction
}
