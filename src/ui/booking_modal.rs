//! Booking confirmation dialog shown after a drag selection.

use eframe::egui;
use crate::app::AppState;
use crate::utils::format_date_range;
use rsched::{hex_to_color32, resource_name, ThemeColors};

const SWATCHES: &[&str] = &["#4f86c6", "#e07a5f", "#81b29a", "#f2cc8f", "#9b5de5", "#3d405b"];
const SWATCH_SIZE: f32 = 22.0;

/// Result of user interaction with the dialog
pub enum ModalInteraction {
    Confirmed,
    Cancelled,
}

/// Renders the dialog while it is open.
///
/// The form fields edit `state.selection`'s form in place; the caller turns
/// `Confirmed` into a booking request.
pub fn render_booking_modal(
    ctx: &egui::Context,
    state: &mut AppState,
    theme_colors: &ThemeColors,
) -> Option<ModalInteraction> {
    if !state.selection.is_modal_open() {
        return None;
    }
    let selection = state.selection.selection()?.normalized();
    let resource_label = resource_name(state.schedule.resources(), &selection.resource_id)
        .map(str::to_string)
        .unwrap_or_else(|| selection.resource_id.to_string());

    let mut interaction = None;

    egui::Window::new("New Booking")
        .id(egui::Id::new("booking_modal"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            egui::Grid::new("booking_modal_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Resource:");
                    ui.strong(&resource_label);
                    ui.end_row();

                    ui.label("Dates:");
                    ui.label(format_date_range(selection.start_date, selection.end_date));
                    ui.end_row();

                    let form = state.selection.form_mut();

                    ui.label("Name:");
                    let name_response = ui.add(
                        egui::TextEdit::singleline(&mut form.name)
                            .hint_text("Guest or purpose")
                            .desired_width(240.0),
                    );
                    if ui.memory(|m| m.focused().is_none()) {
                        name_response.request_focus();
                    }
                    ui.end_row();

                    ui.label("Notes:");
                    ui.add(
                        egui::TextEdit::multiline(&mut form.notes)
                            .desired_rows(3)
                            .desired_width(240.0),
                    );
                    ui.end_row();

                    ui.label("Color:");
                    ui.horizontal(|ui| {
                        if ui.selectable_label(form.color.is_none(), "Default").clicked() {
                            form.color = None;
                        }
                        for hex in SWATCHES {
                            let selected = form.color.as_deref() == Some(*hex);
                            if color_swatch(ui, hex, selected, theme_colors).clicked() {
                                form.color = Some(hex.to_string());
                            }
                        }
                    });
                    ui.end_row();
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("✔ Create Booking").clicked() {
                    interaction = Some(ModalInteraction::Confirmed);
                }
                if ui.button("Cancel").clicked() {
                    interaction = Some(ModalInteraction::Cancelled);
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        interaction = Some(ModalInteraction::Cancelled);
    }

    interaction
}

fn color_swatch(ui: &mut egui::Ui, hex: &str, selected: bool, theme_colors: &ThemeColors) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), egui::Sense::click());
    let painter = ui.painter();
    painter.rect_filled(rect.shrink(2.0), 3.0, hex_to_color32(hex));
    if selected || response.hovered() {
        let width = if selected { 2.0 } else { 1.0 };
        painter.rect_stroke(
            rect,
            4.0,
            egui::Stroke::new(width, theme_colors.selection_stroke),
            egui::StrokeKind::Inside,
        );
    }
    response.on_hover_text(hex)
}
