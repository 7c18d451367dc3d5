//! Filter bar: resource name search and booking id lookup.

use eframe::egui;
use crate::app::AppState;

/// Renders the filter inputs and applies them to the row filter.
///
/// Returns `true` if the filter changed this frame.
pub fn render_filter_bar(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let mut edited = false;

    ui.horizontal(|ui| {
        ui.label("🔍");
        edited |= ui
            .add(
                egui::TextEdit::singleline(state.filter.search_text_mut())
                    .hint_text("Search resources")
                    .desired_width(220.0),
            )
            .changed();

        ui.label("Booking #");
        edited |= ui
            .add(
                egui::TextEdit::singleline(state.filter.booking_text_mut())
                    .hint_text("id")
                    .desired_width(100.0),
            )
            .changed();

        if ui
            .add_enabled(state.filter.filter().is_active(), egui::Button::new("✖ Clear"))
            .clicked()
        {
            state.filter.search_text_mut().clear();
            state.filter.booking_text_mut().clear();
            edited = true;
        }

        if state.filter.filter().is_active() {
            ui.label(
                egui::RichText::new(format!("{} rows", state.row_cache.len()))
                    .color(ui.visuals().weak_text_color()),
            );
        }
    });

    if !edited {
        return false;
    }

    let changed = state.filter.apply();
    if changed {
        log::debug!(
            "Filter changed: search={:?} booking={:?}",
            state.filter.filter().search_term(),
            state.filter.filter().booking_id()
        );
        state.refresh_rows();

        // Bring the first booked resource into view
        if state.filter.filter().booking_id().is_some() {
            if let Some(row) = state.row_cache.rows().iter().find(|row| !row.is_parent()) {
                let index = row.index;
                let height = state.viewport.body_height();
                state.viewport.controller_mut().scroll_to_row(index, height);
            }
        }
    }
    changed
}
