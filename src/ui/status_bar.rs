//! Status bar UI rendering
//!
//! Shows memory usage, the loaded source and row/booking counts, plus the
//! range being selected.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::utils::{format_date_range, format_memory_mb, get_current_memory_mb};

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `loader` - Loader, queried for an in-flight load
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, loader: &AsyncLoader) {
    ui.horizontal(|ui| {
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());
        ui.label(RichText::new("|").strong());

        if let Some(source) = loader.loading_source() {
            ui.spinner();
            ui.label(RichText::new(format!("Loading {}…", source)).strong());
        } else if let Some(source) = state.schedule.source() {
            let index = state.row_cache.booking_index();
            ui.label(RichText::new(format!(
                "Source: {} | Groups: {} | Resources: {} | Bookings: {} | Rows: {}",
                source,
                state.schedule.resources().len(),
                state.schedule.child_count(),
                index.len(),
                state.row_cache.len()
            )).strong());

            if index.dropped() > 0 {
                ui.label(RichText::new(format!("({} bookings without a resource)", index.dropped()))
                    .color(ui.visuals().warn_fg_color))
                    .on_hover_text("Bookings whose resource id is a group or unknown are not shown");
            }
        } else {
            ui.label(RichText::new("No schedule loaded").strong());
        }

        if let Some(selection) = state.selection.selection() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (start, end) = selection.bounds();
                ui.label(format!("{}: {}", selection.resource_id, format_date_range(start, end)));
            });
        }
    });
}
